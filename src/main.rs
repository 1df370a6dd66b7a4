use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use learnhub_server::{app_state::AppState, auth::JwtService, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::list_quizzes)
            .service(handlers::get_quiz)
            .service(handlers::submit_attempt)
            .service(handlers::get_my_attempts)
            .service(handlers::get_my_profile)
            .service(handlers::get_leaderboard)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
