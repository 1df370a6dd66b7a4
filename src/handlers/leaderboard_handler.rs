use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

/// Ranked leaderboard, recomputed on every request. A fetch failure
/// surfaces as an error for the whole view; no partial aggregate is shown.
#[get("/api/leaderboard")]
pub async fn get_leaderboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries = state.leaderboard_service.compute().await?;
    Ok(HttpResponse::Ok().json(entries))
}
