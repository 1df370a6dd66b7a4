use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAttemptRepository, MongoProfileRepository, MongoQuizRepository},
    services::{
        attempt_service::AttemptService, leaderboard_service::LeaderboardService,
        profile_service::ProfileService, quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub quiz_service: Arc<QuizService>,
    pub attempt_service: Arc<AttemptService>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub profile_service: Arc<ProfileService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let attempt_repository = Arc::new(MongoAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let profile_repository = Arc::new(MongoProfileRepository::new(&db));
        profile_repository.ensure_indexes().await?;

        let quiz_service = Arc::new(QuizService::new(quiz_repository));
        let attempt_service = Arc::new(AttemptService::new(
            attempt_repository.clone(),
            profile_repository.clone(),
        ));
        let leaderboard_service = Arc::new(LeaderboardService::new(
            attempt_repository,
            profile_repository.clone(),
        ));
        let profile_service = Arc::new(ProfileService::new(profile_repository));

        Ok(Self {
            db,
            quiz_service,
            attempt_service,
            leaderboard_service,
            profile_service,
            config: Arc::new(config),
        })
    }
}
