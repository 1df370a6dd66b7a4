pub mod attempt_service;
pub mod grading_service;
pub mod leaderboard_service;
pub mod normalizer;
pub mod profile_service;
pub mod quiz_service;
pub mod quiz_session;
