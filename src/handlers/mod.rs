pub mod attempt_handler;
pub mod health_handler;
pub mod leaderboard_handler;
pub mod profile_handler;
pub mod quiz_handler;

pub use attempt_handler::get_my_attempts;
pub use health_handler::health_check;
pub use leaderboard_handler::get_leaderboard;
pub use profile_handler::get_my_profile;
pub use quiz_handler::{get_quiz, list_quizzes, submit_attempt};
