pub mod attempt;
pub mod profile;
pub mod question;
pub mod quiz;

pub use attempt::{AttemptOutcome, AttemptRecord, QuestionFeedback};
pub use profile::Profile;
pub use question::{Question, QuestionOption, QuestionType};
pub use quiz::{Quiz, QuizRecord};
