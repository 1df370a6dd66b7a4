use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed pass through a quiz, as persisted. Insert-only: retakes
/// insert a new record, nothing is ever updated in place. The field names
/// are the de facto schema shared with previously stored data.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AttemptRecord {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub score_obtained: i32,
    pub is_passed: bool,
    pub attempted_at: DateTime<Utc>,
}

impl AttemptRecord {
    pub fn new(user_id: &str, quiz_id: &str, score_obtained: i32, is_passed: bool) -> Self {
        AttemptRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            score_obtained,
            is_passed,
            attempted_at: Utc::now(),
        }
    }
}

/// Per-question grading result. The hint only travels with incorrect
/// answers; `grading_guidance` carries an essay question's reference
/// answer for a human grader, never compared automatically.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuestionFeedback {
    pub question_id: String,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading_guidance: Option<String>,
}

/// The in-memory result of scoring one attempt. Authoritative for display
/// even when persisting the attempt record fails.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AttemptOutcome {
    pub score: i32,
    pub total_questions: usize,
    pub is_passed: bool,
    pub feedback: Vec<QuestionFeedback>,
}
