use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::quiz_session::Answer;

/// One submitted answer. Choice questions fill `selected_option_id`,
/// text questions fill `answer_text`; an entry with neither counts as
/// unanswered and fails the sequential gate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerInput {
    pub question_id: String,
    #[serde(default)]
    pub selected_option_id: Option<String>,
    #[serde(default)]
    pub answer_text: Option<String>,
}

impl AnswerInput {
    pub fn to_answer(&self) -> Option<Answer> {
        if let Some(option_id) = &self.selected_option_id {
            return Some(Answer::Selected(option_id.clone()));
        }
        self.answer_text.clone().map(Answer::Text)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAttemptRequest {
    #[validate(length(min = 1, message = "at least one answer is required"))]
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}

/// Query parameters for the attempt-history view.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttemptHistoryParams {
    #[serde(default)]
    pub quiz_id: Option<String>,

    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl AttemptHistoryParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_input_prefers_the_selected_option() {
        let input = AnswerInput {
            question_id: "q-1".to_string(),
            selected_option_id: Some("q-1-option-0".to_string()),
            answer_text: Some("ignored".to_string()),
        };

        assert_eq!(
            input.to_answer(),
            Some(Answer::Selected("q-1-option-0".to_string()))
        );
    }

    #[test]
    fn answer_input_falls_back_to_text() {
        let input = AnswerInput {
            question_id: "q-1".to_string(),
            selected_option_id: None,
            answer_text: Some("Paris".to_string()),
        };

        assert_eq!(input.to_answer(), Some(Answer::Text("Paris".to_string())));
    }

    #[test]
    fn empty_answer_input_yields_no_answer() {
        let input = AnswerInput {
            question_id: "q-1".to_string(),
            selected_option_id: None,
            answer_text: None,
        };

        assert!(input.to_answer().is_none());
    }

    #[test]
    fn submit_request_requires_at_least_one_answer() {
        let request = SubmitAttemptRequest { answers: vec![] };
        assert!(request.validate().is_err());
    }

    #[test]
    fn pagination_clamps_the_limit() {
        let params = PaginationParams {
            offset: None,
            limit: Some(500),
        };

        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 100);
    }
}
