use serde::{Deserialize, Serialize};

use crate::models::domain::question::{Question, QuestionRecord};

/// Stored shape of a quiz document, questions embedded.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizRecord {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_score: Option<i32>,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

/// A quiz ready to be taken: questions sorted by display order, options
/// normalized. Immutable for the lifetime of an attempt.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub pass_score: Option<i32>,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// A quiz without a pass threshold can never be passed.
    pub fn is_passing(&self, score: i32) -> bool {
        match self.pass_score {
            Some(threshold) => score >= threshold,
            None => false,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
