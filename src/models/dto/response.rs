use serde::{Deserialize, Serialize};

use crate::models::domain::attempt::{AttemptRecord, QuestionFeedback};
use crate::models::domain::question::{Question, QuestionType};
use crate::models::domain::quiz::{Quiz, QuizRecord};
use crate::services::attempt_service::AttemptReceipt;

/// Listing shape for the quiz catalog.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSummaryDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub question_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_score: Option<i32>,
}

impl From<&QuizRecord> for QuizSummaryDto {
    fn from(record: &QuizRecord) -> Self {
        QuizSummaryDto {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            image_url: record.image_url.clone(),
            question_count: record.questions.len(),
            pass_score: record.pass_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizListResponse {
    pub quizzes: Vec<QuizSummaryDto>,
    pub total: i64,
}

/// A quiz as handed to a learner about to take it. Correctness data never
/// leaves the server before submission: options lose their flag, and the
/// canonical short-answer text is withheld.
#[derive(Debug, Clone, Serialize)]
pub struct QuizDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_score: Option<i32>,
    pub questions: Vec<QuestionDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    pub order_in_quiz: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub options: Vec<OptionDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionDto {
    pub id: String,
    pub text: String,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            image_url: quiz.image_url,
            pass_score: quiz.pass_score,
            questions: quiz.questions.into_iter().map(QuestionDto::from).collect(),
        }
    }
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            question_text: question.question_text,
            question_type: question.question_type,
            order_in_quiz: question.order_in_quiz,
            image_url: question.image_url,
            hint: question.hint,
            options: question
                .options
                .into_iter()
                .map(|option| OptionDto {
                    id: option.id,
                    text: option.text,
                })
                .collect(),
        }
    }
}

/// The learner-facing result of a submitted attempt.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptResultDto {
    pub score: i32,
    pub total_questions: usize,
    pub is_passed: bool,
    pub recorded: bool,
    pub bonus_awarded: bool,
    pub feedback: Vec<QuestionFeedback>,
}

impl AttemptResultDto {
    pub fn new(
        score: i32,
        total_questions: usize,
        is_passed: bool,
        receipt: AttemptReceipt,
        feedback: Vec<QuestionFeedback>,
    ) -> Self {
        AttemptResultDto {
            score,
            total_questions,
            is_passed,
            recorded: receipt.recorded,
            bonus_awarded: receipt.bonus_awarded,
            feedback,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptHistoryResponse {
    pub attempts: Vec<AttemptRecord>,
    pub total: i64,
}

/// Derived ranking row, recomputed on every load. Serialized with the
/// camelCase names the portal frontend expects.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub total_score: i64,
    pub total_attempts: i64,
    pub total_passed_quizzes: i64,
    pub average_score: f64,
    pub current_bonus_points: i64,
}
