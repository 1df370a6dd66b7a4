use std::collections::HashMap;

use crate::errors::{AppError, AppResult};
use crate::models::domain::attempt::AttemptOutcome;
use crate::models::domain::question::Question;
use crate::models::domain::quiz::Quiz;
use crate::services::grading_service::GradingService;

/// A learner's answer to one question. Choice questions carry the selected
/// option's id, text questions the raw input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Selected(String),
    Text(String),
}

impl Answer {
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Selected(id) => id.is_empty(),
            Answer::Text(text) => text.is_empty(),
        }
    }
}

/// One in-progress attempt: a cursor over the quiz's ordered questions and
/// the answers captured so far. Created empty at load, consumed at submit,
/// reset to empty by a retake. Each load builds a fresh session; nothing
/// is shared across attempts.
#[derive(Clone, Debug)]
pub struct QuizSession {
    quiz: Quiz,
    cursor: usize,
    answers: HashMap<String, Answer>,
    outcome: Option<AttemptOutcome>,
}

impl QuizSession {
    /// Expects the quiz to be normalized and sorted already.
    pub fn new(quiz: Quiz) -> Self {
        QuizSession {
            quiz,
            cursor: 0,
            answers: HashMap::new(),
            outcome: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.cursor)
    }

    pub fn is_last_question(&self) -> bool {
        !self.quiz.questions.is_empty() && self.cursor + 1 == self.quiz.questions.len()
    }

    /// Store an answer under the question's id. Last write wins.
    pub fn record_answer(&mut self, question_id: &str, answer: Answer) {
        self.answers.insert(question_id.to_string(), answer);
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Whether the current question has a non-empty answer. The advance
    /// and submit controls stay disabled until it does.
    pub fn current_answered(&self) -> bool {
        self.current_question()
            .and_then(|question| self.answers.get(&question.id))
            .map(|answer| !answer.is_empty())
            .unwrap_or(false)
    }

    /// Move the cursor to the next question. Rejected while the current
    /// question is unanswered; the final question submits instead.
    pub fn advance(&mut self) -> AppResult<usize> {
        if self.outcome.is_some() {
            return Err(AppError::ValidationError(
                "attempt has already been submitted".to_string(),
            ));
        }

        if !self.current_answered() {
            return Err(AppError::ValidationError(
                "current question has no answer".to_string(),
            ));
        }

        if self.is_last_question() {
            return Err(AppError::ValidationError(
                "the final question submits instead of advancing".to_string(),
            ));
        }

        self.cursor += 1;
        Ok(self.cursor)
    }

    /// Score the attempt. Only available on the final question, with its
    /// answer in place, and only once per attempt.
    pub fn submit(&mut self) -> AppResult<AttemptOutcome> {
        if self.outcome.is_some() {
            return Err(AppError::ValidationError(
                "attempt has already been submitted".to_string(),
            ));
        }

        if !self.quiz.questions.is_empty() {
            if !self.is_last_question() {
                return Err(AppError::ValidationError(
                    "submit is only available on the final question".to_string(),
                ));
            }

            if !self.current_answered() {
                return Err(AppError::ValidationError(
                    "current question has no answer".to_string(),
                ));
            }
        }

        let outcome = GradingService::grade_attempt(&self.quiz, &self.answers);
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    pub fn outcome(&self) -> Option<&AttemptOutcome> {
        self.outcome.as_ref()
    }

    /// Back to question zero with a clean slate, without re-fetching.
    pub fn retake(&mut self) {
        self.cursor = 0;
        self.answers.clear();
        self.outcome = None;
    }
}
