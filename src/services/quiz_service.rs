use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::quiz::{Quiz, QuizRecord},
    repositories::QuizRepository,
    services::{normalizer, quiz_session::QuizSession},
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    /// Load a quiz ready for taking: one fetch, questions sorted by
    /// display order, options normalized.
    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(Self::into_quiz(record))
    }

    pub async fn start_session(&self, id: &str) -> AppResult<QuizSession> {
        let quiz = self.get_quiz(id).await?;
        Ok(QuizSession::new(quiz))
    }

    pub async fn list_quizzes(&self, offset: i64, limit: i64) -> AppResult<(Vec<QuizRecord>, i64)> {
        self.repository.list_quizzes(offset, limit).await
    }

    fn into_quiz(record: QuizRecord) -> Quiz {
        let mut questions: Vec<_> = record
            .questions
            .into_iter()
            .map(normalizer::normalize_question)
            .collect();

        // the store does not guarantee order; the sort is stable
        questions.sort_by_key(|question| question.order_in_quiz);

        Quiz {
            id: record.id,
            title: record.title,
            description: record.description,
            image_url: record.image_url,
            pass_score: record.pass_score,
            questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use serde_json::json;

    #[test]
    fn questions_are_sorted_ascending_by_display_order() {
        let record = fixtures::quiz_record(
            "quiz-1",
            None,
            vec![
                fixtures::short_answer_question("q-c", 3, "Paris"),
                fixtures::structured_question("q-a", 1),
                fixtures::legacy_question("q-b", 2),
            ],
        );

        let quiz = QuizService::into_quiz(record);
        let ids: Vec<&str> = quiz.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q-a", "q-b", "q-c"]);
    }

    #[test]
    fn normalization_covers_both_stored_encodings() {
        let record = fixtures::quiz_record(
            "quiz-1",
            Some(1),
            vec![
                fixtures::structured_question("q-a", 1),
                fixtures::legacy_question("q-b", 2),
            ],
        );

        let quiz = QuizService::into_quiz(record);

        assert!(quiz.questions[0].options[0].is_correct);
        assert_eq!(quiz.questions[1].options[0].id, "q-b-option-0");
        assert!(quiz.questions[1].options[0].is_correct);
        assert!(!quiz.questions[1].options[1].is_correct);
    }

    #[test]
    fn one_malformed_question_does_not_block_the_rest() {
        let mut broken = fixtures::structured_question("q-broken", 1);
        broken.options = Some(json!("{{{ not json"));
        let record = fixtures::quiz_record(
            "quiz-1",
            None,
            vec![broken, fixtures::structured_question("q-ok", 2)],
        );

        let quiz = QuizService::into_quiz(record);

        assert_eq!(quiz.questions.len(), 2);
        // the broken question degraded to a single sentinel option
        assert_eq!(quiz.questions[0].options.len(), 1);
        assert!(!quiz.questions[0].options[0].is_correct);
        // the healthy question normalized as usual
        assert_eq!(quiz.questions[1].options.len(), 2);
        assert!(quiz.questions[1].options[0].is_correct);
    }
}
