#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    use crate::models::domain::profile::Profile;
    use crate::models::domain::question::{QuestionRecord, QuestionType};
    use crate::models::domain::quiz::QuizRecord;

    /// A choice question stored with structured options.
    pub fn structured_question(id: &str, order_in_quiz: i32) -> QuestionRecord {
        QuestionRecord {
            id: id.to_string(),
            question_text: format!("Question {}", id),
            question_type: QuestionType::MultipleChoice,
            order_in_quiz,
            image_url: None,
            hint: Some("re-read the lesson".to_string()),
            options: Some(json!([
                {"id": format!("{}-option-0", id), "option_text": "right", "is_correct": true},
                {"id": format!("{}-option-1", id), "option_text": "wrong", "is_correct": false}
            ])),
            correct_answer_index: None,
            correct_answer_text: None,
        }
    }

    /// A choice question stored the legacy way: plain strings plus an index.
    pub fn legacy_question(id: &str, order_in_quiz: i32) -> QuestionRecord {
        QuestionRecord {
            id: id.to_string(),
            question_text: format!("Question {}", id),
            question_type: QuestionType::TrueFalse,
            order_in_quiz,
            image_url: None,
            hint: None,
            options: Some(json!(["True", "False"])),
            correct_answer_index: Some(0),
            correct_answer_text: None,
        }
    }

    pub fn short_answer_question(id: &str, order_in_quiz: i32, expected: &str) -> QuestionRecord {
        QuestionRecord {
            id: id.to_string(),
            question_text: "Capital of France?".to_string(),
            question_type: QuestionType::ShortAnswer,
            order_in_quiz,
            image_url: None,
            hint: Some("starts with P".to_string()),
            options: None,
            correct_answer_index: None,
            correct_answer_text: Some(expected.to_string()),
        }
    }

    pub fn quiz_record(id: &str, pass_score: Option<i32>, questions: Vec<QuestionRecord>) -> QuizRecord {
        QuizRecord {
            id: id.to_string(),
            title: format!("Quiz {}", id),
            description: Some("fixture quiz".to_string()),
            image_url: None,
            pass_score,
            questions,
        }
    }

    pub fn profile_with_points(id: &str, username: &str, bonus_points: i64) -> Profile {
        let mut profile = Profile::new(id, Some(username), None);
        profile.bonus_points = bonus_points;
        profile
    }
}
