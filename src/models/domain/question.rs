use serde::{Deserialize, Serialize};

/// Stored shape of a question, exactly as it comes back from the quizzes
/// collection. `options` is left untyped on purpose: legacy documents carry
/// plain string arrays, newer ones carry structured objects, and some store
/// the whole array as a JSON string. Decoding happens once, at load.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub order_in_quiz: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer_text: Option<String>,
}

/// In-memory question with options already normalized.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    pub order_in_quiz: i32,
    pub image_url: Option<String>,
    pub hint: Option<String>,
    pub options: Vec<QuestionOption>,
    pub correct_answer_index: Option<usize>,
    pub correct_answer_text: Option<String>,
}

impl Question {
    /// The option flagged correct, if any. At most one option is expected
    /// to carry the flag; the first match wins.
    pub fn correct_option(&self) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.is_correct)
    }

    pub fn is_choice(&self) -> bool {
        matches!(
            self.question_type,
            QuestionType::MultipleChoice | QuestionType::TrueFalse
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_round_trip_serialization() {
        let variants = [
            QuestionType::MultipleChoice,
            QuestionType::TrueFalse,
            QuestionType::ShortAnswer,
            QuestionType::Essay,
        ];

        for variant in variants {
            let json = serde_json::to_string(&variant).expect("variant should serialize");
            let parsed: QuestionType =
                serde_json::from_str(&json).expect("variant should deserialize");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn question_type_uses_snake_case_wire_names() {
        let json = serde_json::to_string(&QuestionType::MultipleChoice).unwrap();
        assert_eq!(json, "\"multiple_choice\"");

        let parsed: QuestionType = serde_json::from_str("\"true_false\"").unwrap();
        assert_eq!(parsed, QuestionType::TrueFalse);
    }

    #[test]
    fn question_type_rejects_unknown_variant() {
        let invalid = "\"fill_in_the_blank\"";
        let parsed = serde_json::from_str::<QuestionType>(invalid);

        assert!(parsed.is_err());
    }

    #[test]
    fn correct_option_finds_the_flagged_option() {
        let question = Question {
            id: "q-1".to_string(),
            question_text: "Pick one".to_string(),
            question_type: QuestionType::MultipleChoice,
            order_in_quiz: 1,
            image_url: None,
            hint: None,
            options: vec![
                QuestionOption {
                    id: "q-1-option-0".to_string(),
                    text: "wrong".to_string(),
                    is_correct: false,
                },
                QuestionOption {
                    id: "q-1-option-1".to_string(),
                    text: "right".to_string(),
                    is_correct: true,
                },
            ],
            correct_answer_index: None,
            correct_answer_text: None,
        };

        assert_eq!(
            question.correct_option().map(|o| o.id.as_str()),
            Some("q-1-option-1")
        );
        assert!(question.is_choice());
    }

    #[test]
    fn question_record_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": "q-1",
            "question_text": "What is 2 + 2?",
            "question_type": "short_answer"
        }"#;

        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.order_in_quiz, 0);
        assert!(record.options.is_none());
        assert!(record.correct_answer_text.is_none());
    }
}
