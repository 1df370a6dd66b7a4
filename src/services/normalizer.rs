use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::domain::question::{Question, QuestionOption, QuestionRecord, QuestionType};

/// Raw option payloads come in two recognized encodings, sometimes wrapped
/// in a JSON string. Anything else decodes to an error and the caller
/// degrades to a sentinel option so the rest of the quiz keeps loading.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionEncoding {
    Texts(Vec<String>),
    Structured(Vec<RawOption>),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawOption {
    #[serde(default)]
    pub id: Option<String>,
    pub option_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Error)]
pub enum OptionDecodeError {
    #[error("options payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("options payload has an unrecognized shape")]
    UnrecognizedShape,
}

/// Decode a raw options value into one of the recognized encodings.
/// A string payload is parsed as JSON first and re-dispatched through the
/// same shape rules.
pub fn decode_options(raw: &Value) -> Result<OptionEncoding, OptionDecodeError> {
    let value = match raw {
        Value::String(encoded) => serde_json::from_str::<Value>(encoded)?,
        other => other.clone(),
    };

    serde_json::from_value::<OptionEncoding>(value)
        .map_err(|_| OptionDecodeError::UnrecognizedShape)
}

/// Normalize a question's raw options into the uniform in-memory shape.
///
/// Plain strings get synthetic ids and the `correct_answer_index` element
/// is flagged correct; structured options keep their own flag and id
/// (synthesized when absent). An undecodable payload yields exactly one
/// sentinel option carrying the raw value as its text.
pub fn normalize_options(
    question_id: &str,
    raw: Option<&Value>,
    correct_answer_index: Option<i64>,
) -> Vec<QuestionOption> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match decode_options(raw) {
        Ok(OptionEncoding::Texts(texts)) => texts
            .iter()
            .enumerate()
            .map(|(index, text)| QuestionOption {
                id: format!("{}-option-{}", question_id, index),
                text: text.clone(),
                is_correct: correct_answer_index == Some(index as i64),
            })
            .collect(),
        Ok(OptionEncoding::Structured(options)) => options
            .into_iter()
            .enumerate()
            .map(|(index, option)| QuestionOption {
                id: option
                    .id
                    .unwrap_or_else(|| format!("{}-option-{}", question_id, index)),
                text: option.option_text,
                is_correct: option.is_correct,
            })
            .collect(),
        Err(err) => {
            log::warn!(
                "question {}: unusable options payload ({}), substituting sentinel option",
                question_id,
                err
            );
            vec![sentinel_option(question_id, raw)]
        }
    }
}

fn sentinel_option(question_id: &str, raw: &Value) -> QuestionOption {
    let text = match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    QuestionOption {
        id: format!("{}-option-0", question_id),
        text,
        is_correct: false,
    }
}

/// Turn a stored question record into its normalized in-memory shape.
/// Runs once per question, at quiz load.
pub fn normalize_question(record: QuestionRecord) -> Question {
    let options = match record.question_type {
        QuestionType::ShortAnswer | QuestionType::Essay => Vec::new(),
        QuestionType::MultipleChoice | QuestionType::TrueFalse => normalize_options(
            &record.id,
            record.options.as_ref(),
            record.correct_answer_index,
        ),
    };

    let correct_answer_index = record
        .correct_answer_index
        .and_then(|index| usize::try_from(index).ok());

    Question {
        id: record.id,
        question_text: record.question_text,
        question_type: record.question_type,
        order_in_quiz: record.order_in_quiz,
        image_url: record.image_url,
        hint: record.hint,
        options,
        correct_answer_index,
        correct_answer_text: record.correct_answer_text,
    }
}
