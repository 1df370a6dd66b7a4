use std::collections::HashMap;

use crate::models::domain::attempt::{AttemptOutcome, QuestionFeedback};
use crate::models::domain::question::{Question, QuestionType};
use crate::models::domain::quiz::Quiz;
use crate::services::quiz_session::Answer;

pub struct GradingService;

impl GradingService {
    /// Grade a completed attempt against the quiz's correctness data.
    ///
    /// Runs synchronously, once, in question order. Never fails: a missing
    /// or mismatched answer is simply incorrect. The final score is the
    /// count of correct questions.
    pub fn grade_attempt(quiz: &Quiz, answers: &HashMap<String, Answer>) -> AttemptOutcome {
        let mut score = 0;
        let mut feedback = Vec::with_capacity(quiz.questions.len());

        for question in &quiz.questions {
            let is_correct = Self::grade_question(question, answers.get(&question.id));
            if is_correct {
                score += 1;
            }

            feedback.push(QuestionFeedback {
                question_id: question.id.clone(),
                is_correct,
                hint: if is_correct {
                    None
                } else {
                    question.hint.clone()
                },
                grading_guidance: match question.question_type {
                    QuestionType::Essay => question.correct_answer_text.clone(),
                    _ => None,
                },
            });
        }

        AttemptOutcome {
            score,
            total_questions: quiz.questions.len(),
            is_passed: quiz.is_passing(score),
            feedback,
        }
    }

    /// Grade an individual question based on type.
    fn grade_question(question: &Question, answer: Option<&Answer>) -> bool {
        match question.question_type {
            QuestionType::MultipleChoice | QuestionType::TrueFalse => {
                let selected = match answer {
                    Some(Answer::Selected(id)) if !id.is_empty() => Some(id.as_str()),
                    _ => None,
                };

                if let Some(correct) = question.correct_option() {
                    selected == Some(correct.id.as_str())
                } else if let Some(index) = question.correct_answer_index {
                    // Legacy fallback: no option carries the flag, the
                    // stored index names the correct one.
                    match question.options.get(index) {
                        Some(option) => selected == Some(option.id.as_str()),
                        None => false,
                    }
                } else {
                    false
                }
            }
            QuestionType::ShortAnswer => {
                let Some(expected) = question.correct_answer_text.as_deref() else {
                    return false;
                };

                match answer {
                    Some(Answer::Text(text)) => text.to_lowercase() == expected.to_lowercase(),
                    _ => false,
                }
            }
            // Essays need a human grader; the automated path never
            // marks them correct.
            QuestionType::Essay => false,
        }
    }
}
