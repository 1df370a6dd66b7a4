use std::collections::HashMap;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::MaybeUser,
    errors::{AppError, AppResult},
    models::domain::attempt::AttemptOutcome,
    models::dto::request::{AnswerInput, PaginationParams, SubmitAttemptRequest},
    models::dto::response::{AttemptResultDto, QuizDto, QuizListResponse, QuizSummaryDto},
    services::quiz_session::{Answer, QuizSession},
};

#[get("/api/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let (records, total) = state
        .quiz_service
        .list_quizzes(query.offset(), query.limit())
        .await?;

    Ok(HttpResponse::Ok().json(QuizListResponse {
        quizzes: records.iter().map(QuizSummaryDto::from).collect(),
        total,
    }))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizDto::from(quiz)))
}

/// Submit a full answer set for a quiz. The answers are replayed through
/// the session state machine, so a set that skips a question is rejected
/// the same way the portal disables its Next button. Scoring and the
/// follow-up side effects happen per the engine rules; anonymous
/// submissions are scored but never recorded.
#[post("/api/quizzes/{id}/attempts")]
pub async fn submit_attempt(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitAttemptRequest>,
    user: MaybeUser,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let mut session = state.quiz_service.start_session(&id).await?;
    let outcome = replay_answers(&mut session, &request.answers)?;

    let receipt = state
        .attempt_service
        .finalize_attempt(&id, &outcome, user.0.as_ref())
        .await;

    Ok(HttpResponse::Ok().json(AttemptResultDto::new(
        outcome.score,
        outcome.total_questions,
        outcome.is_passed,
        receipt,
        outcome.feedback,
    )))
}

fn replay_answers(
    session: &mut QuizSession,
    answers: &[AnswerInput],
) -> AppResult<AttemptOutcome> {
    // last write wins for duplicate question ids, like the capture map
    let mut provided: HashMap<String, Answer> = HashMap::new();
    for input in answers {
        if let Some(answer) = input.to_answer() {
            provided.insert(input.question_id.clone(), answer);
        }
    }

    let question_ids: Vec<String> = session
        .quiz()
        .questions
        .iter()
        .map(|question| question.id.clone())
        .collect();

    for (index, question_id) in question_ids.iter().enumerate() {
        if let Some(answer) = provided.get(question_id) {
            session.record_answer(question_id, answer.clone());
        }

        if index + 1 < question_ids.len() {
            session.advance().map_err(|_| {
                AppError::ValidationError(format!("question '{}' has no answer", question_id))
            })?;
        }
    }

    session.submit()
}
