use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::AttemptHistoryParams,
    models::dto::response::AttemptHistoryResponse,
};

/// The caller's attempt history, newest first.
#[get("/api/me/attempts")]
pub async fn get_my_attempts(
    state: web::Data<AppState>,
    query: web::Query<AttemptHistoryParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let (attempts, total) = state
        .attempt_service
        .get_user_attempts(
            &auth.0.id,
            query.quiz_id.as_deref(),
            query.offset(),
            query.limit(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(AttemptHistoryResponse { attempts, total }))
}
