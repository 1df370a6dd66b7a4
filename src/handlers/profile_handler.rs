use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, auth::AuthenticatedUser, errors::AppError};

/// The caller's own profile, bonus-point balance included.
#[get("/api/me")]
pub async fn get_my_profile(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.profile_service.get_profile(&auth.0.id).await?;
    Ok(HttpResponse::Ok().json(profile))
}
