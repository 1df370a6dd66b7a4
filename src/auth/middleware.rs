use std::future::{ready, Ready};

use actix_web::{http::header::AUTHORIZATION, FromRequest, HttpRequest};

use crate::{
    auth::{Claims, JwtService},
    errors::AppError,
};

/// The resolved caller, as far as the engine cares: an id to attribute the
/// attempt to and target the bonus update at, plus an email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        CurrentUser {
            id: claims.sub,
            email: claims.email,
        }
    }
}

fn user_from_request(req: &HttpRequest) -> Result<Option<CurrentUser>, AppError> {
    let Some(header) = req.headers().get(AUTHORIZATION) else {
        return Ok(None);
    };

    let header = header
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    let jwt_service = req
        .app_data::<actix_web::web::Data<JwtService>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    let claims = jwt_service.validate_token(token)?;
    Ok(Some(CurrentUser::from(claims)))
}

/// Extractor for handlers that require a signed-in caller.
pub struct AuthenticatedUser(pub CurrentUser);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let result = match user_from_request(req) {
            Ok(Some(user)) => Ok(AuthenticatedUser(user)),
            Ok(None) => Err(AppError::Unauthorized("Not authenticated".to_string())),
            Err(err) => Err(err),
        };

        ready(result)
    }
}

/// Extractor for handlers that work with or without a caller. A missing
/// token means anonymous; a present but invalid token is still rejected so
/// a client with an expired session notices instead of silently losing
/// attribution.
pub struct MaybeUser(pub Option<CurrentUser>);

impl FromRequest for MaybeUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(user_from_request(req).map(MaybeUser))
    }
}
