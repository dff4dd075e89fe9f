use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{token_digest, verify_token};

/// Extractor that validates the bearer token and resolves the calling
/// student.
///
/// A token is only accepted while its digest is still recorded in the
/// `auth_tokens` store, so logout and logout-all take effect immediately
/// even for tokens that have not expired.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub serial_number: i64,
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = verify_token(&token, &state.jwt_config)?;

        let live = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM auth_tokens WHERE token_digest = $1 AND expires_at > NOW())",
        )
        .bind(token_digest(&token))
        .fetch_one(&state.db)
        .await
        .map_err(AppError::database)?;

        if !live {
            return Err(AppError::unauthorized("Token has been revoked".to_string()));
        }

        let serial_number = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::unauthorized("Invalid subject in token".to_string()))?;

        Ok(AuthUser {
            serial_number,
            claims,
        })
    }
}

/// The raw presented bearer token, for the logout handler that needs to
/// revoke exactly the token it was called with.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        bearer_token(parts).map(BearerToken)
    }
}

fn bearer_token(parts: &Parts) -> Result<String, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format".to_string()))
}
