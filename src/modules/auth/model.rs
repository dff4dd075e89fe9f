use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::students::model::StudentSelfView;

/// Claims carried by issued access tokens.
///
/// The `jti` makes every issued token distinct, so each login session can
/// be revoked independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Student serial number
    pub sub: String,
    /// Unique token id
    pub jti: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(range(min = 1))]
    pub serial_number: i64,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Returned by register and login: the student's own view of their record
/// plus a bearer token.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub student: StudentSelfView,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
