//! Staff-only gating for administrative routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use sqlx::PgPool;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that rejects callers whose record does not carry the staff
/// flag. The flag is read from the database rather than the token so that
/// demoting a staff member takes effect without waiting for token expiry.
///
/// # Usage
///
/// ```rust,ignore
/// Router::new()
///     .nest(
///         "/teachers",
///         init_teachers_router()
///             .route_layer(middleware::from_fn_with_state(state.clone(), require_staff)),
///     )
/// ```
pub async fn require_staff(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if !is_staff(&state.db, auth_user.serial_number).await? {
        return Err(AppError::forbidden("Staff access required".to_string()));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

pub async fn is_staff(db: &PgPool, serial_number: i64) -> Result<bool, AppError> {
    let staff = sqlx::query_scalar::<_, bool>(
        "SELECT is_staff FROM students WHERE serial_number = $1",
    )
    .bind(serial_number)
    .fetch_optional(db)
    .await
    .map_err(AppError::database)?
    .unwrap_or(false);

    Ok(staff)
}
