use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::enrollments::model::{
    CreateEnrollmentDto, DeleteEnrollmentParams, Enrollment,
};
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// The caller's own enrollments. The filter is applied server-side from the
/// token identity; no parameter can widen it to another student's rows.
#[utoipa::path(
    get,
    path = "/api/enrollments",
    responses(
        (status = 200, description = "Own enrollments", body = [Enrollment]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn get_enrollments(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Enrollment>>, AppError> {
    let enrollments =
        EnrollmentService::get_enrollments_for_student(&state.db, auth_user.serial_number)
            .await?;
    Ok(Json(enrollments))
}

#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Enrollment created", body = Enrollment),
        (status = 400, description = "Already enrolled", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Cannot enroll another student", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state, dto))]
pub async fn create_enrollment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateEnrollmentDto>,
) -> Result<(StatusCode, Json<Enrollment>), AppError> {
    if dto.student_serial != auth_user.serial_number {
        return Err(AppError::forbidden(
            "You can only create an enrollment for yourself".to_string(),
        ));
    }

    let enrollment = EnrollmentService::create_enrollment(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

#[utoipa::path(
    delete,
    path = "/api/enrollments",
    params(DeleteEnrollmentParams),
    responses(
        (status = 204, description = "Enrollment deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Cannot delete another student's enrollment", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<DeleteEnrollmentParams>,
) -> Result<StatusCode, AppError> {
    if params.student_serial != auth_user.serial_number {
        return Err(AppError::forbidden(
            "You can only delete an enrollment for yourself".to_string(),
        ));
    }

    EnrollmentService::delete_enrollment(&state.db, params.student_serial, params.course_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
