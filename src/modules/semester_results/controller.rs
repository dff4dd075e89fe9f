use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::semester_results::model::{CreateSemesterResultDto, SemesterResult};
use crate::modules::semester_results::service::SemesterResultService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// The caller's own semester aggregates.
#[utoipa::path(
    get,
    path = "/api/semester-results",
    responses(
        (status = 200, description = "Own semester results", body = [SemesterResult]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn get_semester_results(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<SemesterResult>>, AppError> {
    let results = SemesterResultService::get_semester_results_for_student(
        &state.db,
        auth_user.serial_number,
    )
    .await?;
    Ok(Json(results))
}

#[utoipa::path(
    post,
    path = "/api/semester-results",
    request_body = CreateSemesterResultDto,
    responses(
        (status = 201, description = "Semester result created with derived total", body = SemesterResult),
        (status = 400, description = "Semester result already exists", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Cannot create a semester result for another student", body = ErrorResponse),
        (status = 404, description = "Semester or result not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
#[instrument(skip(state, dto))]
pub async fn create_semester_result(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSemesterResultDto>,
) -> Result<(StatusCode, Json<SemesterResult>), AppError> {
    if dto.student_serial != auth_user.serial_number {
        return Err(AppError::forbidden(
            "Semester results can only be created for yourself".to_string(),
        ));
    }

    let result = SemesterResultService::create_semester_result(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(result)))
}
