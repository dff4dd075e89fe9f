use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::results::model::{CourseResult, CreateResultDto, UpdateResultDto};
use crate::modules::results::service::ResultService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// The caller's own results, filtered server-side from the token identity.
#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "Own results", body = [CourseResult]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
#[instrument(skip(state))]
pub async fn get_results(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<CourseResult>>, AppError> {
    let results =
        ResultService::get_results_for_student(&state.db, auth_user.serial_number).await?;
    Ok(Json(results))
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultDto,
    responses(
        (status = 201, description = "Result created with derived total", body = CourseResult),
        (status = 400, description = "Result already exists", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Cannot create a result for another student", body = ErrorResponse),
        (status = 404, description = "Course or semester not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
#[instrument(skip(state, dto))]
pub async fn create_result(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateResultDto>,
) -> Result<(StatusCode, Json<CourseResult>), AppError> {
    if dto.student_serial != auth_user.serial_number {
        return Err(AppError::forbidden(
            "Results can only be created for yourself".to_string(),
        ));
    }

    let result = ResultService::create_result(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// Re-score one of the caller's own results; the total is derived again.
#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(("id" = Uuid, Path, description = "Result ID")),
    request_body = UpdateResultDto,
    responses(
        (status = 200, description = "Result updated with derived total", body = CourseResult),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Cannot update another student's result", body = ErrorResponse),
        (status = 404, description = "Result not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Results"
)]
#[instrument(skip(state, dto))]
pub async fn update_result(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateResultDto>,
) -> Result<Json<CourseResult>, AppError> {
    let existing = ResultService::get_result(&state.db, id).await?;
    if existing.student_serial != auth_user.serial_number {
        return Err(AppError::forbidden(
            "Results can only be updated for yourself".to_string(),
        ));
    }

    let result = ResultService::update_result_scores(
        &state.db,
        id,
        dto.work_degree,
        dto.semifinal_degree,
        dto.final_degree,
    )
    .await?;
    Ok(Json(result))
}
