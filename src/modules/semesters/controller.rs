use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::semesters::model::{CreateSemesterDto, Semester, SemesterWithStudents};
use crate::modules::semesters::service::SemesterService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/semesters",
    responses(
        (status = 200, description = "List of semesters", body = [SemesterWithStudents]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Semesters"
)]
#[instrument(skip(state))]
pub async fn get_semesters(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<SemesterWithStudents>>, AppError> {
    let semesters = SemesterService::get_semesters(&state.db).await?;
    Ok(Json(semesters))
}

#[utoipa::path(
    post,
    path = "/api/semesters",
    request_body = CreateSemesterDto,
    responses(
        (status = 201, description = "Semester created", body = Semester),
        (status = 400, description = "Semester already exists", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Semesters"
)]
#[instrument(skip(state, dto))]
pub async fn create_semester(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSemesterDto>,
) -> Result<(StatusCode, Json<Semester>), AppError> {
    let semester = SemesterService::create_semester(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(semester)))
}
