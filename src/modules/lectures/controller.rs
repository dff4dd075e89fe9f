use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::lectures::model::{
    CreateLectureDto, CreateLectureTimeDto, Lecture, LectureListParams, LectureTime,
};
use crate::modules::lectures::service::LectureService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/lectures",
    params(LectureListParams),
    responses(
        (status = 200, description = "Lectures of the course", body = [Lecture]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state))]
pub async fn get_lectures(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<LectureListParams>,
) -> Result<Json<Vec<Lecture>>, AppError> {
    let lectures = LectureService::get_lectures_by_course(&state.db, params.course).await?;
    Ok(Json(lectures))
}

#[utoipa::path(
    post,
    path = "/api/lectures",
    request_body = CreateLectureDto,
    responses(
        (status = 201, description = "Lecture created", body = Lecture),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Course or lecture time not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state, dto))]
pub async fn create_lecture(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateLectureDto>,
) -> Result<(StatusCode, Json<Lecture>), AppError> {
    let lecture = LectureService::create_lecture(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(lecture)))
}

#[utoipa::path(
    delete,
    path = "/api/lectures/{id}",
    params(("id" = Uuid, Path, description = "Lecture ID")),
    responses(
        (status = 204, description = "Lecture deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Lecture not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state))]
pub async fn delete_lecture(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    LectureService::delete_lecture(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/lecture-times",
    responses(
        (status = 200, description = "List of lecture time slots", body = [LectureTime]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state))]
pub async fn get_lecture_times(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<LectureTime>>, AppError> {
    let times = LectureService::get_lecture_times(&state.db).await?;
    Ok(Json(times))
}

#[utoipa::path(
    post,
    path = "/api/lecture-times",
    request_body = CreateLectureTimeDto,
    responses(
        (status = 201, description = "Lecture time created", body = LectureTime),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Lectures"
)]
#[instrument(skip(state, dto))]
pub async fn create_lecture_time(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateLectureTimeDto>,
) -> Result<(StatusCode, Json<LectureTime>), AppError> {
    let time = LectureService::create_lecture_time(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(time)))
}
