use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::students::model::{
    CreateStudentDto, StudentMainView, StudentSecondaryView, StudentSelfView, UpdateProfileDto,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Full student listing for the staff console.
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "List of students", body = [StudentSelfView]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - staff only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<StudentSelfView>>, AppError> {
    let students = StudentService::get_students(&state.db).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Create a student record without issuing a token (staff console path;
/// self-service registration lives under /api/auth/register).
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = StudentSelfView),
        (status = 400, description = "Serial number already exists", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - staff only", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<StudentSelfView>), AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Identity slice of every student, visible to any authenticated caller.
#[utoipa::path(
    get,
    path = "/api/students/main",
    responses(
        (status = 200, description = "Main details of all students", body = [StudentMainView]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_main(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<StudentMainView>>, AppError> {
    let students = StudentService::get_students(&state.db).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Administrative slice of every student, visible to any authenticated
/// caller. Shares no fields with the main listing.
#[utoipa::path(
    get,
    path = "/api/students/secondary",
    responses(
        (status = 200, description = "Secondary details of all students", body = [StudentSecondaryView]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_secondary(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<StudentSecondaryView>>, AppError> {
    let students = StudentService::get_students(&state.db).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// The authenticated student's own profile.
#[utoipa::path(
    get,
    path = "/api/students/me",
    responses(
        (status = 200, description = "Own profile", body = StudentSelfView),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<StudentSelfView>, AppError> {
    let student = StudentService::get_student(&state.db, auth_user.serial_number).await?;
    Ok(Json(student.into()))
}

/// Update the authenticated student's own profile. There is no path to
/// update another student's record through this operation.
#[utoipa::path(
    put,
    path = "/api/students/me",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = StudentSelfView),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<StudentSelfView>, AppError> {
    let student =
        StudentService::update_profile(&state.db, auth_user.serial_number, dto).await?;
    Ok(Json(student.into()))
}
