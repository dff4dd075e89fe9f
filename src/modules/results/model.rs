use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A student's result in one course for one semester.
///
/// `total_degree` is derived from the three component scores on every write
/// and is never writable by a caller.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CourseResult {
    pub id: Uuid,
    pub course_id: Uuid,
    pub student_serial: i64,
    pub semester_id: Uuid,
    pub work_degree: i32,
    pub semifinal_degree: i32,
    pub final_degree: i32,
    pub total_degree: i32,
}

/// DTO for recording a result. A `total_degree` field in the payload is
/// ignored; the stored total is always recomputed from the components.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateResultDto {
    pub course_id: Uuid,
    #[validate(range(min = 1))]
    pub student_serial: i64,
    pub semester_id: Uuid,
    pub work_degree: i32,
    pub semifinal_degree: i32,
    pub final_degree: i32,
}

/// DTO for re-scoring an existing result. The total is derived again from
/// these components, same as on create.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateResultDto {
    pub work_degree: i32,
    pub semifinal_degree: i32,
    pub final_degree: i32,
}
