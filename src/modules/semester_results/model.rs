use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A student's aggregate for one semester: the constituent course results
/// and a total derived from their totals.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SemesterResult {
    pub id: Uuid,
    pub student_serial: i64,
    pub semester_id: Uuid,
    pub results: Vec<Uuid>,
    pub total_degree: i32,
}

/// DTO for building a semester aggregate out of existing results. The total
/// is derived server-side; a client-supplied value is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSemesterResultDto {
    #[validate(range(min = 1))]
    pub student_serial: i64,
    pub semester_id: Uuid,
    #[validate(length(min = 1))]
    pub results: Vec<Uuid>,
}
