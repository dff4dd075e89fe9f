use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Fact record linking one student to one course, timestamped at creation.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_serial: i64,
    pub course_id: Uuid,
    pub date_enrolled: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEnrollmentDto {
    #[validate(range(min = 1))]
    pub student_serial: i64,
    pub course_id: Uuid,
}

/// Identifies the enrollment to delete by its natural key.
#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteEnrollmentParams {
    pub student_serial: i64,
    pub course_id: Uuid,
}
