use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "season", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Season {
    First,
    Second,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Semester {
    pub id: Uuid,
    pub season: Season,
    pub year: i32,
}

/// A semester with the serial numbers of its enrolled students.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SemesterWithStudents {
    pub id: Uuid,
    pub season: Season,
    pub year: i32,
    pub students: Vec<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSemesterDto {
    pub season: Season,
    #[validate(range(min = 1990, max = 2100))]
    pub year: i32,
}
