//! Lecture scheduling models.
//!
//! A [`LectureTime`] is shared reference data (a slot on the weekly grid);
//! many lectures may point at the same slot.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// The fixed set of times a lecture may start at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "lecture_slot")]
pub enum LectureSlot {
    #[sqlx(rename = "09:00")]
    #[serde(rename = "09:00")]
    NineAm,
    #[sqlx(rename = "10:00")]
    #[serde(rename = "10:00")]
    TenAm,
    #[sqlx(rename = "12:00")]
    #[serde(rename = "12:00")]
    Noon,
    #[sqlx(rename = "14:00")]
    #[serde(rename = "14:00")]
    TwoPm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "day_of_week", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct LectureTime {
    pub id: Uuid,
    pub start_time: LectureSlot,
    pub day_of_week: DayOfWeek,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLectureTimeDto {
    pub start_time: LectureSlot,
    pub day_of_week: DayOfWeek,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Lecture {
    pub id: Uuid,
    pub title: String,
    pub course_id: Uuid,
    pub units: i32,
    pub lecture_time_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLectureDto {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    pub course_id: Uuid,
    #[validate(range(min = 1, max = 12))]
    pub units: i32,
    pub lecture_time_id: Uuid,
}

/// Query parameters for the lecture listing; the course filter is required.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LectureListParams {
    pub course: Uuid,
}
