use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::lectures::model::{
    CreateLectureDto, CreateLectureTimeDto, Lecture, LectureTime,
};
use crate::utils::errors::AppError;

pub struct LectureService;

impl LectureService {
    #[instrument(skip(db))]
    pub async fn get_lectures_by_course(
        db: &PgPool,
        course_id: Uuid,
    ) -> Result<Vec<Lecture>, AppError> {
        let course_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)",
        )
        .bind(course_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if !course_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        let lectures = sqlx::query_as::<_, Lecture>(
            "SELECT id, title, course_id, units, lecture_time_id \
             FROM lectures WHERE course_id = $1 ORDER BY title",
        )
        .bind(course_id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(lectures)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_lecture(db: &PgPool, dto: CreateLectureDto) -> Result<Lecture, AppError> {
        let course_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)",
        )
        .bind(dto.course_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if !course_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        let time_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM lecture_times WHERE id = $1)",
        )
        .bind(dto.lecture_time_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if !time_exists {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Lecture time not found"
            )));
        }

        let lecture = sqlx::query_as::<_, Lecture>(
            "INSERT INTO lectures (title, course_id, units, lecture_time_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, title, course_id, units, lecture_time_id",
        )
        .bind(&dto.title)
        .bind(dto.course_id)
        .bind(dto.units)
        .bind(dto.lecture_time_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(lecture)
    }

    #[instrument(skip(db))]
    pub async fn delete_lecture(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lectures WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Lecture not found")));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_lecture_times(db: &PgPool) -> Result<Vec<LectureTime>, AppError> {
        let times = sqlx::query_as::<_, LectureTime>(
            "SELECT id, start_time, day_of_week FROM lecture_times \
             ORDER BY day_of_week, start_time",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(times)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_lecture_time(
        db: &PgPool,
        dto: CreateLectureTimeDto,
    ) -> Result<LectureTime, AppError> {
        let time = sqlx::query_as::<_, LectureTime>(
            "INSERT INTO lecture_times (start_time, day_of_week) \
             VALUES ($1, $2) \
             RETURNING id, start_time, day_of_week",
        )
        .bind(dto.start_time)
        .bind(dto.day_of_week)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(time)
    }
}
