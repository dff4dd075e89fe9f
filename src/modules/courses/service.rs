use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{Course, CourseWithStudents, CreateCourseDto};
use crate::utils::errors::AppError;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn get_courses(db: &PgPool) -> Result<Vec<CourseWithStudents>, AppError> {
        let courses = sqlx::query_as::<_, CourseWithStudents>(
            "SELECT c.id, c.name, c.code, c.teacher_id, \
             COALESCE(ARRAY_AGG(e.student_serial ORDER BY e.student_serial) \
                 FILTER (WHERE e.student_serial IS NOT NULL), '{}') AS students \
             FROM courses c \
             LEFT JOIN enrollments e ON e.course_id = c.id \
             GROUP BY c.id, c.name, c.code, c.teacher_id \
             ORDER BY c.code",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let teacher_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM teachers WHERE id = $1)",
        )
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if !teacher_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (name, code, teacher_id) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, code, teacher_id",
        )
        .bind(&dto.name)
        .bind(&dto.code)
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(course)
    }

    /// Delete a course; its lectures and enrollments cascade away.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }
}
