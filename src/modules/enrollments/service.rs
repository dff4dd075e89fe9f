use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::enrollments::model::{CreateEnrollmentDto, Enrollment};
use crate::utils::errors::AppError;

pub struct EnrollmentService;

impl EnrollmentService {
    #[instrument(skip(db))]
    pub async fn get_enrollments_for_student(
        db: &PgPool,
        student_serial: i64,
    ) -> Result<Vec<Enrollment>, AppError> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            "SELECT id, student_serial, course_id, date_enrolled \
             FROM enrollments WHERE student_serial = $1 ORDER BY date_enrolled",
        )
        .bind(student_serial)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(enrollments)
    }

    /// Enroll a student in a course. The (student, course) pair is checked
    /// with a single joint query; the unique index on the pair closes the
    /// race two concurrent enrollments would otherwise win together.
    #[instrument(skip(db, dto))]
    pub async fn create_enrollment(
        db: &PgPool,
        dto: CreateEnrollmentDto,
    ) -> Result<Enrollment, AppError> {
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

        let already_enrolled = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM enrollments \
             WHERE student_serial = $1 AND course_id = $2)",
        )
        .bind(dto.student_serial)
        .bind(dto.course_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if already_enrolled {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "The student is already enrolled in the course"
            )));
        }

        let enrollment = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (student_serial, course_id) \
             VALUES ($1, $2) \
             RETURNING id, student_serial, course_id, date_enrolled",
        )
        .bind(dto.student_serial)
        .bind(dto.course_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "The student is already enrolled in the course"
                ));
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(enrollment)
    }

    #[instrument(skip(db))]
    pub async fn delete_enrollment(
        db: &PgPool,
        student_serial: i64,
        course_id: Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "DELETE FROM enrollments WHERE student_serial = $1 AND course_id = $2",
        )
        .bind(student_serial)
        .bind(course_id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Enrollment not found"
            )));
        }

        Ok(())
    }
}
