use sqlx::PgPool;
use tracing::instrument;

use crate::modules::results::model::{CourseResult, CreateResultDto};
use crate::utils::errors::AppError;

/// The one derivation rule of the results module: a result's total is the
/// arithmetic sum of its three component scores.
pub fn derive_total_degree(work: i32, semifinal: i32, final_degree: i32) -> i32 {
    work + semifinal + final_degree
}

pub struct ResultService;

impl ResultService {
    #[instrument(skip(db))]
    pub async fn get_results_for_student(
        db: &PgPool,
        student_serial: i64,
    ) -> Result<Vec<CourseResult>, AppError> {
        let results = sqlx::query_as::<_, CourseResult>(
            "SELECT id, course_id, student_serial, semester_id, \
             work_degree, semifinal_degree, final_degree, total_degree \
             FROM results WHERE student_serial = $1",
        )
        .bind(student_serial)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(results)
    }

    /// Record a result. Duplicates are detected with one query over the
    /// full (student, course, semester) key; the unique constraint on the
    /// triple backs the check under concurrency.
    #[instrument(skip(db, dto))]
    pub async fn create_result(
        db: &PgPool,
        dto: CreateResultDto,
    ) -> Result<CourseResult, AppError> {
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

        let semester_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM semesters WHERE id = $1)",
        )
        .bind(dto.semester_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if !semester_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Semester not found")));
        }

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM results \
             WHERE student_serial = $1 AND course_id = $2 AND semester_id = $3)",
        )
        .bind(dto.student_serial)
        .bind(dto.course_id)
        .bind(dto.semester_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if exists {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A result already exists for this student, course and semester"
            )));
        }

        let total_degree =
            derive_total_degree(dto.work_degree, dto.semifinal_degree, dto.final_degree);

        let result = sqlx::query_as::<_, CourseResult>(
            "INSERT INTO results \
             (course_id, student_serial, semester_id, work_degree, semifinal_degree, \
             final_degree, total_degree) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, course_id, student_serial, semester_id, \
             work_degree, semifinal_degree, final_degree, total_degree",
        )
        .bind(dto.course_id)
        .bind(dto.student_serial)
        .bind(dto.semester_id)
        .bind(dto.work_degree)
        .bind(dto.semifinal_degree)
        .bind(dto.final_degree)
        .bind(total_degree)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A result already exists for this student, course and semester"
                ));
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(result)
    }

    #[instrument(skip(db))]
    pub async fn get_result(db: &PgPool, id: uuid::Uuid) -> Result<CourseResult, AppError> {
        let result = sqlx::query_as::<_, CourseResult>(
            "SELECT id, course_id, student_serial, semester_id, \
             work_degree, semifinal_degree, final_degree, total_degree \
             FROM results WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Result not found")))?;

        Ok(result)
    }

    /// Re-score an existing result. The total is recomputed from the new
    /// components exactly as on create.
    #[instrument(skip(db))]
    pub async fn update_result_scores(
        db: &PgPool,
        id: uuid::Uuid,
        work_degree: i32,
        semifinal_degree: i32,
        final_degree: i32,
    ) -> Result<CourseResult, AppError> {
        let total_degree = derive_total_degree(work_degree, semifinal_degree, final_degree);

        let result = sqlx::query_as::<_, CourseResult>(
            "UPDATE results SET work_degree = $2, semifinal_degree = $3, \
             final_degree = $4, total_degree = $5 \
             WHERE id = $1 \
             RETURNING id, course_id, student_serial, semester_id, \
             work_degree, semifinal_degree, final_degree, total_degree",
        )
        .bind(id)
        .bind(work_degree)
        .bind(semifinal_degree)
        .bind(final_degree)
        .bind(total_degree)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Result not found")))?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_total_degree() {
        assert_eq!(derive_total_degree(20, 25, 40), 85);
        assert_eq!(derive_total_degree(0, 0, 0), 0);
    }

    #[test]
    fn test_derive_total_degree_negative_inputs() {
        assert_eq!(derive_total_degree(-5, 10, 3), 8);
        assert_eq!(derive_total_degree(-1, -2, -3), -6);
    }
}
