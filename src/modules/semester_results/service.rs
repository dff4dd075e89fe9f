use sqlx::PgPool;
use tracing::instrument;

use crate::modules::results::model::CourseResult;
use crate::modules::semester_results::model::{CreateSemesterResultDto, SemesterResult};
use crate::utils::errors::AppError;

/// A semester aggregate's total is the sum of its constituent results'
/// derived totals.
pub fn derive_semester_total(results: &[CourseResult]) -> i32 {
    results.iter().map(|r| r.total_degree).sum()
}

pub struct SemesterResultService;

impl SemesterResultService {
    #[instrument(skip(db))]
    pub async fn get_semester_results_for_student(
        db: &PgPool,
        student_serial: i64,
    ) -> Result<Vec<SemesterResult>, AppError> {
        let results = sqlx::query_as::<_, SemesterResult>(
            "SELECT sr.id, sr.student_serial, sr.semester_id, sr.total_degree, \
             COALESCE(ARRAY_AGG(srr.result_id) \
                 FILTER (WHERE srr.result_id IS NOT NULL), '{}') AS results \
             FROM semester_results sr \
             LEFT JOIN semester_result_results srr ON srr.semester_result_id = sr.id \
             WHERE sr.student_serial = $1 \
             GROUP BY sr.id, sr.student_serial, sr.semester_id, sr.total_degree",
        )
        .bind(student_serial)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(results)
    }

    /// Build a semester aggregate. The (student, semester) pair is checked
    /// with one joint query and backed by the unique constraint; every
    /// referenced result must belong to that student and semester.
    #[instrument(skip(db, dto))]
    pub async fn create_semester_result(
        db: &PgPool,
        dto: CreateSemesterResultDto,
    ) -> Result<SemesterResult, AppError> {
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
            "SELECT EXISTS(SELECT 1 FROM semester_results \
             WHERE student_serial = $1 AND semester_id = $2)",
        )
        .bind(dto.student_serial)
        .bind(dto.semester_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if exists {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A semester result already exists for this student and semester"
            )));
        }

        let constituents = sqlx::query_as::<_, CourseResult>(
            "SELECT id, course_id, student_serial, semester_id, \
             work_degree, semifinal_degree, final_degree, total_degree \
             FROM results WHERE id = ANY($1)",
        )
        .bind(&dto.results)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        if constituents.len() != dto.results.len() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "One or more referenced results do not exist"
            )));
        }

        if constituents
            .iter()
            .any(|r| r.student_serial != dto.student_serial || r.semester_id != dto.semester_id)
        {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "All referenced results must belong to the same student and semester"
            )));
        }

        let total_degree = derive_semester_total(&constituents);

        let mut tx = db.begin().await.map_err(AppError::database)?;

        let row = sqlx::query_as::<_, (uuid::Uuid,)>(
            "INSERT INTO semester_results (student_serial, semester_id, total_degree) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(dto.student_serial)
        .bind(dto.semester_id)
        .bind(total_degree)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A semester result already exists for this student and semester"
                ));
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        sqlx::query(
            "INSERT INTO semester_result_results (semester_result_id, result_id) \
             SELECT $1, UNNEST($2::uuid[])",
        )
        .bind(row.0)
        .bind(&dto.results)
        .execute(&mut *tx)
        .await
        .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        Ok(SemesterResult {
            id: row.0,
            student_serial: dto.student_serial,
            semester_id: dto.semester_id,
            results: dto.results,
            total_degree,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn result_with_total(total_degree: i32) -> CourseResult {
        CourseResult {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            student_serial: 1001,
            semester_id: Uuid::new_v4(),
            work_degree: 0,
            semifinal_degree: 0,
            final_degree: total_degree,
            total_degree,
        }
    }

    #[test]
    fn test_derive_semester_total() {
        let results = [result_with_total(85), result_with_total(70)];
        assert_eq!(derive_semester_total(&results), 155);
    }

    #[test]
    fn test_derive_semester_total_empty() {
        assert_eq!(derive_semester_total(&[]), 0);
    }
}
