use sqlx::PgPool;
use tracing::instrument;

use crate::modules::semesters::model::{CreateSemesterDto, Semester, SemesterWithStudents};
use crate::utils::errors::AppError;

pub struct SemesterService;

impl SemesterService {
    #[instrument(skip(db))]
    pub async fn get_semesters(db: &PgPool) -> Result<Vec<SemesterWithStudents>, AppError> {
        let semesters = sqlx::query_as::<_, SemesterWithStudents>(
            "SELECT s.id, s.season, s.year, \
             COALESCE(ARRAY_AGG(ss.student_serial ORDER BY ss.student_serial) \
                 FILTER (WHERE ss.student_serial IS NOT NULL), '{}') AS students \
             FROM semesters s \
             LEFT JOIN semester_students ss ON ss.semester_id = s.id \
             GROUP BY s.id, s.season, s.year \
             ORDER BY s.year, s.season",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(semesters)
    }

    /// Create a semester. Duplicates are detected with one query over the
    /// full (season, year) key, not with per-field checks, and the unique
    /// constraint on the pair backs the check under concurrency.
    #[instrument(skip(db, dto))]
    pub async fn create_semester(
        db: &PgPool,
        dto: CreateSemesterDto,
    ) -> Result<Semester, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM semesters WHERE season = $1 AND year = $2)",
        )
        .bind(dto.season)
        .bind(dto.year)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if exists {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "A semester already exists for this season and year"
            )));
        }

        let semester = sqlx::query_as::<_, Semester>(
            "INSERT INTO semesters (season, year) \
             VALUES ($1, $2) \
             RETURNING id, season, year",
        )
        .bind(dto.season)
        .bind(dto.year)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A semester already exists for this season and year"
                ));
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(semester)
    }
}
