use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::teachers::model::{CreateTeacherDto, Teacher};
use crate::utils::errors::AppError;

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db))]
    pub async fn get_teachers(db: &PgPool) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(
            "SELECT id, first_name, last_name, email FROM teachers \
             ORDER BY last_name, first_name",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(teachers)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_teacher(db: &PgPool, dto: CreateTeacherDto) -> Result<Teacher, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            "INSERT INTO teachers (first_name, last_name, email) \
             VALUES ($1, $2, $3) \
             RETURNING id, first_name, last_name, email",
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(teacher)
    }

    /// Delete a teacher. Their courses cascade away; students they supervise
    /// keep their records with the supervisor reference cleared.
    #[instrument(skip(db))]
    pub async fn delete_teacher(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        Ok(())
    }
}
