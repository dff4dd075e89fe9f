use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{AuthResponse, LoginRequest};
use crate::modules::students::model::CreateStudentDto;
use crate::modules::students::service::StudentService;
use crate::utils::errors::AppError;
use crate::utils::jwt::{create_access_token, token_digest};
use crate::utils::password::verify_password;

pub struct AuthService;

impl AuthService {
    /// Register a new student and issue their first token.
    #[instrument(skip(db, dto))]
    pub async fn register(
        db: &PgPool,
        dto: CreateStudentDto,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let student = StudentService::create_student(db, dto).await?;
        let token = Self::issue_token(db, student.serial_number, jwt_config).await?;

        Ok(AuthResponse {
            student: student.into(),
            token,
        })
    }

    #[instrument(skip(db, dto))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct CredentialRow {
            password: String,
            is_active: bool,
        }

        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT password, is_active FROM students WHERE serial_number = $1",
        )
        .bind(dto.serial_number)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| {
            AppError::unauthorized("Invalid serial number or password".to_string())
        })?;

        if !verify_password(&dto.password, &row.password)? || !row.is_active {
            return Err(AppError::unauthorized(
                "Invalid serial number or password".to_string(),
            ));
        }

        let student = StudentService::get_student(db, dto.serial_number).await?;
        let token = Self::issue_token(db, dto.serial_number, jwt_config).await?;

        Ok(AuthResponse {
            student: student.into(),
            token,
        })
    }

    /// Mint a token and record its digest so it can be revoked later.
    #[instrument(skip(db, jwt_config))]
    pub async fn issue_token(
        db: &PgPool,
        serial_number: i64,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let token = create_access_token(serial_number, jwt_config)?;
        let expires_at = Utc::now() + Duration::seconds(jwt_config.access_token_expiry);

        sqlx::query(
            "INSERT INTO auth_tokens (student_serial, token_digest, expires_at) \
             VALUES ($1, $2, $3)",
        )
        .bind(serial_number)
        .bind(token_digest(&token))
        .bind(expires_at)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(token)
    }

    /// Revoke the presented token. Revoking an already-revoked token is not
    /// an error.
    #[instrument(skip(db, token))]
    pub async fn logout(db: &PgPool, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM auth_tokens WHERE token_digest = $1")
            .bind(token_digest(token))
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }

    /// Revoke every token issued to the student.
    #[instrument(skip(db))]
    pub async fn logout_all(db: &PgPool, serial_number: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM auth_tokens WHERE student_serial = $1")
            .bind(serial_number)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }
}
