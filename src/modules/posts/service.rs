use sqlx::PgPool;
use tracing::instrument;

use crate::modules::posts::model::{CreatePostDto, Post};
use crate::utils::errors::AppError;

pub struct PostService;

impl PostService {
    #[instrument(skip(db))]
    pub async fn get_posts(db: &PgPool) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, content, image_link, created_at FROM posts \
             ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(posts)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_post(db: &PgPool, dto: CreatePostDto) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (content, image_link) \
             VALUES ($1, $2) \
             RETURNING id, content, image_link, created_at",
        )
        .bind(&dto.content)
        .bind(&dto.image_link)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(post)
    }
}
