mod common;

use axum::http::StatusCode;
use common::{create_test_student, get_auth_token, send, setup_test_app};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_posts_require_authentication(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let (status, _) = send(&app, "GET", "/api/posts", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_any_student_can_post_and_list(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 1001, "testpass123").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/posts",
        Some(&token),
        Some(json!({
            "content": "Exams start next week",
            "image_link": "https://example.com/schedule.png"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["content"], "Exams start next week");

    let (status, _) = send(
        &app,
        "POST",
        "/api/posts",
        Some(&token),
        Some(json!({"content": "Library closed on Friday"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/api/posts", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    // newest first
    assert_eq!(posts[0]["content"], "Library closed on Friday");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_content_is_rejected(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 1001, "testpass123").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/posts",
        Some(&token),
        Some(json!({"content": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_image_link_is_rejected(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 1001, "testpass123").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/posts",
        Some(&token),
        Some(json!({"content": "Hello", "image_link": "not a url"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
