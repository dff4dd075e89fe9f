mod common;

use axum::http::StatusCode;
use common::{
    count_rows, create_test_course, create_test_student, create_test_teacher, get_auth_token,
    send, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_teacher_administration_is_staff_only(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    create_test_student(&pool, 5000, "staffpass123", true).await;

    let app = setup_test_app(pool).await;

    let student_token = get_auth_token(&app, 1001, "testpass123").await;
    let (status, _) = send(&app, "GET", "/api/teachers", Some(&student_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let staff_token = get_auth_token(&app, 5000, "staffpass123").await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/teachers",
        Some(&staff_token),
        Some(json!({
            "first_name": "Amal",
            "last_name": "Saleh",
            "email": "amal@test.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "amal@test.com");

    let (status, body) = send(&app, "GET", "/api/teachers", Some(&staff_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_teacher_cascades_courses_and_nulls_supervisor(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    create_test_student(&pool, 5000, "staffpass123", true).await;
    let teacher = create_test_teacher(&pool).await;
    create_test_course(&pool, teacher, "CS101").await;

    sqlx::query("UPDATE students SET supervisor_id = $1 WHERE serial_number = 1001")
        .bind(teacher)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool.clone()).await;
    let staff_token = get_auth_token(&app, 5000, "staffpass123").await;

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/teachers/{teacher}"),
        Some(&staff_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // courses cascade away, the supervised student survives with the
    // reference cleared
    assert_eq!(count_rows(&pool, "courses").await, 0);
    let student_token = get_auth_token(&app, 1001, "testpass123").await;
    let (_, me) = send(&app, "GET", "/api/students/me", Some(&student_token), None).await;
    assert!(me["supervisor_id"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_missing_teacher_is_not_found(pool: PgPool) {
    create_test_student(&pool, 5000, "staffpass123", true).await;
    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 5000, "staffpass123").await;

    let (status, _) = send(
        &app,
        "DELETE",
        "/api/teachers/00000000-0000-0000-0000-000000000000",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_teacher_email_is_rejected(pool: PgPool) {
    create_test_student(&pool, 5000, "staffpass123", true).await;
    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 5000, "staffpass123").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/teachers",
        Some(&token),
        Some(json!({
            "first_name": "Amal",
            "last_name": "Saleh",
            "email": "not-an-email"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
