mod common;

use axum::http::StatusCode;
use common::{
    create_test_course, create_test_semester, create_test_student, create_test_teacher,
    get_auth_token, send, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_result_derives_total(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    let teacher = create_test_teacher(&pool).await;
    let course = create_test_course(&pool, teacher, "CS101").await;
    let semester = create_test_semester(&pool, "first", 2024).await;

    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 1001, "testpass123").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/results",
        Some(&token),
        Some(json!({
            "course_id": course,
            "student_serial": 1001,
            "semester_id": semester,
            "work_degree": 20,
            "semifinal_degree": 25,
            "final_degree": 40
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_degree"], 85);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_client_supplied_total_is_ignored(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    let teacher = create_test_teacher(&pool).await;
    let course = create_test_course(&pool, teacher, "CS101").await;
    let semester = create_test_semester(&pool, "first", 2024).await;

    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 1001, "testpass123").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/results",
        Some(&token),
        Some(json!({
            "course_id": course,
            "student_serial": 1001,
            "semester_id": semester,
            "work_degree": 10,
            "semifinal_degree": 10,
            "final_degree": 10,
            "total_degree": 999
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_degree"], 30);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_result_fails(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    let teacher = create_test_teacher(&pool).await;
    let course = create_test_course(&pool, teacher, "CS101").await;
    let semester = create_test_semester(&pool, "first", 2024).await;

    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 1001, "testpass123").await;

    let payload = json!({
        "course_id": course,
        "student_serial": 1001,
        "semester_id": semester,
        "work_degree": 20,
        "semifinal_degree": 25,
        "final_degree": 40
    });

    let (status, _) = send(&app, "POST", "/api/results", Some(&token), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "POST", "/api/results", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_same_student_different_course_is_allowed(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    let teacher = create_test_teacher(&pool).await;
    let course_a = create_test_course(&pool, teacher, "CS101").await;
    let course_b = create_test_course(&pool, teacher, "CS102").await;
    let semester = create_test_semester(&pool, "first", 2024).await;

    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 1001, "testpass123").await;

    for course in [course_a, course_b] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/results",
            Some(&token),
            Some(json!({
                "course_id": course,
                "student_serial": 1001,
                "semester_id": semester,
                "work_degree": 20,
                "semifinal_degree": 25,
                "final_degree": 40
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_cannot_create_result_for_another_student(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    create_test_student(&pool, 1002, "testpass123", false).await;
    let teacher = create_test_teacher(&pool).await;
    let course = create_test_course(&pool, teacher, "CS101").await;
    let semester = create_test_semester(&pool, "first", 2024).await;

    let app = setup_test_app(pool).await;
    let token2 = get_auth_token(&app, 1002, "testpass123").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/results",
        Some(&token2),
        Some(json!({
            "course_id": course,
            "student_serial": 1001,
            "semester_id": semester,
            "work_degree": 20,
            "semifinal_degree": 25,
            "final_degree": 40
        })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("yourself"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_result_with_unknown_semester_fails(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    let teacher = create_test_teacher(&pool).await;
    let course = create_test_course(&pool, teacher, "CS101").await;

    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 1001, "testpass123").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/results",
        Some(&token),
        Some(json!({
            "course_id": course,
            "student_serial": 1001,
            "semester_id": "00000000-0000-0000-0000-000000000000",
            "work_degree": 20,
            "semifinal_degree": 25,
            "final_degree": 40
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_listing_only_returns_own_results(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    create_test_student(&pool, 1002, "testpass123", false).await;
    let teacher = create_test_teacher(&pool).await;
    let course = create_test_course(&pool, teacher, "CS101").await;
    let semester = create_test_semester(&pool, "first", 2024).await;

    let app = setup_test_app(pool).await;

    for serial in [1001, 1002] {
        let token = get_auth_token(&app, serial, "testpass123").await;
        send(
            &app,
            "POST",
            "/api/results",
            Some(&token),
            Some(json!({
                "course_id": course,
                "student_serial": serial,
                "semester_id": semester,
                "work_degree": 20,
                "semifinal_degree": 25,
                "final_degree": 40
            })),
        )
        .await;
    }

    let token1 = get_auth_token(&app, 1001, "testpass123").await;
    let (status, body) = send(&app, "GET", "/api/results", Some(&token1), None).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows.iter().all(|r| r["student_serial"] == 1001));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_rederives_total(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    let teacher = create_test_teacher(&pool).await;
    let course = create_test_course(&pool, teacher, "CS101").await;
    let semester = create_test_semester(&pool, "first", 2024).await;

    let app = setup_test_app(pool).await;
    let token = get_auth_token(&app, 1001, "testpass123").await;

    let (_, created) = send(
        &app,
        "POST",
        "/api/results",
        Some(&token),
        Some(json!({
            "course_id": course,
            "student_serial": 1001,
            "semester_id": semester,
            "work_degree": 20,
            "semifinal_degree": 25,
            "final_degree": 40
        })),
    )
    .await;

    let id = created["id"].as_str().unwrap();
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/results/{id}"),
        Some(&token),
        Some(json!({
            "work_degree": 30,
            "semifinal_degree": 30,
            "final_degree": 35,
            "total_degree": 1
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_degree"], 95);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_cannot_update_another_students_result(pool: PgPool) {
    create_test_student(&pool, 1001, "testpass123", false).await;
    create_test_student(&pool, 1002, "testpass123", false).await;
    let teacher = create_test_teacher(&pool).await;
    let course = create_test_course(&pool, teacher, "CS101").await;
    let semester = create_test_semester(&pool, "first", 2024).await;

    let app = setup_test_app(pool).await;

    let token1 = get_auth_token(&app, 1001, "testpass123").await;
    let (_, created) = send(
        &app,
        "POST",
        "/api/results",
        Some(&token1),
        Some(json!({
            "course_id": course,
            "student_serial": 1001,
            "semester_id": semester,
            "work_degree": 20,
            "semifinal_degree": 25,
            "final_degree": 40
        })),
    )
    .await;

    let id = created["id"].as_str().unwrap();
    let token2 = get_auth_token(&app, 1002, "testpass123").await;
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/results/{id}"),
        Some(&token2),
        Some(json!({
            "work_degree": 0,
            "semifinal_degree": 0,
            "final_degree": 0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
