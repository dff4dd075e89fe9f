use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use registrar::config::cors::CorsConfig;
use registrar::config::jwt::JwtConfig;
use registrar::config::rate_limit::RateLimitConfig;
use registrar::router::init_router;
use registrar::state::AppState;
use registrar::utils::password::hash_password;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub async fn setup_test_app(pool: PgPool) -> Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool.clone(),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
    };
    init_router(state)
}

/// Send a request to the in-process app and return the status plus the
/// parsed JSON body (Null for empty bodies).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

pub async fn get_auth_token(app: &Router, serial_number: i64, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({
            "serial_number": serial_number,
            "password": password
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// A complete registration payload for the given serial number.
#[allow(dead_code)]
pub fn student_payload(serial_number: i64) -> Value {
    json!({
        "serial_number": serial_number,
        "password": "studentpass123",
        "first_name": "Test",
        "last_name": "Student",
        "email": format!("student-{serial_number}@test.com"),
        "gender": "male",
        "date_of_birth": "2002-05-14",
        "place_of_birth": "Tripoli",
        "country": "Libya",
        "living_place": "Downtown",
        "living_city": "Tripoli",
        "arabic_first_name": "طالب",
        "arabic_second_name": "بن",
        "arabic_third_name": "اختبار",
        "arabic_last_name": "الجامعة",
        "marital_status": "single",
        "residence": "inside",
        "section": "A",
        "division": "Computing",
        "closest_family": "Parent",
        "mother_name": "Mother",
        "mothers_job": "Engineer",
        "other_to_call": "Sibling",
        "phone_number_email": "alt@test.com"
    })
}

#[allow(dead_code)]
pub struct TestStudent {
    pub serial_number: i64,
    pub password: String,
}

/// Insert a student row directly, bypassing the API.
pub async fn create_test_student(
    pool: &PgPool,
    serial_number: i64,
    password: &str,
    is_staff: bool,
) -> TestStudent {
    let hashed = hash_password(password).unwrap();

    sqlx::query(
        "INSERT INTO students (serial_number, password, is_staff, first_name, last_name, \
         email, gender, place_of_birth, country, living_place, living_city, \
         arabic_first_name, arabic_second_name, arabic_third_name, arabic_last_name, \
         marital_status, residence, section, division, closest_family, mother_name, \
         mothers_job, other_to_call, phone_number_email) \
         VALUES ($1, $2, $3, 'Test', 'Student', $4, 'male'::gender, 'Tripoli', 'Libya', \
         'Downtown', 'Tripoli', 'طالب', 'بن', 'اختبار', 'الجامعة', \
         'single'::marital_status, 'inside'::residence, 'A', 'Computing', 'Parent', \
         'Mother', 'Engineer', 'Sibling', 'alt@test.com')",
    )
    .bind(serial_number)
    .bind(&hashed)
    .bind(is_staff)
    .bind(format!("student-{serial_number}@test.com"))
    .execute(pool)
    .await
    .unwrap();

    TestStudent {
        serial_number,
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn deactivate_student(pool: &PgPool, serial_number: i64) {
    sqlx::query("UPDATE students SET is_active = FALSE WHERE serial_number = $1")
        .bind(serial_number)
        .execute(pool)
        .await
        .unwrap();
}

#[allow(dead_code)]
pub async fn create_test_teacher(pool: &PgPool) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO teachers (first_name, last_name, email) \
         VALUES ('Test', 'Teacher', 'teacher@test.com') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, teacher_id: Uuid, code: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (name, code, teacher_id) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(format!("Course {code}"))
    .bind(code)
    .bind(teacher_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_semester(pool: &PgPool, season: &str, year: i32) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO semesters (season, year) \
         VALUES ($1::season, $2) RETURNING id",
    )
    .bind(season)
    .bind(year)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_lecture_time(pool: &PgPool) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO lecture_times (start_time, day_of_week) \
         VALUES ('09:00'::lecture_slot, 'monday'::day_of_week) RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
