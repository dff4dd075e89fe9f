use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::staff::require_staff;
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::{init_courses_admin_router, init_courses_router};
use crate::modules::enrollments::router::init_enrollments_router;
use crate::modules::lectures::router::{init_lecture_times_router, init_lectures_router};
use crate::modules::posts::router::init_posts_router;
use crate::modules::results::router::init_results_router;
use crate::modules::semester_results::router::init_semester_results_router;
use crate::modules::semesters::router::init_semesters_router;
use crate::modules::students::router::{init_students_admin_router, init_students_router};
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest(
                    "/students",
                    init_students_router().merge(
                        init_students_admin_router().route_layer(
                            middleware::from_fn_with_state(state.clone(), require_staff),
                        ),
                    ),
                )
                .nest(
                    "/teachers",
                    init_teachers_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_staff)),
                )
                .nest(
                    "/courses",
                    init_courses_router().merge(
                        init_courses_admin_router().route_layer(
                            middleware::from_fn_with_state(state.clone(), require_staff),
                        ),
                    ),
                )
                .nest("/lectures", init_lectures_router())
                .nest("/lecture-times", init_lecture_times_router())
                .nest("/enrollments", init_enrollments_router())
                .nest("/semesters", init_semesters_router())
                .nest("/results", init_results_router())
                .nest("/semester-results", init_semester_results_router())
                .nest("/posts", init_posts_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
