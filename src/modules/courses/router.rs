use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::modules::courses::controller::{create_course, delete_course, get_courses};
use crate::state::AppState;

/// Catalog routes available to any authenticated student.
pub fn init_courses_router() -> Router<AppState> {
    Router::new().route("/", get(get_courses))
}

/// Staff-only catalog administration.
pub fn init_courses_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course))
        .route("/{id}", delete(delete_course))
}
