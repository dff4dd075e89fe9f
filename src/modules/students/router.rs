use axum::{Router, routing::get};

use crate::modules::students::controller::{
    create_student, get_me, get_students, get_students_main, get_students_secondary, update_me,
};
use crate::state::AppState;

/// Routes available to any authenticated student.
pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/main", get(get_students_main))
        .route("/secondary", get(get_students_secondary))
        .route("/me", get(get_me).put(update_me))
}

/// Staff-only routes; the caller's staff flag is checked by the
/// `require_staff` layer applied at the nest site.
pub fn init_students_admin_router() -> Router<AppState> {
    Router::new().route("/", get(get_students).post(create_student))
}
