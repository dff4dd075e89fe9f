use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::teachers::controller::{create_teacher, delete_teacher, get_teachers};
use crate::state::AppState;

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_teachers).post(create_teacher))
        .route("/{id}", delete(delete_teacher))
}
