use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::lectures::controller::{
    create_lecture, create_lecture_time, delete_lecture, get_lecture_times, get_lectures,
};
use crate::state::AppState;

pub fn init_lectures_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lectures).post(create_lecture))
        .route("/{id}", delete(delete_lecture))
}

pub fn init_lecture_times_router() -> Router<AppState> {
    Router::new().route("/", get(get_lecture_times).post(create_lecture_time))
}
