use axum::{Router, routing::get};

use crate::modules::semesters::controller::{create_semester, get_semesters};
use crate::state::AppState;

pub fn init_semesters_router() -> Router<AppState> {
    Router::new().route("/", get(get_semesters).post(create_semester))
}
