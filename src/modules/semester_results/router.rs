use axum::{Router, routing::get};

use crate::modules::semester_results::controller::{
    create_semester_result, get_semester_results,
};
use crate::state::AppState;

pub fn init_semester_results_router() -> Router<AppState> {
    Router::new().route("/", get(get_semester_results).post(create_semester_result))
}
