use axum::{Router, routing::get};

use crate::modules::enrollments::controller::{
    create_enrollment, delete_enrollment, get_enrollments,
};
use crate::state::AppState;

pub fn init_enrollments_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_enrollments)
            .post(create_enrollment)
            .delete(delete_enrollment),
    )
}
