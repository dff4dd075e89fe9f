use axum::{Router, routing::get};

use crate::modules::posts::controller::{create_post, get_posts};
use crate::state::AppState;

pub fn init_posts_router() -> Router<AppState> {
    Router::new().route("/", get(get_posts).post(create_post))
}
