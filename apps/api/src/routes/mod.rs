pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::handle_health))
        .route(
            "/parse_resume",
            post(handlers::handle_parse_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
