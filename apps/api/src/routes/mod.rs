pub mod health;
pub mod optimize;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome_handler))
        .route("/health", get(health::health_handler))
        .route("/optimize", post(optimize::handle_optimize))
        .route("/api/v1/optimize", post(optimize::handle_optimize))
        .with_state(state)
}
