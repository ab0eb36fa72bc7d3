pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::parser::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_handler))
        .route("/readyz", get(health::ready_handler))
        .route("/parse", post(handlers::handle_parse))
        .with_state(state)
}
