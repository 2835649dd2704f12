use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/resolve", get(handlers::resolve_record))
        .route("/resolve/all", get(handlers::resolve_all))
        .with_state(state)
}
