//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Discord interactions webhook
        .route("/interactions", post(handlers::interactions::handle_interaction))
        // Command API (v1)
        .route("/v1/commands", post(handlers::commands::execute_command))
        // Attach state
        .with_state(state)
}
