pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::advice::handlers as advice_handlers;
use crate::analytics;
use crate::board::handlers as board_handlers;
use crate::ingest::handlers as ingest_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Board API
        .route(
            "/api/v1/jobs",
            get(board_handlers::handle_list_jobs).post(board_handlers::handle_add_job),
        )
        .route("/api/v1/jobs/:id", delete(board_handlers::handle_delete_job))
        .route(
            "/api/v1/jobs/:id/status",
            patch(board_handlers::handle_update_status),
        )
        .route(
            "/api/v1/jobs/:id/advance",
            post(board_handlers::handle_advance),
        )
        .route(
            "/api/v1/jobs/:id/revert",
            post(board_handlers::handle_revert),
        )
        // Advice API
        .route(
            "/api/v1/jobs/:id/advice",
            post(advice_handlers::handle_advice),
        )
        // Inbox ingest API
        .route("/api/v1/inbox/scan", post(ingest_handlers::handle_scan))
        .route("/api/v1/inbox/import", post(ingest_handlers::handle_import))
        // Analytics API
        .route("/api/v1/analytics/summary", get(analytics::handle_summary))
        .with_state(state)
}
