//! API routes
//!
//! # Structure
//!
//! - [`menu`] - catalog management (admin)
//! - [`tables`] - per-table menu payload and order submission (public)
//! - [`orders`] - order tracking and lifecycle (admin)
//! - [`stats`] - dashboard aggregates (admin)
//! - [`settings`] - display settings (admin)

pub mod menu;
pub mod orders;
pub mod settings;
pub mod stats;
pub mod tables;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use shared::response::ApiResponse;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(menu::router())
        .merge(tables::router())
        .merge(orders::router())
        .merge(stats::router())
        .merge(settings::router())
        .route("/health", get(health))
}

/// Build a fully configured application with middleware
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - the dashboard and table views are separate origins
        .layer(CorsLayer::permissive())
        // Request tracing
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness probe
async fn health() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::ok(serde_json::json!({ "status": "ok" })))
}
