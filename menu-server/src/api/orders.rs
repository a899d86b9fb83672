//! Order API Handlers

use axum::extract::{Path, Query, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use shared::order::{Order, OrderStatus};

use crate::core::{AppError, AppResult, ServerState};
use crate::orders::stats;
use crate::orders::StatusFilter;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(list))
        .route("/api/orders/{id}", get(get_by_id))
        .route("/api/orders/{id}/status", patch(set_status))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// `all` (default) or one of the status names
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetStatusRequest {
    pub status: OrderStatus,
}

/// GET /api/orders?status=... - orders newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let filter = match query.status.as_deref() {
        None => StatusFilter::All,
        Some(s) => s.parse().map_err(AppError::validation)?,
    };

    let orders = state.orders.list().await;
    let filtered = stats::filter_by_status(&orders, filter);
    Ok(Json(stats::sort_by_recency(&filtered)))
}

/// GET /api/orders/{id} - one order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.get(&id).await?))
}

/// PATCH /api/orders/{id}/status - lifecycle transition
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SetStatusRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.set_status(&id, payload.status).await?))
}
