//! Statistics API Handlers

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared::order::OrderStatus;

use crate::core::{AppError, AppResult, ServerState};
use crate::orders::stats;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/stats/overview", get(overview))
}

#[derive(Debug, Deserialize)]
pub struct OverviewQuery {
    /// Calendar day (`YYYY-MM-DD`, UTC); defaults to today
    pub day: Option<String>,
}

/// Dashboard overview for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewStats {
    pub day: NaiveDate,
    /// Revenue for the day (sum of order totals)
    pub revenue: f64,
    /// All-time counts per status
    pub orders: usize,
    pub pending: usize,
    pub preparing: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

/// GET /api/stats/overview?day=YYYY-MM-DD
pub async fn overview(
    State(state): State<ServerState>,
    Query(query): Query<OverviewQuery>,
) -> AppResult<Json<OverviewStats>> {
    let day = match query.day {
        Some(raw) => raw
            .parse::<NaiveDate>()
            .map_err(|e| AppError::validation(format!("invalid day '{}': {}", raw, e)))?,
        None => chrono::Utc::now().date_naive(),
    };

    let orders = state.orders.list().await;
    Ok(Json(OverviewStats {
        day,
        revenue: stats::aggregate_revenue(&orders, day),
        orders: orders.len(),
        pending: stats::count_by_status(&orders, OrderStatus::Pending),
        preparing: stats::count_by_status(&orders, OrderStatus::Preparing),
        delivered: stats::count_by_status(&orders, OrderStatus::Delivered),
        cancelled: stats::count_by_status(&orders, OrderStatus::Cancelled),
    }))
}
