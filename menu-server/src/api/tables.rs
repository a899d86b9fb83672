//! Table API Handlers
//!
//! The public surface behind a table's QR code: the menu payload the
//! customer sees, and order submission for that table.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use shared::models::{MenuItem, RestaurantSettings};
use shared::order::{Order, OrderLineItem};

use crate::core::{AppResult, ServerState};
use crate::repository::Repository;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/tables/{table_id}/menu", get(table_menu))
        .route("/api/tables/{table_id}/orders", post(submit_order))
}

/// Everything a table view needs to render
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMenu {
    pub table_id: String,
    pub settings: RestaurantSettings,
    pub items: Vec<MenuItem>,
}

/// Drafted lines sent up at submission
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    pub items: Vec<OrderLineItem>,
}

/// GET /api/tables/{table_id}/menu - menu payload for one table
pub async fn table_menu(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<TableMenu>> {
    // Clone out of the settings lock before awaiting; the guard must
    // not live across the await
    let settings = state.settings.read().clone();
    let items = state.menu.list().await;
    Ok(Json(TableMenu {
        table_id,
        settings,
        items,
    }))
}

/// POST /api/tables/{table_id}/orders - submit a drafted order
///
/// The lines carry the name/price snapshots taken when the customer
/// added them. Construction enforces the order invariants (non-empty,
/// unique item ids, valid prices/quantities, exact total). The order
/// crosses the data-source boundary first; a transport failure there
/// surfaces as a retryable 503 and nothing is registered locally.
pub async fn submit_order(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
    Json(payload): Json<SubmitOrderRequest>,
) -> AppResult<Json<Order>> {
    let order = Order::new(table_id, payload.items)?;
    state.source.submit_order(&order).await?;
    let order = state.orders.submit(order).await?;
    Ok(Json(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppError, Config};
    use crate::datasource::MockDataSource;
    use shared::order::{OrderLineItem, OrderStatus};
    use shared::OrderError;
    use std::sync::Arc;

    async fn state_with_mock() -> (ServerState, Arc<MockDataSource>) {
        let mock = Arc::new(MockDataSource::instant());
        let state = ServerState::with_source(Config::default(), mock.clone())
            .await
            .unwrap();
        (state, mock)
    }

    fn line(item_id: &str, price: f64, quantity: i32) -> OrderLineItem {
        OrderLineItem {
            item_id: item_id.to_string(),
            name: item_id.to_string(),
            price,
            quantity,
        }
    }

    // Spawning pins the handler future as Send; holding the settings
    // guard across the menu read would break that.
    #[tokio::test]
    async fn test_table_menu_payload_is_spawnable() {
        let (state, _) = state_with_mock().await;

        let handle = tokio::spawn(table_menu(State(state), Path("5".to_string())));
        let Json(payload) = handle.await.unwrap().unwrap();

        assert_eq!(payload.table_id, "5");
        assert_eq!(payload.items.len(), 8);
        assert_eq!(payload.settings.menu_title, "Spice Garden Restaurant");
    }

    #[tokio::test]
    async fn test_submit_order_crosses_the_source_boundary() {
        let (state, mock) = state_with_mock().await;
        let before = mock.accepted_orders();

        let request = SubmitOrderRequest {
            items: vec![line("item-1", 12.99, 2)],
        };
        let Json(order) = submit_order(
            State(state.clone()),
            Path("5".to_string()),
            Json(request),
        )
        .await
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(mock.accepted_orders(), before + 1);
        assert!(state.orders.get(&order.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_submit_order_source_failure_registers_nothing() {
        let (state, mock) = state_with_mock().await;
        let before = mock.accepted_orders();
        let registered = state.orders.list().await.len();
        mock.fail_next_submits(1);

        let request = SubmitOrderRequest {
            items: vec![line("item-1", 12.99, 1)],
        };
        let result = submit_order(
            State(state.clone()),
            Path("5".to_string()),
            Json(request),
        )
        .await;

        assert!(matches!(
            result,
            Err(AppError::Order(OrderError::DataSource(_)))
        ));
        assert_eq!(mock.accepted_orders(), before);
        assert_eq!(state.orders.list().await.len(), registered);
    }
}
