//! Orders manager - server-held order store and lifecycle transitions
//!
//! The manager is the single writer of `Order.status`. Status writes go
//! through a versioned compare-and-set against the repository, so two
//! dashboards racing on the same order cannot silently clobber each
//! other: the loser re-reads and re-checks the terminal guard.

use std::sync::Arc;

use shared::order::{Order, OrderStatus};
use shared::{OrderError, OrderResult};

use crate::repository::{RepoError, Repository};

/// Attempts for the status compare-and-set before giving up
const STATUS_CAS_ATTEMPTS: u32 = 3;

/// Lifecycle controller over the order repository
pub struct OrdersManager {
    orders: Arc<dyn Repository<Order>>,
}

impl OrdersManager {
    pub fn new(orders: Arc<dyn Repository<Order>>) -> Self {
        Self { orders }
    }

    /// Accept a submitted order into the store
    pub async fn submit(&self, order: Order) -> OrderResult<Order> {
        debug_assert!(order.verify_total());
        self.orders.upsert(order.clone()).await;
        tracing::info!(
            order_id = %order.id,
            table_id = %order.table_id,
            total = order.total,
            "Order submitted"
        );
        Ok(order)
    }

    /// Fetch one order
    pub async fn get(&self, order_id: &str) -> OrderResult<Order> {
        self.orders
            .get(order_id)
            .await
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    /// All orders in insertion order
    pub async fn list(&self) -> Vec<Order> {
        self.orders.list().await
    }

    /// Transition an order's status
    ///
    /// Fails with [`OrderError::OrderNotFound`] for an unknown id and
    /// with [`OrderError::InvalidTransition`] when the current status
    /// is terminal. Otherwise the status is overwritten
    /// unconditionally: any non-terminal state may move to any state,
    /// including backwards (`preparing` -> `pending`) or skipping
    /// `preparing` entirely. The forward-only ordering is deliberately
    /// not enforced.
    pub async fn set_status(&self, order_id: &str, new_status: OrderStatus) -> OrderResult<Order> {
        for _ in 0..STATUS_CAS_ATTEMPTS {
            // Record and version must come from one atomic read, so a
            // write landing in between cannot dodge the CAS below
            let (current, version) = self
                .orders
                .get_versioned(order_id)
                .await
                .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;

            if current.status.is_terminal() {
                return Err(OrderError::InvalidTransition {
                    order_id: order_id.to_string(),
                    from: current.status,
                    to: new_status,
                });
            }

            let mut updated = current;
            let from = updated.status;
            updated.status = new_status;

            match self.orders.upsert_versioned(updated.clone(), version).await {
                Ok(_) => {
                    tracing::info!(
                        order_id = %order_id,
                        from = %from,
                        to = %new_status,
                        "Order status changed"
                    );
                    return Ok(updated);
                }
                Err(RepoError::Conflict { .. }) => {
                    tracing::debug!(order_id = %order_id, "Status write lost race, re-reading");
                    continue;
                }
                Err(RepoError::NotFound(id)) => return Err(OrderError::OrderNotFound(id)),
            }
        }

        Err(OrderError::DataSource(format!(
            "order {} is being updated concurrently",
            order_id
        )))
    }
}
