//! Data source collaborators
//!
//! Read-through boundaries the core pulls full snapshots from. There is
//! no pagination and no source-side filtering. Calls simulate network
//! latency: they suspend the caller and resume with a single result,
//! and cannot be cancelled once started (a caller may only drop the
//! future's output).

mod mock;

pub use mock::MockDataSource;

use async_trait::async_trait;
use shared::models::{MenuItem, RestaurantSettings};
use shared::order::Order;
use shared::OrderResult;

/// External data access boundary
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Full menu snapshot
    async fn list_menu_items(&self) -> OrderResult<Vec<MenuItem>>;

    /// Full order snapshot
    async fn list_orders(&self) -> OrderResult<Vec<Order>>;

    /// Display settings
    async fn get_settings(&self) -> OrderResult<RestaurantSettings>;

    /// Push a submitted order across the boundary
    ///
    /// Failures are transient ([`shared::OrderError::DataSource`]) and
    /// leave prior state unchanged; callers apply bounded retry.
    async fn submit_order(&self, order: &Order) -> OrderResult<()>;
}
