//! Server state - shared references to all services
//!
//! `ServerState` holds `Arc`-shared handles, so cloning it per request
//! is cheap. The repositories are the single in-process source of
//! truth; the data source seeds them at startup and afterwards only
//! receives newly submitted orders.

use std::sync::Arc;

use parking_lot::RwLock;

use shared::models::{MenuItem, RestaurantSettings};
use shared::order::Order;
use shared::OrderResult;

use crate::core::Config;
use crate::datasource::{DataSource, MockDataSource};
use crate::orders::OrdersManager;
use crate::repository::{InMemoryRepository, Repository};

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    /// Catalog store
    pub menu: Arc<InMemoryRepository<MenuItem>>,
    /// Order lifecycle controller over the order repository
    pub orders: Arc<OrdersManager>,
    /// Display settings (singleton)
    pub settings: Arc<RwLock<RestaurantSettings>>,
    /// External data boundary (mock backend)
    pub source: Arc<dyn DataSource>,
}

impl ServerState {
    /// Build state seeded from the mock data source
    pub async fn initialize(config: &Config) -> OrderResult<Self> {
        let source: Arc<dyn DataSource> = Arc::new(MockDataSource::new(config.mock_latency));
        Self::with_source(config.clone(), source).await
    }

    /// Build state over an explicit data source (tests inject their own)
    pub async fn with_source(config: Config, source: Arc<dyn DataSource>) -> OrderResult<Self> {
        let menu = Arc::new(InMemoryRepository::new());
        menu.seed(source.list_menu_items().await?);

        let order_repo: Arc<InMemoryRepository<Order>> = Arc::new(InMemoryRepository::new());
        order_repo.seed(source.list_orders().await?);

        let settings = Arc::new(RwLock::new(source.get_settings().await?));

        tracing::info!(
            menu_items = menu.list().await.len(),
            orders = order_repo.list().await.len(),
            "Server state seeded from data source"
        );

        Ok(Self {
            config,
            menu,
            orders: Arc::new(OrdersManager::new(order_repo)),
            settings,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_seeds_from_source() {
        let state = ServerState::with_source(
            Config::default(),
            Arc::new(MockDataSource::instant()),
        )
        .await
        .unwrap();

        assert_eq!(state.menu.list().await.len(), 8);
        assert_eq!(state.orders.list().await.len(), 3);
        assert_eq!(
            state.settings.read().menu_title,
            "Spice Garden Restaurant"
        );
    }
}
