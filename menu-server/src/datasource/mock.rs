//! Mock data source
//!
//! In-memory fixtures with artificial latency standing in for a real
//! backend. Holds the demo menu, a few historical orders, and the
//! display settings. A fault-injection knob makes the next N order
//! submissions fail, which is how the retry path is exercised.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use shared::models::{MenuCategory, MenuItem, RestaurantSettings};
use shared::order::{Order, OrderLineItem, OrderStatus};
use shared::types::now_millis;
use shared::{OrderError, OrderResult};

use super::DataSource;

/// Default simulated round-trip latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// Mock backend with canned data
pub struct MockDataSource {
    latency: Duration,
    menu_items: RwLock<Vec<MenuItem>>,
    orders: RwLock<Vec<Order>>,
    settings: RwLock<RestaurantSettings>,
    /// Number of upcoming submits that will fail (fault injection)
    failing_submits: AtomicU32,
}

impl MockDataSource {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            menu_items: RwLock::new(seed_menu_items()),
            orders: RwLock::new(seed_orders()),
            settings: RwLock::new(RestaurantSettings::default()),
            failing_submits: AtomicU32::new(0),
        }
    }

    /// Zero-latency instance for tests
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Make the next `n` calls to `submit_order` fail
    pub fn fail_next_submits(&self, n: u32) {
        self.failing_submits.store(n, Ordering::SeqCst);
    }

    /// Orders accepted so far (seed + submitted)
    pub fn accepted_orders(&self) -> usize {
        self.orders.read().len()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn list_menu_items(&self) -> OrderResult<Vec<MenuItem>> {
        self.simulate_latency().await;
        Ok(self.menu_items.read().clone())
    }

    async fn list_orders(&self) -> OrderResult<Vec<Order>> {
        self.simulate_latency().await;
        Ok(self.orders.read().clone())
    }

    async fn get_settings(&self) -> OrderResult<RestaurantSettings> {
        self.simulate_latency().await;
        Ok(self.settings.read().clone())
    }

    async fn submit_order(&self, order: &Order) -> OrderResult<()> {
        self.simulate_latency().await;

        let should_fail = self
            .failing_submits
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            tracing::warn!(order_id = %order.id, "Injected submit failure");
            return Err(OrderError::DataSource("simulated network failure".into()));
        }

        self.orders.write().push(order.clone());
        Ok(())
    }
}

fn menu_item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: MenuCategory,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        image: Some("/placeholder.svg?height=300&width=400".to_string()),
    }
}

/// Demo menu (eight items across the four categories)
pub fn seed_menu_items() -> Vec<MenuItem> {
    vec![
        menu_item(
            "item-1",
            "Vegetable Curry",
            "A delicious mix of seasonal vegetables in a rich curry sauce",
            12.99,
            MenuCategory::Veg,
        ),
        menu_item(
            "item-2",
            "Paneer Tikka",
            "Grilled cottage cheese with spices and vegetables",
            14.99,
            MenuCategory::Veg,
        ),
        menu_item(
            "item-3",
            "Chicken Biryani",
            "Fragrant rice dish with chicken and aromatic spices",
            16.99,
            MenuCategory::NonVeg,
        ),
        menu_item(
            "item-4",
            "Lamb Curry",
            "Tender pieces of lamb in a flavorful curry sauce",
            18.99,
            MenuCategory::NonVeg,
        ),
        menu_item(
            "item-5",
            "Papadum",
            "Crispy thin flatbread made from lentil flour",
            3.99,
            MenuCategory::Dry,
        ),
        menu_item(
            "item-6",
            "Onion Bhaji",
            "Deep-fried onion fritters with spices",
            5.99,
            MenuCategory::Dry,
        ),
        menu_item(
            "item-7",
            "Mango Lassi",
            "Refreshing yogurt drink with mango pulp",
            4.99,
            MenuCategory::Drinks,
        ),
        menu_item(
            "item-8",
            "Masala Chai",
            "Spiced tea with milk",
            3.49,
            MenuCategory::Drinks,
        ),
    ]
}

fn seed_order(
    id: &str,
    table_id: &str,
    lines: Vec<OrderLineItem>,
    status: OrderStatus,
    age_millis: i64,
) -> Order {
    let mut order = Order::with_timestamp(table_id, lines, now_millis() - age_millis)
        .expect("seed order lines are valid");
    order.id = id.to_string();
    order.status = status;
    order
}

fn seed_line(item_id: &str, name: &str, price: f64, quantity: i32) -> OrderLineItem {
    OrderLineItem {
        item_id: item_id.to_string(),
        name: name.to_string(),
        price,
        quantity,
    }
}

/// Demo order history (one per lifecycle stage, staggered in time)
pub fn seed_orders() -> Vec<Order> {
    vec![
        seed_order(
            "order-1",
            "4",
            vec![
                seed_line("item-1", "Vegetable Curry", 12.99, 2),
                seed_line("item-7", "Mango Lassi", 4.99, 2),
            ],
            OrderStatus::Delivered,
            3_600_000,
        ),
        seed_order(
            "order-2",
            "2",
            vec![
                seed_line("item-3", "Chicken Biryani", 16.99, 1),
                seed_line("item-6", "Onion Bhaji", 5.99, 1),
            ],
            OrderStatus::Preparing,
            1_800_000,
        ),
        seed_order(
            "order-3",
            "7",
            vec![
                seed_line("item-4", "Lamb Curry", 18.99, 1),
                seed_line("item-8", "Masala Chai", 3.49, 2),
            ],
            OrderStatus::Pending,
            600_000,
        ),
    ]
}
