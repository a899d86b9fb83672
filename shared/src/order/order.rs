//! Submitted order record

use serde::{Deserialize, Serialize};

use crate::error::OrderError;
use crate::order::money;
use crate::order::{OrderLineItem, OrderStatus};
use crate::types::{Timestamp, now_millis};

/// Submitted order
///
/// Created exactly once at submission. `items`, `timestamp` and `total`
/// never change afterwards; `status` is the only mutable field and is
/// changed exclusively by the lifecycle manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique id, generated at submission
    pub id: String,
    pub table_id: String,
    /// Non-empty, frozen at submission
    pub items: Vec<OrderLineItem>,
    pub status: OrderStatus,
    /// Creation instant (Unix milliseconds)
    pub timestamp: Timestamp,
    /// Equals the sum of `price * quantity` over `items` at creation
    pub total: f64,
}

impl Order {
    /// Build an order from drafted lines
    ///
    /// Fails with [`OrderError::EmptyOrder`] when `items` is empty and
    /// with [`OrderError::InvalidItem`] when a line carries a duplicate
    /// `item_id`, a non-finite/negative price, or a non-positive
    /// quantity. The total is computed once here and frozen.
    pub fn new(table_id: impl Into<String>, items: Vec<OrderLineItem>) -> Result<Self, OrderError> {
        Self::with_timestamp(table_id, items, now_millis())
    }

    /// Build an order with an explicit creation instant (seeding, tests)
    pub fn with_timestamp(
        table_id: impl Into<String>,
        items: Vec<OrderLineItem>,
        timestamp: Timestamp,
    ) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let mut seen = std::collections::HashSet::new();
        for line in &items {
            money::validate_price(line.price)?;
            money::validate_quantity(line.quantity)?;
            if !seen.insert(line.item_id.as_str()) {
                return Err(OrderError::InvalidItem(format!(
                    "duplicate line for item {}",
                    line.item_id
                )));
            }
        }

        let total = money::line_total(&items);
        Ok(Self {
            id: format!("order-{}", uuid::Uuid::new_v4()),
            table_id: table_id.into(),
            items,
            status: OrderStatus::Pending,
            timestamp,
            total,
        })
    }

    /// Calendar day (UTC) of the creation instant
    pub fn day(&self) -> chrono::NaiveDate {
        chrono::DateTime::from_timestamp_millis(self.timestamp)
            .unwrap_or_default()
            .date_naive()
    }

    /// Check the construction invariant `total == sum(price*quantity)`
    pub fn verify_total(&self) -> bool {
        money::money_eq(self.total, money::line_total(&self.items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item_id: &str, price: f64, quantity: i32) -> OrderLineItem {
        OrderLineItem {
            item_id: item_id.to_string(),
            name: item_id.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_new_order_is_pending_with_exact_total() {
        let order =
            Order::new("7", vec![line("item-a", 12.99, 2), line("item-b", 4.99, 1)]).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.table_id, "7");
        assert_eq!(order.items.len(), 2);
        assert!((order.total - 30.97).abs() < money::MONEY_TOLERANCE);
        assert!(order.verify_total());
        assert!(order.id.starts_with("order-"));
    }

    #[test]
    fn test_empty_order_rejected() {
        let result = Order::new("4", vec![]);
        assert!(matches!(result, Err(OrderError::EmptyOrder)));
    }

    #[test]
    fn test_duplicate_item_id_rejected() {
        let result = Order::new("4", vec![line("item-a", 3.99, 1), line("item-a", 3.99, 2)]);
        assert!(matches!(result, Err(OrderError::InvalidItem(_))));
    }

    #[test]
    fn test_invalid_lines_rejected() {
        assert!(matches!(
            Order::new("4", vec![line("item-a", -1.0, 1)]),
            Err(OrderError::InvalidItem(_))
        ));
        assert!(matches!(
            Order::new("4", vec![line("item-a", 3.99, 0)]),
            Err(OrderError::InvalidItem(_))
        ));
    }

    #[test]
    fn test_day_uses_utc_calendar_date() {
        // 2024-03-01T23:30:00Z
        let order =
            Order::with_timestamp("1", vec![line("item-a", 5.0, 1)], 1_709_335_800_000).unwrap();
        assert_eq!(
            order.day(),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }
}
