//! Dashboard queries over order snapshots
//!
//! Pure functions: they take a snapshot slice and never touch the
//! repository, so the dashboard can aggregate over whatever listing it
//! already fetched.

use chrono::NaiveDate;

use shared::order::{money, Order, OrderStatus};

/// Status filter for order listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(OrderStatus),
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Status(OrderStatus::Pending)),
            "preparing" => Ok(StatusFilter::Status(OrderStatus::Preparing)),
            "delivered" => Ok(StatusFilter::Status(OrderStatus::Delivered)),
            "cancelled" => Ok(StatusFilter::Status(OrderStatus::Cancelled)),
            other => Err(format!("unknown status filter: {}", other)),
        }
    }
}

/// Orders matching the filter, relative order preserved
pub fn filter_by_status(orders: &[Order], filter: StatusFilter) -> Vec<Order> {
    match filter {
        StatusFilter::All => orders.to_vec(),
        StatusFilter::Status(status) => orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect(),
    }
}

/// All orders sorted newest first; ties keep their input order
pub fn sort_by_recency(orders: &[Order]) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    // Stable sort, so equal timestamps keep input order
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Sum of totals for orders created on `day` (UTC calendar date, not a
/// rolling 24h window)
pub fn aggregate_revenue(orders: &[Order], day: NaiveDate) -> f64 {
    let sum = orders
        .iter()
        .filter(|o| o.day() == day)
        .map(|o| o.total)
        .sum();
    money::round_money(sum)
}

/// Count of orders with exactly `status`
pub fn count_by_status(orders: &[Order], status: OrderStatus) -> usize {
    orders.iter().filter(|o| o.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::OrderLineItem;

    fn order(id: &str, status: OrderStatus, timestamp: i64, price: f64) -> Order {
        let mut order = Order::with_timestamp(
            "1",
            vec![OrderLineItem {
                item_id: "item-1".to_string(),
                name: "Test".to_string(),
                price,
                quantity: 1,
            }],
            timestamp,
        )
        .unwrap();
        order.id = id.to_string();
        order.status = status;
        order
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let orders = vec![
            order("order-1", OrderStatus::Pending, 100, 1.0),
            order("order-2", OrderStatus::Preparing, 200, 1.0),
            order("order-3", OrderStatus::Pending, 300, 1.0),
        ];

        let pending = filter_by_status(&orders, "pending".parse().unwrap());
        let ids: Vec<_> = pending.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["order-1", "order-3"]);

        let all = filter_by_status(&orders, StatusFilter::All);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_sort_by_recency_newest_first_stable_ties() {
        let orders = vec![
            order("order-a", OrderStatus::Pending, 100, 1.0),
            order("order-b", OrderStatus::Pending, 300, 1.0),
            order("order-c", OrderStatus::Pending, 300, 1.0),
            order("order-d", OrderStatus::Pending, 200, 1.0),
        ];

        let sorted = sort_by_recency(&orders);
        let ids: Vec<_> = sorted.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["order-b", "order-c", "order-d", "order-a"]);
    }

    #[test]
    fn test_aggregate_revenue_same_calendar_day_only() {
        // 2024-03-01T12:00Z and 2024-03-02T00:30Z
        let day1 = 1_709_294_400_000;
        let day2 = 1_709_339_400_000;
        let orders = vec![
            order("order-1", OrderStatus::Delivered, day1, 10.50),
            order("order-2", OrderStatus::Delivered, day1 + 3_600_000, 5.25),
            order("order-3", OrderStatus::Delivered, day2, 99.99),
        ];

        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(money::money_eq(aggregate_revenue(&orders, day), 15.75));

        let next = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert!(money::money_eq(aggregate_revenue(&orders, next), 99.99));
    }

    #[test]
    fn test_count_by_status() {
        let orders = vec![
            order("order-1", OrderStatus::Pending, 100, 1.0),
            order("order-2", OrderStatus::Preparing, 200, 1.0),
            order("order-3", OrderStatus::Pending, 300, 1.0),
            order("order-4", OrderStatus::Cancelled, 400, 1.0),
        ];

        assert_eq!(count_by_status(&orders, OrderStatus::Pending), 2);
        assert_eq!(count_by_status(&orders, OrderStatus::Preparing), 1);
        assert_eq!(count_by_status(&orders, OrderStatus::Delivered), 0);
        assert_eq!(count_by_status(&orders, OrderStatus::Cancelled), 1);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "delivered".parse::<StatusFilter>().unwrap(),
            StatusFilter::Status(OrderStatus::Delivered)
        );
        assert!("unknown".parse::<StatusFilter>().is_err());
    }
}
