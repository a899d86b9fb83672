//! End-to-end ordering flow over seeded server state

use std::sync::Arc;

use menu_server::core::{Config, ServerState};
use menu_server::datasource::MockDataSource;
use menu_server::orders::{stats, StatusFilter};
use menu_server::repository::Repository;
use shared::models::MenuItemUpdate;
use shared::order::{money, Order, OrderLineItem, OrderStatus};
use shared::OrderError;

async fn seeded_state() -> ServerState {
    ServerState::with_source(Config::default(), Arc::new(MockDataSource::instant()))
        .await
        .unwrap()
}

fn line(item_id: &str, name: &str, price: f64, quantity: i32) -> OrderLineItem {
    OrderLineItem {
        item_id: item_id.to_string(),
        name: name.to_string(),
        price,
        quantity,
    }
}

#[tokio::test]
async fn submit_track_and_deliver() {
    let state = seeded_state().await;

    let order = Order::new(
        "7",
        vec![
            line("item-1", "Vegetable Curry", 12.99, 2),
            line("item-7", "Mango Lassi", 4.99, 1),
        ],
    )
    .unwrap();
    let order = state.orders.submit(order).await.unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert!(money::money_eq(order.total, 30.97));

    // Read-back matches the submitted snapshot
    let stored = state.orders.get(&order.id).await.unwrap();
    assert_eq!(stored, order);

    // Walk the lifecycle to its terminal state
    state
        .orders
        .set_status(&order.id, OrderStatus::Preparing)
        .await
        .unwrap();
    state
        .orders
        .set_status(&order.id, OrderStatus::Delivered)
        .await
        .unwrap();

    let result = state.orders.set_status(&order.id, OrderStatus::Pending).await;
    assert!(matches!(result, Err(OrderError::InvalidTransition { .. })));
    assert_eq!(
        state.orders.get(&order.id).await.unwrap().status,
        OrderStatus::Delivered
    );
}

#[tokio::test]
async fn catalog_edits_do_not_rewrite_history() {
    let state = seeded_state().await;

    let order = Order::new("3", vec![line("item-1", "Vegetable Curry", 12.99, 2)]).unwrap();
    let order = state.orders.submit(order).await.unwrap();

    // Reprice the catalog item after submission
    let updated = state
        .menu
        .get("item-1")
        .await
        .unwrap()
        .apply(MenuItemUpdate {
            price: Some(20.0),
            ..Default::default()
        });
    state.menu.upsert(updated).await;

    let stored = state.orders.get(&order.id).await.unwrap();
    assert_eq!(stored.items[0].price, 12.99);
    assert!(money::money_eq(stored.total, 25.98));
    assert!(stored.verify_total());
}

#[tokio::test]
async fn dashboard_queries_over_seeded_orders() {
    let state = seeded_state().await;
    let orders = state.orders.list().await;
    assert_eq!(orders.len(), 3);

    // Seed data: one pending, one preparing, one delivered
    assert_eq!(stats::count_by_status(&orders, OrderStatus::Pending), 1);
    assert_eq!(stats::count_by_status(&orders, OrderStatus::Preparing), 1);
    assert_eq!(stats::count_by_status(&orders, OrderStatus::Delivered), 1);

    let pending = stats::filter_by_status(&orders, StatusFilter::Status(OrderStatus::Pending));
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "order-3");

    // Newest first; the seeds are staggered an hour apart
    let recent = stats::sort_by_recency(&orders);
    let ids: Vec<_> = recent.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["order-3", "order-2", "order-1"]);

    // Revenue counts only today's orders (seeds near UTC midnight may
    // fall on yesterday's calendar date)
    let today = chrono::Utc::now().date_naive();
    let expected = orders
        .iter()
        .filter(|o| o.day() == today)
        .map(|o| o.total)
        .sum::<f64>();
    assert!(money::money_eq(
        stats::aggregate_revenue(&orders, today),
        money::round_money(expected)
    ));
}
