//! Table session - one table's draft and its submission path
//!
//! Submission is an explicit two-phase contract: the draft is drained
//! locally first (the optimistic apply), then pushed through the
//! simulated network boundary; if every attempt fails the drained
//! lines are restored into the draft (the rollback). A lost submission
//! is business-significant, so the push retries with exponential
//! backoff before giving up.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use shared::models::MenuItem;
use shared::order::Order;
use shared::{OrderError, OrderResult};

use crate::datasource::DataSource;
use crate::orders::cart::{CartEvent, OrderDraft};

/// Retry policy for order submission
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    /// Total attempts, including the first
    pub attempts: u32,
    /// Delay before the first retry; doubles per attempt
    pub backoff_base: Duration,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff_base: Duration::from_millis(200),
        }
    }
}

/// One table's ordering session
pub struct TableSession {
    table_id: String,
    draft: Mutex<OrderDraft>,
    source: Arc<dyn DataSource>,
    config: SubmitConfig,
}

impl TableSession {
    pub fn new(table_id: impl Into<String>, source: Arc<dyn DataSource>) -> Self {
        Self::with_config(table_id, source, SubmitConfig::default())
    }

    pub fn with_config(
        table_id: impl Into<String>,
        source: Arc<dyn DataSource>,
        config: SubmitConfig,
    ) -> Self {
        Self {
            table_id: table_id.into(),
            draft: Mutex::new(OrderDraft::new()),
            source,
            config,
        }
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn add_item(&self, item: &MenuItem, quantity: i32) {
        self.draft.lock().add_item(item, quantity);
    }

    pub fn update_quantity(&self, item_id: &str, quantity: i32) {
        self.draft.lock().update_quantity(item_id, quantity);
    }

    pub fn remove_item(&self, item_id: &str) {
        self.draft.lock().remove_item(item_id);
    }

    pub fn total(&self) -> f64 {
        self.draft.lock().total()
    }

    pub fn line_count(&self) -> usize {
        self.draft.lock().len()
    }

    /// Discard the draft (explicit cancel)
    pub fn cancel(&self) {
        self.draft.lock().clear();
    }

    /// Subscribe to cart notifications
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.draft.lock().subscribe()
    }

    /// Submit the draft as an order for this table
    ///
    /// Drains the draft synchronously before the first await, so an
    /// overlapping submit from the same session fails with
    /// [`OrderError::EmptyOrder`] instead of creating a second order.
    /// Transient data-source failures are retried with backoff; after
    /// the final failure the drained lines go back into the draft and
    /// the error is returned.
    pub async fn submit(&self) -> OrderResult<Order> {
        let lines = self.draft.lock().take_lines()?;

        let order = match Order::new(&self.table_id, lines.clone()) {
            Ok(order) => order,
            Err(e) => {
                self.draft.lock().restore_lines(lines);
                return Err(e);
            }
        };

        let mut last_err = None;
        for attempt in 0..self.config.attempts {
            if attempt > 0 {
                let backoff = self.config.backoff_base * 2u32.pow(attempt - 1);
                tracing::debug!(
                    order_id = %order.id,
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    "Retrying order submission"
                );
                tokio::time::sleep(backoff).await;
            }

            match self.source.submit_order(&order).await {
                Ok(()) => {
                    tracing::info!(
                        order_id = %order.id,
                        table_id = %self.table_id,
                        total = order.total,
                        "Order accepted"
                    );
                    return Ok(order);
                }
                Err(e) if e.is_retryable() => last_err = Some(e),
                Err(e) => {
                    self.draft.lock().restore_lines(lines);
                    return Err(e);
                }
            }
        }

        let err = last_err.unwrap_or_else(|| OrderError::DataSource("submission failed".into()));
        tracing::warn!(
            order_id = %order.id,
            table_id = %self.table_id,
            error = %err,
            "Order submission exhausted retries, draft restored"
        );
        self.draft.lock().restore_lines(lines);
        Err(err)
    }
}
