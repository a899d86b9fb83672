//! Order draft (cart)
//!
//! Accumulates line items for a single table session before submission.
//! Held only in transient memory; drained on submission or cleared on
//! explicit cancel. One line per `item_id`: adding the same item again
//! merges quantities.

use tokio::sync::broadcast;

use shared::models::MenuItem;
use shared::order::{money, OrderLineItem};
use shared::{OrderError, OrderResult};

/// Cart notification channel capacity
const CART_CHANNEL_CAPACITY: usize = 64;

/// Fire-and-forget cart notifications for the caller to surface
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ItemAdded {
        item_id: String,
        name: String,
        quantity: i32,
    },
}

/// Pre-submission line collection for one table
#[derive(Debug)]
pub struct OrderDraft {
    lines: Vec<OrderLineItem>,
    event_tx: broadcast::Sender<CartEvent>,
}

impl OrderDraft {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(CART_CHANNEL_CAPACITY);
        Self {
            lines: Vec::new(),
            event_tx,
        }
    }

    /// Subscribe to cart notifications
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.event_tx.subscribe()
    }

    /// Add a menu item to the draft
    ///
    /// Requires `quantity > 0`; silently no-ops otherwise (policy, not
    /// an error). Merges into an existing line for the same `item_id`,
    /// otherwise appends a new line snapshotting name/price. Emits an
    /// `ItemAdded` notification; delivery is not retried and a missing
    /// subscriber is fine.
    pub fn add_item(&mut self, item: &MenuItem, quantity: i32) {
        if quantity <= 0 {
            return;
        }

        match self.lines.iter_mut().find(|l| l.item_id == item.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(OrderLineItem::snapshot(item, quantity)),
        }

        let _ = self.event_tx.send(CartEvent::ItemAdded {
            item_id: item.id.clone(),
            name: item.name.clone(),
            quantity,
        });
    }

    /// Replace a line's quantity
    ///
    /// `quantity <= 0` behaves exactly like [`Self::remove_item`].
    /// No-op when `item_id` is absent.
    pub fn update_quantity(&mut self, item_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Delete a line; no-op when absent
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Draft total (`sum(price * quantity)`), 0.0 when empty
    pub fn total(&self) -> f64 {
        money::line_total(&self.lines)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Current lines in insertion order
    pub fn lines(&self) -> &[OrderLineItem] {
        &self.lines
    }

    /// Discard all lines (explicit cancel)
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Drain all lines for submission
    ///
    /// Fails with [`OrderError::EmptyOrder`] when the draft has zero
    /// lines. The drain is synchronous, so an overlapping submit from
    /// the same session observes an empty draft and fails instead of
    /// producing a second order.
    pub fn take_lines(&mut self) -> OrderResult<Vec<OrderLineItem>> {
        if self.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Ok(std::mem::take(&mut self.lines))
    }

    /// Put drained lines back after a failed submission
    ///
    /// Restored lines keep their relative order at the front; anything
    /// added to the draft meanwhile is merged by `item_id`.
    pub fn restore_lines(&mut self, lines: Vec<OrderLineItem>) {
        for line in lines.into_iter().rev() {
            match self.lines.iter_mut().find(|l| l.item_id == line.item_id) {
                Some(existing) => existing.quantity += line.quantity,
                None => self.lines.insert(0, line),
            }
        }
    }
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}
