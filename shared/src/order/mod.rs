//! Order types
//!
//! - [`OrderLineItem`]: one (item, quantity) pairing with snapshotted
//!   name/price
//! - [`Order`]: immutable record created at submission; only `status`
//!   mutates afterwards
//! - [`OrderStatus`]: lifecycle states for a submitted order
//! - [`money`]: precise decimal arithmetic for totals

pub mod line_item;
pub mod money;
pub mod status;

mod order;

pub use line_item::OrderLineItem;
pub use order::Order;
pub use status::OrderStatus;
