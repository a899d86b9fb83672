//! Ordering core
//!
//! - [`cart`]: pre-submission draft for one table session
//! - [`manager`]: server-held order store and lifecycle transitions
//! - [`session`]: a table's draft plus the two-phase submit path
//! - [`stats`]: dashboard queries over order snapshots

pub mod cart;
pub mod manager;
pub mod session;
pub mod stats;

pub use cart::{CartEvent, OrderDraft};
pub use manager::OrdersManager;
pub use session::{SubmitConfig, TableSession};
pub use stats::StatusFilter;
