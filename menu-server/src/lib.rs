//! Spice Garden menu server
//!
//! Backend for a QR table-ordering system: customers scan a per-table
//! code, browse the menu and submit an order; staff manage the catalog,
//! track order lifecycles, and adjust display settings from a dashboard.
//!
//! # Module structure
//!
//! ```text
//! menu-server/src/
//! ├── core/          # Config, server state
//! ├── api/           # HTTP routes and handlers
//! ├── orders/        # Draft (cart), lifecycle manager, statistics
//! ├── repository/    # Injectable entity storage
//! ├── datasource/    # Read-through collaborators (mock backend)
//! └── utils/         # Logging setup
//! ```

pub mod api;
pub mod core;
pub mod datasource;
pub mod orders;
pub mod repository;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, ServerState};
pub use crate::orders::{OrderDraft, OrdersManager, TableSession};
pub use crate::repository::{InMemoryRepository, Repository};
