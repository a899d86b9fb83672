//! Shared types for the Spice Garden ordering system
//!
//! Common types used across crates: menu and settings models, order
//! types, error types, and the API response envelope.

pub mod error;
pub mod models;
pub mod order;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{OrderError, OrderResult};
pub use types::Timestamp;
