//! Server core: configuration, error surface, shared state

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::ServerState;
