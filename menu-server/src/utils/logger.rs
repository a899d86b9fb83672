//! Logging Infrastructure
//!
//! Structured logging setup for both development and production runs.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this crate
/// and `info` to dependencies.
pub fn init_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,menu_server={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
