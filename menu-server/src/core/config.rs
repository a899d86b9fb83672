//! Server configuration
//!
//! All configuration items can be overridden through environment
//! variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HTTP_PORT | 3000 | HTTP API port |
//! | MOCK_LATENCY_MS | 300 | Simulated backend latency |
//! | LOG_LEVEL | info | Tracing level |
//! | ENVIRONMENT | development | Runtime environment |

use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Simulated latency for mock data-source calls
    pub mock_latency: Duration,
    /// Tracing level (trace | debug | info | warn | error)
    pub log_level: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            mock_latency: Duration::from_millis(
                std::env::var("MOCK_LATENCY_MS")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(300),
            ),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            mock_latency: Duration::from_millis(300),
            log_level: "info".into(),
            environment: "development".into(),
        }
    }
}
