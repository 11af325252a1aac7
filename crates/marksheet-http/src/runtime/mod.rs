//! HTTP runtime for the result service.
//!
//! Owns the runtime configuration, builds the router, and drives the server
//! with graceful shutdown.

mod config;
mod docs;
mod error;
pub mod handlers;
mod router;
mod shutdown;
mod static_files;

pub use config::{ConfigError, HttpRuntimeConfig};
pub use error::{ApiError, ErrorBody};
pub use shutdown::shutdown_signal;

use std::io;

use tokio::net::TcpListener;

/// HTTP server state for the result service.
///
/// The calculation core is pure and allocates no shared resources, so the
/// runtime carries configuration only — there is nothing to lock or pool.
#[derive(Debug, Clone, Default)]
pub struct HttpRuntime {
    config: HttpRuntimeConfig,
}

impl HttpRuntime {
    /// Create a runtime with default configuration.
    pub fn new() -> Self {
        Self::with_config(HttpRuntimeConfig::default())
    }

    /// Create a runtime with custom configuration.
    pub fn with_config(config: HttpRuntimeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &HttpRuntimeConfig {
        &self.config
    }

    /// Serve the router on `listener` until a shutdown signal arrives.
    pub async fn serve(self, listener: TcpListener) -> io::Result<()> {
        let router = self.router();
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
