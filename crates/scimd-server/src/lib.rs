mod boundary;
mod classify;
mod failure;
mod health;
mod middleware;
mod response;
mod sink;
pub mod wire;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use scimd_config::Config;
use scimd_i18n::MessageCatalog;
use tower_http::trace::TraceLayer;

pub use boundary::ErrorBoundary;
pub use classify::{Classified, classify};
pub use failure::Failure;
pub use response::ErrorResponse;
pub use sink::{FailureSink, TracingSink};

/// Assembled server with resource routes wrapped by the error boundary
///
/// Resource routing itself belongs to the host application; this crate
/// only guarantees that every failure escaping a mounted handler becomes
/// one canonical error response.
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration and the host's resource routes
    ///
    /// # Errors
    ///
    /// Returns an error if the message catalog cannot be loaded
    pub fn new(config: Config, resources: Router) -> anyhow::Result<Self> {
        Self::with_sink(config, resources, Arc::new(TracingSink))
    }

    /// Build the server with a custom failure sink
    ///
    /// # Errors
    ///
    /// Returns an error if the message catalog cannot be loaded
    pub fn with_sink(config: Config, resources: Router, sink: Arc<dyn FailureSink>) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let catalog = MessageCatalog::load(&config.i18n.catalog)?;
        let boundary = ErrorBoundary::new(Arc::new(catalog), sink);

        let mut app = resources;

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Error boundary wraps every handler; tracing sits outside it
        app = app.layer(axum::middleware::from_fn(move |req, next| {
            let boundary = boundary.clone();
            async move { middleware::error_boundary_middleware(boundary, req, next).await }
        }));
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
