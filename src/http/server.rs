//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the four endpoints and both fallbacks
//! - Wire up middleware (request ID, access log, recovery, timeouts)
//! - Run the accept loop and hand connections to the net layer
//! - Drain open connections on shutdown

use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};

use crate::http::handlers;
use crate::http::middleware::{access_log, recovery};
use crate::http::request::{propagate_request_id, set_request_id};
use crate::lifecycle::ShutdownSignal;
use crate::net::{serve_connection, ConnectionTracker, Listener, ListenerError};
use crate::observability::Logger;

/// Time a keep-alive connection may sit idle before the next request.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(10);
/// Time allowed to receive a request body.
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);
/// Time allowed to produce a response.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(30);
/// Time open connections get to finish after shutdown is requested.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum number of concurrently open connections.
pub const MAX_CONNECTIONS: usize = 10_000;

/// Error type for the serve loop.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("failed to read local address: {0}")]
    LocalAddr(#[source] std::io::Error),
}

/// HTTP server for the transform service.
pub struct HttpServer {
    router: Router,
    logger: Logger,
}

impl HttpServer {
    /// Create a new HTTP server logging through `logger`.
    pub fn new(logger: Logger) -> Self {
        let router = build_router(logger.clone());
        Self { router, logger }
    }

    /// The fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain open connections.
    pub async fn run(self, listener: Listener, mut shutdown: ShutdownSignal) -> Result<(), ServeError> {
        let addr = listener.local_addr().map_err(ServeError::LocalAddr)?;
        let logger = self.logger.clone();
        logger.in_scope(|| tracing::info!(addr = %addr, "starting server"));

        let tracker = ConnectionTracker::new();

        loop {
            let accepted = tokio::select! {
                accepted = listener.accept() => accepted,
                _ = shutdown.recv() => break,
            };

            let (stream, peer, permit) = match accepted {
                Ok(conn) => conn,
                Err(ListenerError::Accept(e)) => {
                    logger.in_scope(|| tracing::warn!(error = %e, "Accept failed"));
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let guard = tracker.track();
            let app = self.router.clone();
            let conn_shutdown = shutdown.clone();
            tokio::spawn(logger.attach(async move {
                let _permit = permit;
                tracing::trace!(connection_id = %guard.id(), peer_addr = %peer, "Connection opened");
                serve_connection(stream, peer, app, IDLE_TIMEOUT, conn_shutdown).await;
                drop(guard);
            }));
        }

        drop(listener);
        let open = tracker.active_count();
        logger.in_scope(|| tracing::info!(open_connections = open, "Shutting down, draining connections"));

        if tokio::time::timeout(DRAIN_TIMEOUT, tracker.wait_idle()).await.is_err() {
            let remaining = tracker.active_count();
            logger.in_scope(|| tracing::warn!(remaining, "Drain deadline reached, dropping connections"));
        }

        logger.in_scope(|| tracing::info!("HTTP server stopped"));
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(logger: Logger) -> Router {
    routes()
        .layer(TimeoutLayer::new(WRITE_TIMEOUT))
        .layer(RequestBodyTimeoutLayer::new(READ_TIMEOUT))
        .layer(recovery::layer(logger.clone()))
        .layer(propagate_request_id())
        .layer(middleware::from_fn_with_state(logger, access_log))
        .layer(set_request_id())
}

/// The static routing table, without middleware.
pub fn routes() -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/echo", get(handlers::echo))
        .route("/reverse", post(handlers::reverse))
        .route("/skip_odd", post(handlers::skip_odd))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
}
