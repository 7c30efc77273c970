//! Single-route HTTP health service.
//!
//! Exposes `GET /health`, returning a fixed JSON payload, with structured
//! logging (tracing) and graceful shutdown.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;
use error::{Result, ServerError};

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/health", get(routes::health::check))
        .layer(TraceLayer::new_for_http())
}

/// Binds the listening socket described by `config`.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the application on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(addr = %local_addr, "server is running on {}...", local_addr.port());

    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}
