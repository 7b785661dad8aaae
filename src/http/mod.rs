//! HTTP request boundary.
//!
//! Exposes `POST /send`, which validates a JSON message and forwards it
//! through the [`DispatchService`], and `GET /health`.

mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use thiserror::Error;

use crate::sms::{
    ports::{MessageValidator, ReferenceAllocator, SmsTransport},
    services::DispatchService,
};

pub use handlers::SendMessageRequest;

/// Errors raised while running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that could not be bound.
        addr: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the application router around `service`.
pub fn build_router<T, A, V>(service: DispatchService<T, A, V>) -> Router
where
    T: SmsTransport + 'static,
    A: ReferenceAllocator + 'static,
    V: MessageValidator + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route("/send", post(handlers::send_message::<T, A, V>))
        .with_state(service)
}

/// Serves `router` on `addr` until Ctrl-C is received.
///
/// # Errors
///
/// Returns [`ServerError`] if the address cannot be bound or the server
/// fails while running.
pub async fn serve(addr: &str, router: Router) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_owned(),
            source,
        })?;
    tracing::info!(addr, "starting service");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
