//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the single dispatch handler
//! - Wire up middleware (body limit, tracing, CORS headers)
//! - Serve the router over a plain TCP listener or over rustls
//! - Stop accepting when the shutdown signal fires

use axum::{http::HeaderValue, Router};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::config::LimitsConfig;
use crate::http::handlers::{dispatch, AppState};
use crate::http::response::CORS_HEADERS;
use crate::lifecycle::shutdown::wait_for_trigger;
use crate::net::listener::ListenerError;

/// The mock responder service. One instance can be served on any number
/// of listeners; each gets its own clone of the router.
#[derive(Clone)]
pub struct MockServer {
    router: Router,
}

impl MockServer {
    /// Create a new server with the given request limits.
    pub fn new(limits: LimitsConfig) -> Self {
        let router = Self::build_router(AppState { limits });
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let max_body_bytes = state.limits.max_body_bytes;
        let [allow_origin, allow_methods, allow_headers] = CORS_HEADERS
            .map(|(name, value)| SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value)));

        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(max_body_bytes))
            .layer(TraceLayer::new_for_http())
            .layer(allow_origin)
            .layer(allow_methods)
            .layer(allow_headers)
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve plain HTTP until shutdown is triggered.
    pub async fn run_http(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ListenerError> {
        let addr = listener.local_addr().map_err(ListenerError::LocalAddr)?;
        tracing::info!(address = %addr, "Mock HTTP server running on port {}", addr.port());

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(wait_for_trigger(shutdown))
            .await
            .map_err(|source| ListenerError::Serve { addr, source })?;

        tracing::info!(address = %addr, "HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS until shutdown is triggered.
    ///
    /// The TLS config must already be built; see [`crate::net::tls`].
    pub async fn run_https(
        self,
        listener: TcpListener,
        tls: RustlsConfig,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ListenerError> {
        let addr = listener.local_addr().map_err(ListenerError::LocalAddr)?;
        let listener = listener.into_std().map_err(ListenerError::LocalAddr)?;
        listener
            .set_nonblocking(true)
            .map_err(ListenerError::LocalAddr)?;

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            wait_for_trigger(shutdown).await;
            shutdown_handle.shutdown();
        });

        tracing::info!(address = %addr, "Mock HTTPS server running on port {}", addr.port());

        axum_server::from_tcp_rustls(listener, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await
            .map_err(|source| ListenerError::Serve { addr, source })?;

        tracing::info!(address = %addr, "HTTPS server stopped");
        Ok(())
    }
}
