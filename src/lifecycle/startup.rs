//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Install the metrics exporter when asked for
//! - Build the TLS context before the HTTPS listener binds
//! - Bind listeners and spawn their serve loops
//!
//! # Design Decisions
//! - Invalid config and HTTP bind failures are fatal
//! - A TLS setup failure only disables HTTPS, with a console warning,
//!   and is never retried

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;
use tokio::task::JoinSet;

use crate::config::{validate_config, ResponderConfig, ValidationError};
use crate::http::MockServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::net::{listener, listener::ListenerError, tls};
use crate::observability::metrics;

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Invalid listen address: {0}")]
    Address(#[from] AddrParseError),

    #[error(transparent)]
    Listener(#[from] ListenerError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Listeners started by [`launch`].
///
/// Dropping this aborts every listener task.
#[derive(Debug, Default)]
pub struct Running {
    /// Bound HTTP address, if that listener is running.
    pub http_addr: Option<SocketAddr>,
    /// Bound HTTPS address, if TLS came up.
    pub https_addr: Option<SocketAddr>,
    tasks: JoinSet<Result<(), ListenerError>>,
}

impl Running {
    /// Whether any listener is serving.
    pub fn is_serving(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Wait until every listener has stopped, returning the first error.
    pub async fn wait(mut self) -> Result<(), ListenerError> {
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(result) => result?,
                Err(e) => tracing::error!(error = %e, "Listener task failed"),
            }
        }
        Ok(())
    }
}

/// Start the listeners described by `config`.
pub async fn launch(config: ResponderConfig, shutdown: &Shutdown) -> Result<Running, StartupError> {
    validate_config(&config).map_err(StartupError::Invalid)?;

    if let Some(Ok(addr)) = config
        .observability
        .metrics_address
        .as_deref()
        .map(str::parse::<SocketAddr>)
    {
        metrics::init_metrics(addr);
    }

    let server = MockServer::new(config.limits.clone());
    let mut running = Running::default();

    if config.listener.mode.serves_http() {
        let listener = listener::bind(config.http_addr()?).await?;
        running.http_addr = Some(listener.local_addr().map_err(ListenerError::LocalAddr)?);
        running
            .tasks
            .spawn(server.clone().run_http(listener, shutdown.subscribe()));
    }

    match tls::load_tls_config(&config.tls.cert_path, &config.tls.key_path).await {
        Ok(tls_config) => {
            let listener = listener::bind(config.https_addr()?).await?;
            running.https_addr = Some(listener.local_addr().map_err(ListenerError::LocalAddr)?);
            running
                .tasks
                .spawn(server.run_https(listener, tls_config, shutdown.subscribe()));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create SSL context");
            tracing::warn!("HTTPS server disabled due to SSL configuration issues");
        }
    }

    tracing::info!("Mock servers started:");
    if let Some(addr) = running.http_addr {
        tracing::info!("  HTTP:  http://localhost:{}", addr.port());
    }
    match running.https_addr {
        Some(addr) => tracing::info!("  HTTPS: https://localhost:{}", addr.port()),
        None => tracing::info!("  HTTPS: disabled"),
    }

    Ok(running)
}
