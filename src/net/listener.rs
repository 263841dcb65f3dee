//! TCP listener binding.
//!
//! # Responsibilities
//! - Bind to the configured address
//! - Report the real local address (ports may be ephemeral)
//!
//! Accepting and per-connection tasks are left to axum / axum-server,
//! which spawn one task per connection.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// Failed to inspect or convert the bound socket.
    #[error("Listener socket error: {0}")]
    LocalAddr(#[source] io::Error),

    /// The serve loop exited with an error.
    #[error("Listener on {addr} failed: {source}")]
    Serve {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// Bind a TCP listener and log where it landed.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ListenerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { addr, source })?;

    let local_addr = listener.local_addr().map_err(ListenerError::LocalAddr)?;
    tracing::debug!(address = %local_addr, "Listener bound");

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn port_in_use_is_a_bind_error() {
        let first = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let taken = first.local_addr().unwrap();

        let err = bind(taken).await.unwrap_err();
        assert!(matches!(err, ListenerError::Bind { addr, .. } if addr == taken));
    }
}
