//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (clap handles syntactic)
//! - Validate value ranges (clamps > 0, ports distinct)
//! - Detect unparsable addresses before any socket is bound
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ResponderConfig → Result<(), Vec<ValidationError>>

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use crate::config::schema::{ResponderConfig, ServeMode};

/// A single semantic problem with a [`ResponderConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid bind host '{0}'")]
    BindHost(String),

    #[error("HTTP and HTTPS listeners both use port {0}")]
    PortConflict(u16),

    #[error("{0} must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("Invalid metrics address '{0}'")]
    MetricsAddress(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ResponderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::BindHost(config.listener.bind_host.clone()));
    }

    let listener = &config.listener;
    if listener.mode == ServeMode::Both
        && listener.http_port != 0
        && listener.http_port == listener.https_port
    {
        errors.push(ValidationError::PortConflict(listener.http_port));
    }

    if config.limits.max_delay_secs == 0 {
        errors.push(ValidationError::ZeroLimit("max_delay_secs"));
    }
    if config.limits.max_large_bytes == 0 {
        errors.push(ValidationError::ZeroLimit("max_large_bytes"));
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroLimit("max_body_bytes"));
    }

    if let Some(addr) = &config.observability.metrics_address {
        if addr.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::MetricsAddress(addr.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
