//! Configuration schema definitions.
//!
//! The responder reads no config file; these types are filled from the
//! command line (see [`crate::cli::Cli`]) and otherwise fall back to the
//! fixed fixture defaults.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::cli::Cli;

/// Default plain HTTP port.
pub const DEFAULT_HTTP_PORT: u16 = 9090;

/// Default HTTPS port.
pub const DEFAULT_HTTPS_PORT: u16 = 9443;

/// Root configuration for the mock responder.
#[derive(Debug, Clone, Default)]
pub struct ResponderConfig {
    /// Listener configuration (bind host, ports, mode).
    pub listener: ListenerConfig,

    /// Certificate material for the HTTPS listener.
    pub tls: TlsConfig,

    /// Clamps applied to request-controlled values.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Which listeners to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServeMode {
    /// HTTP and HTTPS listeners side by side.
    #[default]
    Both,
    /// Only the HTTPS listener, in the foreground.
    HttpsOnly,
}

impl ServeMode {
    pub fn serves_http(self) -> bool {
        matches!(self, ServeMode::Both)
    }
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Host or IP to bind both listeners to.
    pub bind_host: String,

    /// Plain HTTP port. 0 picks an ephemeral port.
    pub http_port: u16,

    /// HTTPS port. 0 picks an ephemeral port.
    pub https_port: u16,

    pub mode: ServeMode,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            http_port: DEFAULT_HTTP_PORT,
            https_port: DEFAULT_HTTPS_PORT,
            mode: ServeMode::Both,
        }
    }
}

/// TLS configuration for the HTTPS listener.
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to certificate chain (PEM).
    pub cert_path: PathBuf,

    /// Path to private key (PEM).
    pub key_path: PathBuf,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            cert_path: PathBuf::from("certs/cert.pem"),
            key_path: PathBuf::from("certs/key.pem"),
        }
    }
}

/// Upper bounds on what a single request can ask for.
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    /// Longest sleep `/delay` will actually perform, in seconds.
    pub max_delay_secs: u64,

    /// Largest body `/large` will produce, in bytes.
    pub max_large_bytes: usize,

    /// Largest POST body accepted, in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_delay_secs: 5,
            max_large_bytes: 1024 * 1024,
            max_body_bytes: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Prometheus exporter bind address. Disabled when `None`.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_address: None,
        }
    }
}

impl ResponderConfig {
    /// Build the configuration from parsed command-line flags.
    pub fn from_cli(cli: Cli) -> Self {
        let mode = if cli.https {
            ServeMode::HttpsOnly
        } else {
            ServeMode::Both
        };

        Self {
            listener: ListenerConfig {
                bind_host: cli.bind,
                http_port: cli.http_port,
                https_port: cli.https_port,
                mode,
            },
            tls: TlsConfig {
                cert_path: cli.tls_cert,
                key_path: cli.tls_key,
            },
            limits: LimitsConfig::default(),
            observability: ObservabilityConfig {
                log_level: cli.log_level,
                metrics_address: cli.metrics_address,
            },
        }
    }

    /// Address for the plain HTTP listener.
    pub fn http_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.socket_addr(self.listener.http_port)
    }

    /// Address for the HTTPS listener.
    pub fn https_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.socket_addr(self.listener.https_port)
    }

    fn socket_addr(&self, port: u16) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: IpAddr = self.listener.bind_host.parse()?;
        Ok(SocketAddr::new(ip, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_fixture_ports() {
        let config = ResponderConfig::default();
        assert_eq!(config.listener.http_port, 9090);
        assert_eq!(config.listener.https_port, 9443);
        assert_eq!(config.listener.mode, ServeMode::Both);
        assert_eq!(config.limits.max_delay_secs, 5);
        assert_eq!(config.limits.max_large_bytes, 1_048_576);
    }

    #[test]
    fn https_flag_selects_https_only() {
        let cli = Cli::parse_from(["mock-responder", "--https"]);
        let config = ResponderConfig::from_cli(cli);
        assert_eq!(config.listener.mode, ServeMode::HttpsOnly);
        assert!(!config.listener.mode.serves_http());
        assert_eq!(config.listener.https_port, DEFAULT_HTTPS_PORT);
    }

    #[test]
    fn no_flags_serves_both() {
        let cli = Cli::parse_from(["mock-responder"]);
        let config = ResponderConfig::from_cli(cli);
        assert_eq!(config.listener.mode, ServeMode::Both);
        assert_eq!(config.http_addr().unwrap(), "0.0.0.0:9090".parse().unwrap());
        assert_eq!(config.https_addr().unwrap(), "0.0.0.0:9443".parse().unwrap());
    }
}
