//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::{DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT};

#[derive(Debug, Parser)]
#[command(name = "mock-responder")]
#[command(about = "Canned HTTP/HTTPS endpoints for end-to-end proxy tests", long_about = None)]
pub struct Cli {
    /// Serve only the HTTPS listener, in the foreground
    #[arg(long)]
    pub https: bool,

    /// Host to bind listeners to
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(long, default_value_t = DEFAULT_HTTP_PORT)]
    pub http_port: u16,

    #[arg(long, default_value_t = DEFAULT_HTTPS_PORT)]
    pub https_port: u16,

    /// PEM certificate chain for the HTTPS listener
    #[arg(long, default_value = "certs/cert.pem")]
    pub tls_cert: PathBuf,

    /// PEM private key for the HTTPS listener
    #[arg(long, default_value = "certs/key.pem")]
    pub tls_key: PathBuf,

    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Expose Prometheus metrics on this address (e.g. 127.0.0.1:9100)
    #[arg(long)]
    pub metrics_address: Option<String>,
}
