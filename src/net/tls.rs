//! TLS configuration and certificate loading.
//!
//! The HTTPS listener does no trust validation: clients are expected to
//! skip verification, and no client certificate is requested.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;

/// Why the TLS context could not be built.
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("Certificate file not found: {0:?}")]
    MissingCertificate(PathBuf),

    #[error("Private key file not found: {0:?}")]
    MissingKey(PathBuf),

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No certificates found in {0:?}")]
    NoCertificates(PathBuf),

    #[error("No private key found in {0:?}")]
    NoPrivateKey(PathBuf),

    #[error("Rejected TLS configuration: {0}")]
    Config(#[source] io::Error),
}

/// Load TLS configuration from certificate and key files.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, TlsError> {
    if !cert_path.exists() {
        return Err(TlsError::MissingCertificate(cert_path.to_path_buf()));
    }
    if !key_path.exists() {
        return Err(TlsError::MissingKey(key_path.to_path_buf()));
    }

    let certs = read_certificates(cert_path)?;
    let key = read_private_key(key_path)?;

    RustlsConfig::from_der(certs, key)
        .await
        .map_err(TlsError::Config)
}

fn open(path: &Path) -> Result<BufReader<File>, TlsError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| TlsError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn read_certificates(path: &Path) -> Result<Vec<Vec<u8>>, TlsError> {
    let mut reader = open(path)?;
    let certs = rustls_pemfile::certs(&mut reader)
        .map(|cert| cert.map(|der| der.to_vec()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| TlsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if certs.is_empty() {
        return Err(TlsError::NoCertificates(path.to_path_buf()));
    }
    Ok(certs)
}

fn read_private_key(path: &Path) -> Result<Vec<u8>, TlsError> {
    let mut reader = open(path)?;
    rustls_pemfile::private_key(&mut reader)
        .map_err(|source| TlsError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .map(|key| key.secret_der().to_vec())
        .ok_or_else(|| TlsError::NoPrivateKey(path.to_path_buf()))
}
