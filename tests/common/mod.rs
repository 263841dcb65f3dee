//! Shared utilities for integration testing.

use std::path::Path;

use mock_responder::config::{ResponderConfig, ServeMode};
use mock_responder::lifecycle::{launch, Running};
use mock_responder::Shutdown;

/// A responder running on ephemeral localhost ports.
///
/// Keep it alive for the duration of the test; dropping it stops the
/// listeners.
#[allow(dead_code)]
pub struct TestResponder {
    pub running: Running,
    pub shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestResponder {
    pub fn http_url(&self, path: &str) -> String {
        let addr = self.running.http_addr.expect("HTTP listener not running");
        format!("http://{}{}", addr, path)
    }

    pub fn https_url(&self, path: &str) -> String {
        let addr = self.running.https_addr.expect("HTTPS listener not running");
        format!("https://{}{}", addr, path)
    }
}

/// Config bound to 127.0.0.1 with ephemeral ports and the bundled certificate.
pub fn test_config() -> ResponderConfig {
    let certs = Path::new(env!("CARGO_MANIFEST_DIR")).join("certs");

    let mut config = ResponderConfig::default();
    config.listener.bind_host = "127.0.0.1".into();
    config.listener.http_port = 0;
    config.listener.https_port = 0;
    config.tls.cert_path = certs.join("cert.pem");
    config.tls.key_path = certs.join("key.pem");
    config
}

/// Start both listeners.
#[allow(dead_code)]
pub async fn start_responder() -> TestResponder {
    start_with(test_config()).await
}

/// Start only the HTTPS listener.
#[allow(dead_code)]
pub async fn start_https_only() -> TestResponder {
    let mut config = test_config();
    config.listener.mode = ServeMode::HttpsOnly;
    start_with(config).await
}

pub async fn start_with(config: ResponderConfig) -> TestResponder {
    let shutdown = Shutdown::new();
    let running = launch(config, &shutdown).await.unwrap();
    TestResponder { running, shutdown }
}

/// Plain client that never goes through a system proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Client that accepts the self-signed test certificate.
#[allow(dead_code)]
pub fn insecure_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .danger_accept_invalid_certs(true)
        .build()
        .unwrap()
}
