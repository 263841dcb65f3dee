//! HTTPS listener behaviour, HTTPS-only mode, and the TLS fallback.

use reqwest::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_https_serves_same_endpoints() {
    let responder = common::start_responder().await;
    let client = common::insecure_client();

    let res = client
        .get(responder.https_url("/nonexistent"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Not found", "path": "/nonexistent"}));

    let body: Value = client
        .post(responder.https_url("/anything"))
        .header("Content-Type", "text/plain")
        .body("hello")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        body,
        json!({"method": "POST", "data": "hello", "content_type": "text/plain"})
    );
}

#[tokio::test]
async fn test_https_only_mode_skips_http() {
    let responder = common::start_https_only().await;
    assert!(responder.running.http_addr.is_none());
    assert!(responder.running.https_addr.is_some());

    let res = common::insecure_client()
        .get(responder.https_url("/"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn test_tls_failure_degrades_to_http_only() {
    let mut config = common::test_config();
    config.tls.key_path = config.tls.cert_path.clone();

    let responder = common::start_with(config).await;
    assert!(responder.running.https_addr.is_none());
    assert!(responder.running.is_serving());

    let res = common::client()
        .get(responder.http_url("/test"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn test_tls_failure_in_https_only_mode_serves_nothing() {
    let mut config = common::test_config();
    config.listener.mode = mock_responder::config::ServeMode::HttpsOnly;
    config.tls.cert_path = "missing/cert.pem".into();

    let responder = common::start_with(config).await;
    assert!(!responder.running.is_serving());
    assert!(responder.running.http_addr.is_none());
    assert!(responder.running.https_addr.is_none());
}

#[tokio::test]
async fn test_shutdown_stops_listeners() {
    let common::TestResponder { running, shutdown } = common::start_responder().await;
    let http_url = format!("http://{}/", running.http_addr.unwrap());

    shutdown.trigger();
    tokio::time::timeout(std::time::Duration::from_secs(5), running.wait())
        .await
        .expect("listeners did not stop")
        .unwrap();

    assert!(common::client().get(http_url).send().await.is_err());
}
