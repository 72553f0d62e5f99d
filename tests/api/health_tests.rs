//! Health Check API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_probe_reports_store() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_probe_fails_when_store_is_down() {
    let app = TestApp::new();
    app.store.set_available(false);

    let response = app.server.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["checks"]["store"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_metrics_are_exposed() {
    let app = TestApp::new();
    app.server.get("/api/cities").await.assert_status_ok();

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("city_info_http_requests_total"));
    assert!(text.contains(r#"path="/api/cities""#));
}
