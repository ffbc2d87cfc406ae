mod common;

use axum::http::StatusCode;
use common::TestApp;
use menu_service::services::MockDocumentStore;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::with_store();

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "menu-service");
}

#[tokio::test]
async fn health_check_reports_missing_database() {
    let app = TestApp::without_store();

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn health_check_reports_unreachable_database() {
    let app = TestApp::with_mock(MockDocumentStore::failing(
        common::TEST_DATABASE,
        "server selection timeout",
    ));

    let (status, _) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::without_store();

    let response = app.get("/api/hello").await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn metrics_endpoint_returns_text() {
    let app = TestApp::without_store();

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/plain"));
}
