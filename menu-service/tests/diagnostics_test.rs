mod common;

use axum::http::StatusCode;
use common::TestApp;
use menu_service::services::MockDocumentStore;

#[tokio::test]
async fn diagnostics_report_unavailable_database_without_failing() {
    let app = TestApp::without_store();

    let (status, body) = app.get_json("/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn diagnostics_list_collections_when_connected() {
    let app = TestApp::with_store();
    app.post("/api/menu/seed", None).await;

    let (status, body) = app.get_json("/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], serde_json::json!(["menuitem"]));
}

#[tokio::test]
async fn diagnostics_fold_store_errors_into_status() {
    let app = TestApp::with_mock(MockDocumentStore::failing(
        common::TEST_DATABASE,
        "not authorized on menu_test to execute command listCollections",
    ));

    let (status, body) = app.get_json("/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connection_status"], "Connected");
    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("⚠️  Connected but Error: "));
    let detail = database.trim_start_matches("⚠️  Connected but Error: ");
    assert_eq!(detail.chars().count(), 50);
}
