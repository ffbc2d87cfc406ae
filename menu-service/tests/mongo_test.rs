//! End-to-end tests against a real MongoDB at `mongodb://localhost:27017`.
//! Run with `cargo test -- --ignored` while MongoDB is up.

use menu_service::config::{MenuConfig, MongoConfig};
use menu_service::startup::Application;
use reqwest::{Client, StatusCode};
use serde_json::json;
use uuid::Uuid;

struct SpawnedApp {
    address: String,
    uri: String,
    db_name: String,
}

impl SpawnedApp {
    async fn spawn() -> Self {
        let uri = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = format!("menu_test_{}", Uuid::new_v4().simple());

        let mut config = MenuConfig {
            mongodb: MongoConfig {
                uri: Some(uri.clone()),
                database: Some(db_name.clone()),
            },
            ..MenuConfig::default()
        };
        config.common.port = 0; // Random port for testing

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        Self {
            address,
            uri,
            db_name,
        }
    }

    async fn cleanup(&self) {
        let client = mongodb::Client::with_uri_str(&self.uri).await.unwrap();
        let _ = client.database(&self.db_name).drop(None).await;
    }
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn seed_list_and_create_against_mongodb() {
    let app = SpawnedApp::spawn().await;
    let client = Client::new();

    let items: serde_json::Value = client
        .get(format!("{}/api/menu", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(items, json!([]));

    let seeded: serde_json::Value = client
        .post(format!("{}/api/menu/seed", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(seeded["status"], "seeded");
    assert_eq!(seeded["count"], 6);

    let again: serde_json::Value = client
        .post(format!("{}/api/menu/seed", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again["status"], "exists");
    assert_eq!(again["count"], 6);

    let response = client
        .post(format!("{}/api/menu", app.address))
        .json(&json!({"name": "Test", "price": 1.0, "category": "Test"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created["id"].as_str().map(str::len), Some(24));

    let chicken: Vec<serde_json::Value> = client
        .get(format!("{}/api/menu?category=Chicken", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(chicken.len(), 2);

    let test_items: Vec<serde_json::Value> = client
        .get(format!("{}/api/menu?category=Test", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(test_items.len(), 1);
    assert_eq!(test_items[0]["is_featured"], false);
    assert!(test_items[0].get("_id").is_none());

    let diagnostics: serde_json::Value = client
        .get(format!("{}/test", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(diagnostics["database"], "✅ Connected & Working");

    app.cleanup().await;
}
