#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use menu_service::config::{MenuConfig, MongoConfig};
use menu_service::services::{DocumentStore, MockDocumentStore};
use menu_service::startup::{build_router, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_DATABASE: &str = "menu_test";

/// Configuration as if both database variables were set.
pub fn configured() -> MenuConfig {
    MenuConfig {
        mongodb: MongoConfig {
            uri: Some("mongodb://localhost:27017".to_string()),
            database: Some(TEST_DATABASE.to_string()),
        },
        log_level: "error".to_string(),
        ..MenuConfig::default()
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Option<Arc<MockDocumentStore>>,
}

impl TestApp {
    /// Router backed by an empty in-memory store.
    pub fn with_store() -> Self {
        Self::with_mock(MockDocumentStore::new(TEST_DATABASE))
    }

    pub fn with_mock(mock: MockDocumentStore) -> Self {
        let store = Arc::new(mock);
        let state = AppState::new(
            configured(),
            Some(store.clone() as Arc<dyn DocumentStore>),
        );
        Self {
            router: build_router(state),
            store: Some(store),
        }
    }

    /// Router in the degraded state: no database configured.
    pub fn without_store() -> Self {
        let state = AppState::new(MenuConfig::default(), None);
        Self {
            router: build_router(state),
            store: None,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
        self.request(Method::POST, uri, body).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self.get(uri).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let response = self.post(uri, body).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    pub async fn stored_count(&self) -> u64 {
        self.store
            .as_ref()
            .expect("test app has no store")
            .count_documents("menuitem", mongodb::bson::doc! {})
            .await
            .unwrap()
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}
