use axum::{extract::State, Json};

use crate::dtos::diagnostics::{
    connected_with_error, env_status, BACKEND_RUNNING, CONNECTED, DATABASE_NOT_INITIALIZED,
    DATABASE_WORKING, MAX_REPORTED_COLLECTIONS, NOT_CONNECTED,
};
use crate::dtos::DiagnosticsResponse;
use crate::startup::AppState;

/// Reports backend and store status. Store failures are folded into the
/// status strings, so this always answers 200.
#[tracing::instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mongo = &state.config.mongodb;

    let mut response = DiagnosticsResponse {
        backend: BACKEND_RUNNING.to_string(),
        database: DATABASE_NOT_INITIALIZED.to_string(),
        database_url: env_status(mongo.uri.is_some()),
        database_name: env_status(mongo.database.is_some()),
        connection_status: NOT_CONNECTED.to_string(),
        collections: Vec::new(),
    };

    if let Ok(store) = state.store() {
        response.connection_status = CONNECTED.to_string();

        match store.collection_names().await {
            Ok(names) => {
                response.collections = names.into_iter().take(MAX_REPORTED_COLLECTIONS).collect();
                response.database = DATABASE_WORKING.to_string();
            }
            Err(e) => {
                tracing::warn!(database = %store.database_name(), "Listing collections failed: {}", e);
                response.database = connected_with_error(&e.to_string());
            }
        }
    }

    Json(response)
}
