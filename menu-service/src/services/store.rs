use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime as BsonDateTime, Document},
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::MENU_ITEM_COLLECTION;

/// Generic access to named collections of documents.
///
/// Filters are exact-match: every key must be present in a record with an
/// equal value, and an empty filter matches everything. A `limit` of `None`
/// or `Some(0)` means no cap.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `record` and returns the identifier assigned by the store.
    async fn create_document(&self, collection: &str, record: Document)
        -> Result<String, AppError>;

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError>;

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64, AppError>;

    async fn collection_names(&self) -> Result<Vec<String>, AppError>;

    fn database_name(&self) -> &str;

    async fn ping(&self) -> Result<(), AppError>;
}

fn stamp_timestamps(record: &mut Document) {
    let now = BsonDateTime::now();
    record.insert("created_at", now);
    record.insert("updated_at", now);
}

fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    /// Builds the client. The driver connects lazily, so an unreachable
    /// server only surfaces on the first operation.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for menu-service");

        let menu_items = self.collection(MENU_ITEM_COLLECTION);

        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1 })
            .options(
                IndexOptions::builder()
                    .name("category_idx".to_string())
                    .build(),
            )
            .build();

        menu_items
            .create_index(category_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create category index: {}", e);
                AppError::from(e)
            })?;

        let featured_index = IndexModel::builder()
            .keys(doc! { "is_featured": 1 })
            .options(
                IndexOptions::builder()
                    .name("is_featured_idx".to_string())
                    .build(),
            )
            .build();

        menu_items
            .create_index(featured_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create is_featured index: {}", e);
                AppError::from(e)
            })?;

        tracing::info!("Created indexes on menuitem.(category, is_featured)");
        Ok(())
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(
        &self,
        collection: &str,
        mut record: Document,
    ) -> Result<String, AppError> {
        stamp_timestamps(&mut record);

        let result = self
            .collection(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;

        Ok(id_to_string(&result.inserted_id))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        let mut options = FindOptions::default();
        options.limit = limit.filter(|l| *l > 0);

        let cursor = self
            .collection(collection)
            .find(filter, options)
            .await
            .map_err(AppError::from)?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(AppError::from)?;
        Ok(documents)
    }

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64, AppError> {
        self.collection(collection)
            .count_documents(filter, None)
            .await
            .map_err(AppError::from)
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }

    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}

/// In-memory store with the same filter and limit semantics as MongoDB.
/// Can be switched into a failing mode to exercise error paths.
#[derive(Default)]
pub struct MockDocumentStore {
    database: String,
    collections: Mutex<HashMap<String, Vec<Document>>>,
    failure: Option<String>,
}

impl MockDocumentStore {
    pub fn new(database: &str) -> Self {
        Self {
            database: database.to_string(),
            ..Default::default()
        }
    }

    /// Every operation fails with `message`.
    pub fn failing(database: &str, message: &str) -> Self {
        Self {
            database: database.to_string(),
            collections: Mutex::default(),
            failure: Some(message.to_string()),
        }
    }

    fn check_failure(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(anyhow::anyhow!(message.clone()))),
            None => Ok(()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<Document>>>, AppError> {
        self.collections
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Mock store mutex poisoned: {}", e)))
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| record.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        mut record: Document,
    ) -> Result<String, AppError> {
        self.check_failure()?;

        let id = ObjectId::new();
        record.insert("_id", id);
        stamp_timestamps(&mut record);

        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(id.to_hex())
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        self.check_failure()?;

        let cap = match limit {
            Some(l) if l > 0 => l as usize,
            _ => usize::MAX,
        };

        let collections = self.lock()?;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| matches(r, &filter))
                    .take(cap)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64, AppError> {
        self.check_failure()?;

        let collections = self.lock()?;
        Ok(collections
            .get(collection)
            .map(|records| records.iter().filter(|r| matches(r, &filter)).count() as u64)
            .unwrap_or(0))
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.check_failure()?;

        let mut names: Vec<String> = self.lock()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn database_name(&self) -> &str {
        &self.database
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_failure()
    }
}
