use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use mongodb::bson::{self, doc, Document};
use service_core::error::AppError;

use crate::dtos::{
    CreateMenuItemRequest, CreateMenuItemResponse, MenuListParams, SeedResponse, SeedStatus,
};
use crate::models::{MenuItem, MENU_ITEM_COLLECTION};
use crate::services::{record_menu_items_created, record_seed};
use crate::startup::AppState;
use crate::utils::{ValidatedJson, ValidatedQuery};

/// Exact-match filter from the optional list parameters. An empty category
/// is treated as absent.
pub fn build_filter(params: &MenuListParams) -> Document {
    let mut filter = doc! {};

    if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
        filter.insert("category", category);
    }

    if let Some(featured) = params.featured {
        filter.insert("is_featured", featured);
    }

    filter
}

#[tracing::instrument(skip(state))]
pub async fn list_menu(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<MenuListParams>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let store = state.store()?;

    let filter = build_filter(&params);
    let records = store
        .get_documents(MENU_ITEM_COLLECTION, filter, Some(i64::from(params.limit)))
        .await?;

    let items = records
        .into_iter()
        .map(|mut record| {
            record.remove("_id");
            bson::from_document::<MenuItem>(record)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::error!("Stored menu item does not match the menu item shape: {}", e);
            AppError::from(e)
        })?;

    tracing::debug!(count = items.len(), "Listed menu items");

    Ok(Json(items))
}

#[tracing::instrument(skip(state, request), fields(name = %request.name))]
pub async fn create_menu_item(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMenuItemRequest>,
) -> Result<(StatusCode, Json<CreateMenuItemResponse>), AppError> {
    let store = state.store()?;

    let record = bson::to_document(&MenuItem::from(request))?;
    let id = store.create_document(MENU_ITEM_COLLECTION, record).await?;

    record_menu_items_created(1);
    tracing::info!(menu_item_id = %id, "Menu item created");

    Ok((StatusCode::CREATED, Json(CreateMenuItemResponse { id })))
}

/// Inserts the sample menu when the collection is empty. The count check and
/// the inserts are separate store calls, so concurrent first calls may both
/// seed.
#[tracing::instrument(skip(state))]
pub async fn seed_menu(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let store = state.store()?;

    let existing = store
        .count_documents(MENU_ITEM_COLLECTION, doc! {})
        .await?;
    if existing > 0 {
        tracing::info!(count = existing, "Menu already seeded");
        record_seed(SeedStatus::Exists.as_str());
        return Ok(Json(SeedResponse {
            status: SeedStatus::Exists,
            count: existing,
        }));
    }

    let samples = MenuItem::samples();
    for sample in &samples {
        let record = bson::to_document(sample)?;
        store.create_document(MENU_ITEM_COLLECTION, record).await?;
    }

    let count = samples.len() as u64;
    record_menu_items_created(count);
    record_seed(SeedStatus::Seeded.as_str());
    tracing::info!(count, "Seeded menu");

    Ok(Json(SeedResponse {
        status: SeedStatus::Seeded,
        count,
    }))
}
