//! Inventory HTTP Routes
//!
//! CRUD and search endpoints over the `inventory` table. Every handler runs
//! validate -> one storage round trip -> respond, and keeps no state between
//! requests.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::errors::{ApiError, ApiResult};
use crate::model::{Item, ItemId};
use crate::storage::Storage;
use crate::validation::{validate_id, validate_item, ValidationError};

// ==================
// Shared State
// ==================

/// Inventory state shared across handlers
pub struct InventoryState {
    pub storage: Storage,
}

impl InventoryState {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ==================
// Inventory Routes
// ==================

/// Create inventory routes
pub fn inventory_routes(state: Arc<InventoryState>) -> Router {
    Router::new()
        .route("/items", get(list_items_handler).post(add_item_handler))
        .route("/items/search", get(search_items_handler))
        .route(
            "/items/:id",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Parses a request body into a non-empty JSON object.
///
/// Empty bodies, malformed JSON, non-objects and `{}` all count as no data.
fn json_object(body: &[u8]) -> Option<Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Some(Value::Object(map)),
        _ => None,
    }
}

/// Resolves the `:id` segment. An undecodable segment is an invalid id.
fn path_id(path: Result<Path<String>, PathRejection>) -> ApiResult<ItemId> {
    let Path(raw_id) = path.map_err(|_| ValidationError::InvalidId)?;
    Ok(validate_id(&raw_id)?)
}

/// First `q` pair of the query string, trimmed, if non-empty.
///
/// Later `q` pairs are ignored.
fn search_term(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.trim())
        .filter(|term| !term.is_empty())
}

// ==================
// Handlers
// ==================

async fn list_items_handler(
    State(state): State<Arc<InventoryState>>,
) -> ApiResult<Json<Vec<Item>>> {
    let items = state
        .storage
        .with_connection(|conn| conn.fetch_all())
        .await
        .map_err(ApiError::storage("Failed to fetch items"))?;

    info!(count = items.len(), "Items retrieved successfully");
    Ok(Json(items))
}

async fn add_item_handler(
    State(state): State<Arc<InventoryState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let data = json_object(&body).ok_or(ApiError::NoData)?;
    let item = validate_item(&data)?;

    let name = item.name.clone();
    let id = state
        .storage
        .with_connection(move |conn| conn.insert(&item))
        .await
        .map_err(ApiError::storage("Database error occurred"))?;

    info!(id, name = %name, "Item added");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Item added successfully")),
    ))
}

async fn get_item_handler(
    State(state): State<Arc<InventoryState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Item>> {
    let id = path_id(path)?;

    let item = state
        .storage
        .with_connection(move |conn| conn.fetch_by_id(id))
        .await
        .map_err(ApiError::storage("Failed to fetch item"))?
        .ok_or(ApiError::NotFound)?;

    info!(id, "Item retrieved");
    Ok(Json(item))
}

/// Updates the quantity of an item.
///
/// The body must pass full item validation, `name` included, even though
/// only `quantity` is written. Updating an id with no row still succeeds.
async fn update_item_handler(
    State(state): State<Arc<InventoryState>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let id = path_id(path)?;

    let data = match json_object(&body) {
        Some(data) if data.get("quantity").is_some() => data,
        _ => return Err(ApiError::QuantityRequired),
    };
    let item = validate_item(&data)?;

    let quantity = item.quantity;
    state
        .storage
        .with_connection(move |conn| conn.update_quantity(id, quantity))
        .await
        .map_err(ApiError::storage("Database error occurred"))?;

    info!(id, quantity, "Item updated");
    Ok(Json(MessageResponse::new("Item updated successfully")))
}

/// Deletes an item. Deleting an id with no row still succeeds.
async fn delete_item_handler(
    State(state): State<Arc<InventoryState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = path_id(path)?;

    state
        .storage
        .with_connection(move |conn| conn.delete(id))
        .await
        .map_err(ApiError::storage("Database error occurred"))?;

    info!(id, "Item deleted");
    Ok(Json(MessageResponse::new("Item deleted successfully")))
}

async fn search_items_handler(
    State(state): State<Arc<InventoryState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let term = search_term(&pairs)
        .ok_or(ApiError::SearchQueryRequired)?
        .to_string();

    let search_term = term.clone();
    let items = state
        .storage
        .with_connection(move |conn| conn.search_by_name(&search_term))
        .await
        .map_err(ApiError::storage("Database error occurred"))?;

    info!(query = %term, count = items.len(), "Search performed");
    Ok(Json(items))
}
