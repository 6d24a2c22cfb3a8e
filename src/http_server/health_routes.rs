//! Service status route

use axum::{routing::get, Json, Router};
use tracing::info;

use super::inventory_routes::MessageResponse;

pub const STATUS_MESSAGE: &str = "Inventory Management System API Running";

/// Status route at `/`
pub fn health_routes() -> Router {
    Router::new().route("/", get(status_handler))
}

async fn status_handler() -> Json<MessageResponse> {
    info!("Health check endpoint hit");
    Json(MessageResponse::new(STATUS_MESSAGE))
}
