//! # Inventory HTTP Server Module
//!
//! Axum server exposing the inventory API.
//!
//! # Endpoints
//!
//! - `/` - Service status
//! - `/items` - List and create items
//! - `/items/search` - Name substring search
//! - `/items/:id` - Fetch, update quantity, delete

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod inventory_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use inventory_routes::{InventoryState, MessageResponse};
pub use server::HttpServer;
