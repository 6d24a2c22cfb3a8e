//! Inventory API Tests
//!
//! Drives the full router in-process against the in-memory connector:
//! - Status codes and bodies for every endpoint
//! - Validation runs before storage is touched
//! - Storage failures surface as generic 500s
//! - Every opened connection is closed

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use stockroom::http_server::{HttpServer, HttpServerConfig};
use stockroom::model::NewItem;
use stockroom::storage::{Connector, InventoryConnection, MemoryConnector, Storage};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (MemoryConnector, Router) {
    let memory = MemoryConnector::new();
    let server = HttpServer::new(HttpServerConfig::default(), Storage::new(memory.clone()));
    (memory, server.router())
}

fn seed(memory: &MemoryConnector, items: &[(&str, i64)]) -> Vec<i64> {
    let conn = memory.connect().unwrap();
    items
        .iter()
        .map(|(name, quantity)| conn.insert(&NewItem::new(*name, *quantity)).unwrap())
        .collect()
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn send_raw(
    router: &Router,
    method: &str,
    uri: &str,
    body: &'static str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// =============================================================================
// Status
// =============================================================================

#[tokio::test]
async fn test_status_route() {
    let (memory, router) = setup();

    let (status, body) = send(&router, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Inventory Management System API Running"}));
    assert_eq!(memory.opened(), 0);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (_memory, router) = setup();

    let (status, _) = send(&router, "GET", "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// List and Create
// =============================================================================

#[tokio::test]
async fn test_list_empty() {
    let (_memory, router) = setup();

    let (status, body) = send(&router, "GET", "/items", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// POST then GET returns the item with a fresh positive id.
#[tokio::test]
async fn test_create_then_list_round_trip() {
    let (memory, router) = setup();

    let (status, body) = send(
        &router,
        "POST",
        "/items",
        Some(json!({"name": "Test Item", "quantity": 10, "description": "This is a test item"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Item added successfully"}));

    let (status, body) = send(&router, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0]["id"].as_i64().unwrap() > 0);
    assert_eq!(items[0]["name"], "Test Item");
    assert_eq!(items[0]["quantity"], 10);
    assert_eq!(items[0]["description"], "This is a test item");

    assert_eq!(memory.opened(), 2);
    assert_eq!(memory.closed(), 2);
}

#[tokio::test]
async fn test_create_defaults_description() {
    let (memory, router) = setup();

    let body = json!({"name": "Bolt", "quantity": "4"});
    let (status, _) = send(&router, "POST", "/items", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    let rows = memory.snapshot();
    assert_eq!(rows[0].description, "");
    assert_eq!(rows[0].quantity, 4);
}

#[tokio::test]
async fn test_create_without_data() {
    let (memory, router) = setup();

    for raw in ["", "{}", "null", "{broken"] {
        let (status, body) = send_raw(&router, "POST", "/items", raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {:?}", raw);
        assert_eq!(body, json!({"error": "No data provided"}));
    }

    assert_eq!(memory.opened(), 0);
}

#[tokio::test]
async fn test_create_rejects_invalid_name() {
    let (memory, router) = setup();

    for name in [json!(""), json!("   "), json!(7), json!(null)] {
        let payload = json!({"name": name, "quantity": 1});
        let (status, body) = send(&router, "POST", "/items", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Name is required and must be a non-empty string"})
        );
    }

    assert_eq!(memory.opened(), 0);
    assert!(memory.snapshot().is_empty());
}

#[tokio::test]
async fn test_create_rejects_invalid_quantity() {
    let (memory, router) = setup();

    for quantity in [json!(0), json!(-5), json!("many"), json!(null)] {
        let (status, body) = send(
            &router,
            "POST",
            "/items",
            Some(json!({"name": "Widget", "quantity": quantity})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Quantity must be a positive number"}));
    }

    assert_eq!(memory.opened(), 0);
}

// =============================================================================
// Fetch One
// =============================================================================

#[tokio::test]
async fn test_get_item() {
    let (memory, router) = setup();
    let ids = seed(&memory, &[("Widget A", 3)]);

    let (status, body) = send(&router, "GET", &format!("/items/{}", ids[0]), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": ids[0], "name": "Widget A", "quantity": 3, "description": ""})
    );
}

#[tokio::test]
async fn test_get_missing_item() {
    let (_memory, router) = setup();

    let (status, body) = send(&router, "GET", "/items/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Item not found"}));
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_quantity_only() {
    let (memory, router) = setup();
    let ids = seed(&memory, &[("Widget A", 3)]);

    let (status, body) = send(
        &router,
        "PUT",
        &format!("/items/{}", ids[0]),
        Some(json!({"name": "Renamed", "quantity": 20, "description": "changed"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Item updated successfully"}));

    let rows = memory.snapshot();
    assert_eq!(rows[0].quantity, 20);
    assert_eq!(rows[0].name, "Widget A");
    assert_eq!(rows[0].description, "");
}

/// Update still runs full item validation, so `name` is required.
#[tokio::test]
async fn test_update_requires_name() {
    let (memory, router) = setup();
    let ids = seed(&memory, &[("Widget A", 3)]);
    let opened_before = memory.opened();

    let uri = format!("/items/{}", ids[0]);
    let (status, body) = send(&router, "PUT", &uri, Some(json!({"quantity": 5}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Name is required and must be a non-empty string"})
    );
    assert_eq!(memory.snapshot()[0].quantity, 3);
    assert_eq!(memory.opened(), opened_before);
}

#[tokio::test]
async fn test_update_requires_quantity() {
    let (_memory, router) = setup();

    let (status, body) = send(&router, "PUT", "/items/1", Some(json!({"name": "Widget"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Quantity is required"}));

    let (status, body) = send(&router, "PUT", "/items/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Quantity is required"}));
}

#[tokio::test]
async fn test_update_null_quantity_is_invalid() {
    let (_memory, router) = setup();

    let (status, body) = send(
        &router,
        "PUT",
        "/items/1",
        Some(json!({"name": "Widget", "quantity": null})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Quantity must be a positive number"}));
}

#[tokio::test]
async fn test_update_missing_row_still_succeeds() {
    let (memory, router) = setup();

    let (status, _) = send(
        &router,
        "PUT",
        "/items/999",
        Some(json!({"name": "Ghost", "quantity": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(memory.snapshot().is_empty());
}

#[tokio::test]
async fn test_update_id_checked_before_body() {
    let (_memory, router) = setup();

    let (status, body) = send(&router, "PUT", "/items/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid ID format"}));
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_item() {
    let (memory, router) = setup();
    let ids = seed(&memory, &[("Widget A", 3), ("Gadget B", 1)]);

    let (status, body) = send(&router, "DELETE", &format!("/items/{}", ids[0]), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Item deleted successfully"}));
    let rows = memory.snapshot();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Gadget B");
}

/// Deleting an id with no row is not an error.
#[tokio::test]
async fn test_delete_is_idempotent() {
    let (_memory, router) = setup();

    for _ in 0..2 {
        let (status, body) = send(&router, "DELETE", "/items/12345", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Item deleted successfully"}));
    }
}

#[tokio::test]
async fn test_invalid_ids_rejected() {
    let (memory, router) = setup();

    for id in ["0", "-1", "abc", "1.5"] {
        for method in ["GET", "DELETE"] {
            let (status, body) = send(&router, method, &format!("/items/{}", id), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{} /items/{}", method, id);
            assert_eq!(body, json!({"error": "Invalid ID format"}));
        }
    }

    assert_eq!(memory.opened(), 0);
}

/// A segment that is not UTF-8 once decoded is still a JSON 400.
#[tokio::test]
async fn test_undecodable_id_rejected_as_json() {
    let (memory, router) = setup();

    for method in ["GET", "PUT", "DELETE"] {
        let request = Request::builder()
            .method(method)
            .uri("/items/%FF")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "Widget", "quantity": 1}"#))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{} /items/%FF", method);
        assert_eq!(
            response.headers()["content-type"],
            "application/json",
            "{} /items/%FF",
            method
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Invalid ID format"}));
    }

    assert_eq!(memory.opened(), 0);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_by_name() {
    let (memory, router) = setup();
    seed(&memory, &[("Widget A", 3), ("Gadget B", 1)]);

    let (status, body) = send(&router, "GET", "/items/search?q=Widget", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Widget A");
}

#[tokio::test]
async fn test_search_term_is_trimmed() {
    let (memory, router) = setup();
    seed(&memory, &[("Widget A", 3), ("Gadget B", 1)]);

    let (status, body) = send(&router, "GET", "/items/search?q=%20Gadget%20", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_requires_query() {
    let (memory, router) = setup();

    for uri in ["/items/search?q=", "/items/search", "/items/search?q=%20%20"] {
        let (status, body) = send(&router, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert_eq!(body, json!({"error": "Search query is required"}));
    }

    assert_eq!(memory.opened(), 0);
}

/// Only the first `q` counts when the parameter repeats.
#[tokio::test]
async fn test_search_uses_first_query_parameter() {
    let (memory, router) = setup();
    seed(&memory, &[("Widget A", 3), ("Gadget B", 1)]);

    let (status, body) = send(&router, "GET", "/items/search?q=Widget&q=Gadget", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Widget A");

    let (status, body) = send(&router, "GET", "/items/search?q=&q=Gadget", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Search query is required"}));
}

// =============================================================================
// Storage Failures
// =============================================================================

async fn assert_storage_failures(memory: &MemoryConnector, router: &Router) {
    let valid = json!({"name": "Widget", "quantity": 1});
    let cases = [
        ("GET", "/items", None, "Failed to fetch items"),
        ("POST", "/items", Some(valid.clone()), "Database error occurred"),
        ("GET", "/items/1", None, "Failed to fetch item"),
        ("PUT", "/items/1", Some(valid), "Database error occurred"),
        ("DELETE", "/items/1", None, "Database error occurred"),
        ("GET", "/items/search?q=Widget", None, "Database error occurred"),
    ];

    for (method, uri, body, message) in cases {
        let (status, response) = send(router, method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        assert_eq!(response, json!({"error": message}), "{} {}", method, uri);
    }

    assert_eq!(memory.opened(), memory.closed());
}

#[tokio::test]
async fn test_storage_unavailable() {
    let (memory, router) = setup();
    memory.fail_connections(true);

    assert_storage_failures(&memory, &router).await;
    assert_eq!(memory.opened(), 0);
}

#[tokio::test]
async fn test_statement_failures_release_connections() {
    let (memory, router) = setup();
    memory.fail_queries(true);

    assert_storage_failures(&memory, &router).await;
    assert_eq!(memory.opened(), 6);
    assert_eq!(memory.closed(), 6);
}

/// A failed request does not affect the next one.
#[tokio::test]
async fn test_recovers_after_storage_failure() {
    let (memory, router) = setup();

    memory.fail_connections(true);
    let (status, _) = send(&router, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    memory.fail_connections(false);
    let (status, body) = send(&router, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
