//! Gateway Contract Tests
//!
//! The persistence contract, exercised against the in-memory store:
//! - `create` returns a non-empty 24-hex-char identifier
//! - create-then-query round-trips field values exactly
//! - `query` never returns more than `limit` records
//! - an unconfigured gateway fails every operation with
//!   `StorageUnavailable`

use std::sync::Arc;

use cleaning_api::gateway::{Gateway, GatewayError, MemoryStore};
use cleaning_api::schema::{validate, EntityKind};
use serde_json::{json, Map, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn memory_gateway() -> (Arc<MemoryStore>, Gateway) {
    let store = Arc::new(MemoryStore::new());
    let gateway = Gateway::new(store.clone());
    (store, gateway)
}

fn valid_booking() -> Value {
    json!({
        "name": "Alice Smith",
        "email": "alice@example.com",
        "phone": "555-0100",
        "address": "1 Main St",
        "service_type": "deep clean",
        "date": "2025-06-01",
        "time": "09:00-11:00",
        "notes": "two dogs"
    })
}

// =============================================================================
// Create
// =============================================================================

/// Every create returns a distinct, well-formed identifier.
#[tokio::test]
async fn test_create_returns_hex_identifier() {
    let (_store, gateway) = memory_gateway();
    let document = validate(EntityKind::Booking, &valid_booking()).unwrap();

    let id = gateway
        .create("booking", document.into_fields())
        .await
        .unwrap();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

    let document = validate(EntityKind::Booking, &valid_booking()).unwrap();
    let second = gateway
        .create("booking", document.into_fields())
        .await
        .unwrap();
    assert_ne!(id, second);
}

/// A created booking can be queried back with identical field values.
#[tokio::test]
async fn test_booking_roundtrip_preserves_fields() {
    let (_store, gateway) = memory_gateway();
    let document = validate(EntityKind::Booking, &valid_booking()).unwrap();
    let expected = document.fields().clone();

    gateway
        .create("booking", document.into_fields())
        .await
        .unwrap();

    let mut filter = Map::new();
    filter.insert("email".to_string(), json!("alice@example.com"));
    let found = gateway.query("booking", &filter, 10).await.unwrap();

    assert_eq!(found.len(), 1);
    for (field, value) in &expected {
        assert_eq!(found[0][field], *value, "field {}", field);
    }
    // The stored document gained an identifier
    assert!(found[0]["_id"].is_string());
}

// =============================================================================
// Query
// =============================================================================

/// `limit` caps the result size even when more records exist.
#[tokio::test]
async fn test_query_respects_limit() {
    let (_store, gateway) = memory_gateway();
    for i in 0..5 {
        let doc = json!({"name": format!("Customer {}", i), "rating": 5, "comment": "great"});
        let document = validate(EntityKind::Testimonial, &doc).unwrap();
        gateway
            .create("testimonial", document.into_fields())
            .await
            .unwrap();
    }

    let found = gateway.query("testimonial", &Map::new(), 3).await.unwrap();
    assert_eq!(found.len(), 3);
}

/// A limit of 0 means zero records, never "unbounded".
#[tokio::test]
async fn test_query_limit_zero_returns_nothing() {
    let (_store, gateway) = memory_gateway();
    let document = validate(EntityKind::Booking, &valid_booking()).unwrap();
    gateway
        .create("booking", document.into_fields())
        .await
        .unwrap();

    let found = gateway.query("booking", &Map::new(), 0).await.unwrap();
    assert!(found.is_empty());
}

/// An empty filter matches every record.
#[tokio::test]
async fn test_empty_filter_matches_all() {
    let (_store, gateway) = memory_gateway();
    for _ in 0..2 {
        let document = validate(EntityKind::Booking, &valid_booking()).unwrap();
        gateway
            .create("booking", document.into_fields())
            .await
            .unwrap();
    }

    let found = gateway.query("booking", &Map::new(), 100).await.unwrap();
    assert_eq!(found.len(), 2);
}

/// Querying an empty collection yields an empty result, not an error.
#[tokio::test]
async fn test_query_empty_collection() {
    let (_store, gateway) = memory_gateway();
    let found = gateway.query("testimonial", &Map::new(), 10).await.unwrap();
    assert!(found.is_empty());
}

// =============================================================================
// Unavailability
// =============================================================================

/// Without a configured store, nothing reaches storage.
#[tokio::test]
async fn test_unavailable_gateway_fails_closed() {
    let gateway = Gateway::unavailable();

    let create = gateway.create("booking", Map::new()).await;
    assert!(matches!(create, Err(GatewayError::StorageUnavailable)));

    let query = gateway.query("booking", &Map::new(), 10).await;
    assert!(matches!(query, Err(GatewayError::StorageUnavailable)));
}

/// Validation failures keep documents out of storage entirely.
#[tokio::test]
async fn test_rejected_document_never_written() {
    let (store, gateway) = memory_gateway();

    let mut doc = valid_booking();
    doc.as_object_mut().unwrap().remove("phone");
    let result = validate(EntityKind::Booking, &doc);
    assert!(result.is_err());

    // The handler pipeline stops before the gateway; nothing to create.
    assert_eq!(store.count("booking"), 0);
    let found = gateway.query("booking", &Map::new(), 10).await.unwrap();
    assert!(found.is_empty());
}
