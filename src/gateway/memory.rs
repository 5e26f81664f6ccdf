//! In-memory document store.
//!
//! Mirrors just enough driver behavior to exercise the gateway contract
//! in tests: generated ObjectIds, equality filter matching, insertion
//! order preserved per collection.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::{Map, Value};

use super::errors::{GatewayError, GatewayResult};
use super::store::DocumentStore;

/// Document store backed by per-collection vectors.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Map<String, Value>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .map(|collections| {
                collections
                    .get(collection)
                    .map(Vec::len)
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Map<String, Value>,
    ) -> GatewayResult<String> {
        let id = ObjectId::new().to_hex();
        document.insert("_id".to_string(), Value::String(id.clone()));

        let mut collections = self
            .collections
            .lock()
            .map_err(|_| GatewayError::WriteFailure("store lock poisoned".to_string()))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        limit: usize,
    ) -> GatewayResult<Vec<Value>> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| GatewayError::ReadFailure("store lock poisoned".to_string()))?;

        let documents = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches_filter(document, filter))
                    .take(limit)
                    .map(|document| Value::Object(document.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    async fn collection_names(&self) -> GatewayResult<Vec<String>> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| GatewayError::ReadFailure("store lock poisoned".to_string()))?;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> GatewayResult<()> {
        Ok(())
    }
}

/// Equality match on every filter field.
fn matches_filter(document: &Map<String, Value>, filter: &Map<String, Value>) -> bool {
    filter
        .iter()
        .all(|(field, expected)| document.get(field) == Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_hex_object_id() {
        let store = MemoryStore::new();
        let id = store
            .insert("booking", fields(json!({"name": "Jo"})))
            .await
            .unwrap();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_find_preserves_insertion_order() {
        let store = MemoryStore::new();
        for i in 0..3 {
            store
                .insert("testimonial", fields(json!({"rating": i})))
                .await
                .unwrap();
        }

        let found = store.find("testimonial", &Map::new(), 10).await.unwrap();
        let ratings: Vec<_> = found.iter().map(|d| d["rating"].clone()).collect();
        assert_eq!(ratings, vec![json!(0), json!(1), json!(2)]);
    }

    #[tokio::test]
    async fn test_find_applies_equality_filter() {
        let store = MemoryStore::new();
        store
            .insert("booking", fields(json!({"name": "Jo", "city": "Leeds"})))
            .await
            .unwrap();
        store
            .insert("booking", fields(json!({"name": "Sam", "city": "York"})))
            .await
            .unwrap();

        let filter = fields(json!({"city": "York"}));
        let found = store.find("booking", &filter, 10).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["name"], "Sam");
    }

    #[tokio::test]
    async fn test_find_respects_limit() {
        let store = MemoryStore::new();
        for _ in 0..5 {
            store
                .insert("testimonial", fields(json!({"rating": 5})))
                .await
                .unwrap();
        }

        let found = store.find("testimonial", &Map::new(), 3).await.unwrap();
        assert_eq!(found.len(), 3);
    }

    #[tokio::test]
    async fn test_find_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        let found = store.find("nothing", &Map::new(), 10).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_collection_names_sorted() {
        let store = MemoryStore::new();
        store.insert("zebra", Map::new()).await.unwrap();
        store.insert("apple", Map::new()).await.unwrap();

        let names = store.collection_names().await.unwrap();
        assert_eq!(names, vec!["apple", "zebra"]);
    }

    #[tokio::test]
    async fn test_count() {
        let store = MemoryStore::new();
        assert_eq!(store.count("booking"), 0);
        store.insert("booking", Map::new()).await.unwrap();
        assert_eq!(store.count("booking"), 1);
    }
}
