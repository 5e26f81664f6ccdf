//! Storage seam: the `DocumentStore` trait and the `Gateway` handle.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::AppConfig;

use super::errors::{GatewayError, GatewayResult};
use super::mongo::MongoStore;

/// Backend-agnostic document store operations.
///
/// Implementations return identifiers as 24-hex-char strings and
/// stringify `_id` on documents they return.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document, returning its generated identifier.
    async fn insert(
        &self,
        collection: &str,
        document: Map<String, Value>,
    ) -> GatewayResult<String>;

    /// Return up to `limit` documents matching `filter` (empty filter =
    /// all), in storage-native order.
    async fn find(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        limit: usize,
    ) -> GatewayResult<Vec<Value>>;

    /// Names of existing collections.
    async fn collection_names(&self) -> GatewayResult<Vec<String>>;

    /// Round-trip reachability check.
    async fn ping(&self) -> GatewayResult<()>;
}

/// Dependency-injected storage handle shared by all request handlers.
///
/// Cheap to clone; the store behind it is reference-counted.
#[derive(Clone)]
pub struct Gateway {
    store: Option<Arc<dyn DocumentStore>>,
}

impl Gateway {
    /// Gateway over a connected store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Gateway with no backing store; every operation reports
    /// `StorageUnavailable`.
    pub fn unavailable() -> Self {
        Self { store: None }
    }

    /// Build a gateway from runtime configuration. No `DATABASE_URL`
    /// yields an unavailable gateway rather than an error.
    pub async fn from_config(config: &AppConfig) -> GatewayResult<Self> {
        match &config.database_url {
            Some(url) => {
                let store = MongoStore::connect(url, config.database_name()).await?;
                Ok(Self::new(Arc::new(store)))
            }
            None => Ok(Self::unavailable()),
        }
    }

    /// Whether a store was configured at startup.
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> GatewayResult<&Arc<dyn DocumentStore>> {
        self.store.as_ref().ok_or(GatewayError::StorageUnavailable)
    }

    /// Persist one validated record into `collection`; returns the
    /// generated identifier.
    pub async fn create(
        &self,
        collection: &str,
        document: Map<String, Value>,
    ) -> GatewayResult<String> {
        self.store()?.insert(collection, document).await
    }

    /// Return up to `limit` records from `collection` matching `filter`.
    pub async fn query(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        limit: usize,
    ) -> GatewayResult<Vec<Value>> {
        self.store()?.find(collection, filter, limit).await
    }

    /// Names of existing collections, for the diagnostic endpoint.
    pub async fn collection_names(&self) -> GatewayResult<Vec<String>> {
        self.store()?.collection_names().await
    }

    /// Storage reachability check, for the diagnostic endpoint.
    pub async fn ping(&self) -> GatewayResult<()> {
        self.store()?.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MemoryStore;

    #[tokio::test]
    async fn test_unavailable_gateway_rejects_every_operation() {
        let gateway = Gateway::unavailable();
        assert!(!gateway.is_available());

        let create = gateway.create("booking", Map::new()).await;
        assert!(matches!(create, Err(GatewayError::StorageUnavailable)));

        let query = gateway.query("booking", &Map::new(), 10).await;
        assert!(matches!(query, Err(GatewayError::StorageUnavailable)));

        let names = gateway.collection_names().await;
        assert!(matches!(names, Err(GatewayError::StorageUnavailable)));

        let ping = gateway.ping().await;
        assert!(matches!(ping, Err(GatewayError::StorageUnavailable)));
    }

    #[tokio::test]
    async fn test_from_config_without_url_is_unavailable() {
        let config = AppConfig::default();
        let gateway = Gateway::from_config(&config).await.unwrap();
        assert!(!gateway.is_available());
    }

    #[tokio::test]
    async fn test_connected_gateway_delegates() {
        let gateway = Gateway::new(Arc::new(MemoryStore::new()));
        assert!(gateway.is_available());
        assert!(gateway.ping().await.is_ok());

        let mut document = Map::new();
        document.insert("name".to_string(), "Jo".into());
        let id = gateway.create("booking", document).await.unwrap();
        assert_eq!(id.len(), 24);

        let found = gateway.query("booking", &Map::new(), 10).await.unwrap();
        assert_eq!(found.len(), 1);
    }
}
