//! MongoDB-backed document store.
//!
//! The driver connects lazily; reachability is observed per operation.
//! Inserts are stamped with a `created_at` UTC timestamp and return the
//! driver-generated ObjectId as a 24-hex-char string.

use async_trait::async_trait;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::{Client, Database};
use serde_json::{Map, Value};

use super::errors::{GatewayError, GatewayResult};
use super::store::DocumentStore;

/// Document store over a MongoDB database.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Parse the connection string and select the database.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` when the connection string cannot be
    /// parsed; no connection is attempted here.
    pub async fn connect(url: &str, database_name: &str) -> GatewayResult<Self> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|_| GatewayError::StorageUnavailable)?;
        Ok(Self {
            database: client.database(database_name),
        })
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Map<String, Value>,
    ) -> GatewayResult<String> {
        document.insert(
            "created_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        let doc = bson::to_document(&document)
            .map_err(|e| GatewayError::WriteFailure(e.to_string()))?;

        let result = self
            .collection(collection)
            .insert_one(doc)
            .await
            .map_err(|e| GatewayError::WriteFailure(e.to_string()))?;

        Ok(inserted_id_to_string(result.inserted_id))
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        limit: usize,
    ) -> GatewayResult<Vec<Value>> {
        // The driver treats a limit of 0 as "no limit".
        if limit == 0 {
            return Ok(Vec::new());
        }
        let filter = bson::to_document(filter)
            .map_err(|e| GatewayError::ReadFailure(e.to_string()))?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut cursor = self
            .collection(collection)
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| GatewayError::ReadFailure(e.to_string()))?;

        let mut documents = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| GatewayError::ReadFailure(e.to_string()))?
        {
            documents.push(document_to_json(doc)?);
        }
        Ok(documents)
    }

    async fn collection_names(&self) -> GatewayResult<Vec<String>> {
        self.database
            .list_collection_names()
            .await
            .map_err(|e| GatewayError::ReadFailure(e.to_string()))
    }

    async fn ping(&self) -> GatewayResult<()> {
        self.database
            .run_command(doc! {"ping": 1})
            .await
            .map(|_| ())
            .map_err(|e| GatewayError::ReadFailure(e.to_string()))
    }
}

/// Renders a driver-generated identifier as a plain string.
///
/// `Bson`'s `Display` wraps strings in quotes, so the string case is
/// unpacked explicitly.
fn inserted_id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

/// Converts a stored document to JSON with `_id` stringified.
fn document_to_json(mut doc: Document) -> GatewayResult<Value> {
    if let Ok(id) = doc.get_object_id("_id") {
        let hex = id.to_hex();
        doc.insert("_id", Bson::String(hex));
    }
    serde_json::to_value(&doc).map_err(|e| GatewayError::ReadFailure(e.to_string()))
}
