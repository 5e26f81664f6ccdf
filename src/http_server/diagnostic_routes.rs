//! Diagnostic and Schema-Introspection Routes
//!
//! `/test` reports storage reachability and configuration presence for
//! humans debugging a deployment; `/schema` feeds viewer tools the fixed
//! list of collection names.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::config::EnvPresence;
use crate::gateway::Gateway;
use crate::schema::EntityKind;

/// Collections listed by the diagnostic endpoint, at most.
const MAX_COLLECTIONS_LISTED: usize = 10;

/// Storage error text shown inline, at most.
const MAX_STORAGE_ERROR_CHARS: usize = 50;

// ==================
// Shared State
// ==================

/// State for the diagnostic handlers
pub struct DiagnosticState {
    pub gateway: Gateway,
    pub env: EnvPresence,
}

impl DiagnosticState {
    pub fn new(gateway: Gateway, env: EnvPresence) -> Self {
        Self { gateway, env }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct DiagnosticResponse {
    pub backend: String,
    pub storage: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub collections: Vec<&'static str>,
}

// ==================
// Diagnostic Routes
// ==================

/// Create the diagnostic routes
pub fn diagnostic_routes(state: Arc<DiagnosticState>) -> Router {
    Router::new()
        .route("/test", get(test_handler))
        .route("/schema", get(schema_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn test_handler(State(state): State<Arc<DiagnosticState>>) -> Json<DiagnosticResponse> {
    let mut response = DiagnosticResponse {
        backend: "running".to_string(),
        storage: "unavailable".to_string(),
        database_url: set_or_not(state.env.database_url_set),
        database_name: set_or_not(state.env.database_name_set),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if !state.gateway.is_available() {
        return Json(response);
    }

    match state.gateway.ping().await {
        Ok(()) => {
            response.connection_status = "connected".to_string();
        }
        Err(e) => {
            response.storage = format!("error: {}", clip(&e.to_string()));
            return Json(response);
        }
    }

    match state.gateway.collection_names().await {
        Ok(names) => {
            response.storage = "connected".to_string();
            response.collections = names.into_iter().take(MAX_COLLECTIONS_LISTED).collect();
        }
        Err(e) => {
            response.storage = format!("connected but error: {}", clip(&e.to_string()));
        }
    }

    Json(response)
}

async fn schema_handler() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        collections: EntityKind::ALL
            .iter()
            .map(EntityKind::collection_name)
            .collect(),
    })
}

fn set_or_not(present: bool) -> String {
    let text = if present { "set" } else { "not set" };
    text.to_string()
}

fn clip(message: &str) -> String {
    message.chars().take(MAX_STORAGE_ERROR_CHARS).collect()
}
