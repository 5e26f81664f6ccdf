//! Public API Routes
//!
//! Intake endpoints (bookings, contact messages), the testimonial
//! listing, and the greeting pair. Handlers validate first; storage is
//! only reached with a clean document.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::gateway::Gateway;
use crate::observability::Logger;
use crate::schema::{validate, EntityKind};

use super::errors::ApiResult;

/// Default number of testimonials returned when no limit is given.
const DEFAULT_TESTIMONIAL_LIMIT: usize = 6;

// ==================
// Shared State
// ==================

/// State shared across API handlers
pub struct ApiState {
    pub gateway: Gateway,
}

impl ApiState {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct TestimonialsResponse {
    pub items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct TestimonialsQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_TESTIMONIAL_LIMIT
}

// ==================
// API Routes
// ==================

/// Create the public API routes
pub fn api_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/hello", get(hello_handler))
        .route("/api/bookings", post(create_booking_handler))
        .route("/api/testimonials", get(list_testimonials_handler))
        .route("/api/contact", post(contact_message_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Cleaning Services Backend is running".to_string(),
    })
}

async fn hello_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}

async fn create_booking_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<CreatedResponse>> {
    create_record(&state, EntityKind::Booking, &payload).await
}

async fn contact_message_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<CreatedResponse>> {
    create_record(&state, EntityKind::ContactMessage, &payload).await
}

async fn list_testimonials_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<TestimonialsQuery>,
) -> ApiResult<Json<TestimonialsResponse>> {
    let items = state
        .gateway
        .query(
            EntityKind::Testimonial.collection_name(),
            &Map::new(),
            query.limit,
        )
        .await?;
    Ok(Json(TestimonialsResponse { items }))
}

/// Validate-then-persist pipeline shared by the intake endpoints.
async fn create_record(
    state: &ApiState,
    kind: EntityKind,
    payload: &Value,
) -> ApiResult<Json<CreatedResponse>> {
    let document = validate(kind, payload)?;
    let collection = document.collection_name();

    let id = match state.gateway.create(collection, document.into_fields()).await {
        Ok(id) => id,
        Err(e) => {
            Logger::error(
                "STORAGE_WRITE_FAILED",
                &[("collection", collection), ("error", &e.to_string())],
            );
            return Err(e.into());
        }
    };

    Logger::info("RECORD_CREATED", &[("collection", collection), ("id", &id)]);
    Ok(Json(CreatedResponse { success: true, id }))
}
