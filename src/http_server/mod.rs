//! # HTTP Server Module
//!
//! Axum server combining the public API, diagnostic, and
//! schema-introspection routers.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness message
//! - `GET /api/hello` - Static greeting
//! - `POST /api/bookings` - Validated booking intake
//! - `GET /api/testimonials` - Testimonial listing with a limit
//! - `POST /api/contact` - Validated contact-message intake
//! - `GET /test` - Storage diagnostic
//! - `GET /schema` - Collection names

pub mod api_routes;
pub mod config;
pub mod diagnostic_routes;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
