//! cleaning-api - Backend for a cleaning services site
//!
//! Validated document intake (bookings, contact messages, testimonials)
//! persisted to MongoDB, plus liveness, diagnostic, and
//! schema-introspection endpoints.

pub mod config;
pub mod gateway;
pub mod http_server;
pub mod observability;
pub mod schema;
