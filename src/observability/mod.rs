//! Observability subsystem
//!
//! Structured one-line JSON logging:
//! - One log line = one event
//! - Deterministic key ordering
//! - Errors to stderr, everything else to stdout
//! - Synchronous, no buffering

mod logger;

pub use logger::{Logger, Severity};
