//! Schema and validation subsystem
//!
//! Field tables for the five record types, plus the validator that turns
//! raw JSON input into a clean document or a per-field failure report.
//!
//! # Design Principles
//!
//! - Validation happens before any storage I/O
//! - Every violated field is reported, not just the first
//! - Unknown extra fields are dropped, not rejected
//! - Defaults are applied for absent optional fields
//! - Numeric range checks are inclusive
//! - Deterministic: no I/O, no side effects

mod errors;
mod registry;
mod types;
mod validator;

pub use errors::{FieldViolation, ValidationFailure, ViolationKind};
pub use registry::EntityKind;
pub use types::{FieldDef, FieldType, NumericRange, Schema};
pub use validator::{validate, ValidatedDocument};
