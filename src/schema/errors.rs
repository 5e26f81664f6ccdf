//! Validation failure types.
//!
//! A failed validation reports every violated field, not just the first.
//! Violations carry enough structure for the HTTP layer to serialize a
//! per-field detail array.

use std::fmt;

use serde::Serialize;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field absent from the input
    Missing,
    /// Value present but of the wrong JSON type
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },
    /// Numeric value outside the inclusive range
    OutOfRange {
        min: Option<f64>,
        max: Option<f64>,
    },
    /// String present but not a well-formed email address
    MalformedEmail,
    /// Explicit null for a required field
    NullValue,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "missing"),
            ViolationKind::WrongType { expected, actual } => {
                write!(f, "expected {}, got {}", expected, actual)
            }
            ViolationKind::OutOfRange { min, max } => match (min, max) {
                (Some(min), Some(max)) => write!(f, "out of range [{}, {}]", min, max),
                (Some(min), None) => write!(f, "must be at least {}", min),
                (None, Some(max)) => write!(f, "must be at most {}", max),
                (None, None) => write!(f, "out of range"),
            },
            ViolationKind::MalformedEmail => write!(f, "malformed email address"),
            ViolationKind::NullValue => write!(f, "null value"),
        }
    }
}

/// One violated field with its reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Field name as it appears in the input
    pub field: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {}", self.field, self.kind)
    }
}

/// A rejected document: the entity it was validated against and every
/// field that violated its definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationFailure {
    /// Entity type name the input was validated against
    pub entity: &'static str,
    /// All violated fields, in field-table order
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn new(entity: &'static str, violations: Vec<FieldViolation>) -> Self {
        Self { entity, violations }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed for {}: ", self.entity)?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}
