//! Document validator.
//!
//! Turns raw JSON input into a clean, default-filled document or a failure
//! report listing every violated field.
//!
//! Semantics:
//! - All required fields must be present and non-null
//! - Field types must match the field table exactly (float accepts ints)
//! - Numeric range checks are inclusive
//! - Email fields must match standard address syntax
//! - Unknown extra fields are silently dropped
//! - Explicit null on an optional field without a default means "no
//!   value" and is dropped; null on a field that carries a default is a
//!   violation (the field is not nullable, it is merely omittable)
//!
//! The validator performs no I/O and does not mutate its input.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::errors::{FieldViolation, ValidationFailure, ViolationKind};
use super::registry::EntityKind;
use super::types::{FieldDef, FieldType};

/// A record that passed validation: the cleaned, default-filled field map.
///
/// Immutable once produced; the only way out is `into_fields` on the way
/// into storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDocument {
    kind: EntityKind,
    fields: Map<String, Value>,
}

impl ValidatedDocument {
    /// The entity type this document was validated against
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Storage collection for this document
    pub fn collection_name(&self) -> &'static str {
        self.kind.collection_name()
    }

    /// The cleaned field map
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the document, yielding its field map for insertion
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Local part, one '@', domain with at least one dot; no whitespace.
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Validates raw input against an entity's field table.
///
/// # Errors
///
/// Returns a `ValidationFailure` enumerating every violated field when the
/// input is not an object, a required field is missing or null, a value has
/// the wrong type, a number falls outside its range, or an email is
/// malformed.
pub fn validate(kind: EntityKind, raw: &Value) -> Result<ValidatedDocument, ValidationFailure> {
    let obj = match raw.as_object() {
        Some(obj) => obj,
        None => {
            return Err(ValidationFailure::new(
                kind.type_name(),
                vec![FieldViolation::new(
                    "$root",
                    ViolationKind::WrongType {
                        expected: "object",
                        actual: json_type_name(raw),
                    },
                )],
            ));
        }
    };

    let schema = kind.schema();
    let mut clean = Map::new();
    let mut violations = Vec::new();

    for (name, def) in schema.fields() {
        match obj.get(name) {
            Some(value) if !value.is_null() => match check_value(value, def) {
                Ok(value) => {
                    clean.insert(name.to_string(), value);
                }
                Err(violation) => violations.push(FieldViolation::new(name, violation)),
            },
            Some(_) => {
                // A defaulted field may be omitted but never nulled.
                if def.required || def.default.is_some() {
                    violations.push(FieldViolation::new(name, ViolationKind::NullValue));
                }
            }
            None => {
                if def.required {
                    violations.push(FieldViolation::new(name, ViolationKind::Missing));
                } else if let Some(default) = &def.default {
                    clean.insert(name.to_string(), default.clone());
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(ValidatedDocument { kind, fields: clean })
    } else {
        Err(ValidationFailure::new(kind.type_name(), violations))
    }
}

/// Checks one value against its field definition, returning the value to
/// store on success.
fn check_value(value: &Value, def: &FieldDef) -> Result<Value, ViolationKind> {
    match def.field_type {
        FieldType::String => {
            if !value.is_string() {
                return Err(wrong_type("string", value));
            }
        }
        FieldType::Email => {
            let text = value.as_str().ok_or_else(|| wrong_type("string", value))?;
            if !email_pattern().is_match(text) {
                return Err(ViolationKind::MalformedEmail);
            }
        }
        FieldType::Int => {
            // Exact match: a float is not an int. Integers above
            // i64::MAX are still ints and fall through to the range
            // check rather than a type error.
            let number = value
                .as_i64()
                .map(|n| n as f64)
                .or_else(|| value.as_u64().map(|n| n as f64))
                .ok_or_else(|| wrong_type("int", value))?;
            check_range(number, def)?;
        }
        FieldType::Float => {
            // Integer JSON numbers are acceptable floats
            let number = value
                .as_f64()
                .ok_or_else(|| wrong_type("float", value))?;
            check_range(number, def)?;
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                return Err(wrong_type("bool", value));
            }
        }
    }
    Ok(value.clone())
}

fn check_range(number: f64, def: &FieldDef) -> Result<(), ViolationKind> {
    if let Some(range) = def.range {
        if !range.contains(number) {
            return Err(ViolationKind::OutOfRange {
                min: range.min,
                max: range.max,
            });
        }
    }
    Ok(())
}

fn wrong_type(expected: &'static str, actual: &Value) -> ViolationKind {
    ViolationKind::WrongType {
        expected,
        actual: json_type_name(actual),
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
