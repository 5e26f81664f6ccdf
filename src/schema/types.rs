//! Field type and field table definitions
//!
//! Supported types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - float: 64-bit floating point (accepts integer JSON numbers)
//! - bool: Boolean
//! - email: string constrained to standard address syntax

use serde_json::Value;

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
    /// String conforming to standard email address syntax
    Email,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Email => "email",
        }
    }
}

/// Inclusive numeric range constraint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    /// Lower bound, inclusive
    pub min: Option<f64>,
    /// Upper bound, inclusive
    pub max: Option<f64>,
}

impl NumericRange {
    /// Bounded on both ends
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Bounded below only
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Returns true when the value lies within the range
    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}

/// Definition of one field in an entity's field table
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
    /// Inclusive numeric range, for int and float fields
    pub range: Option<NumericRange>,
    /// Value used when an optional field is absent
    pub default: Option<Value>,
}

impl FieldDef {
    fn new(field_type: FieldType, required: bool) -> Self {
        Self {
            field_type,
            required,
            range: None,
            default: None,
        }
    }

    /// Create a required string field
    pub fn required_string() -> Self {
        Self::new(FieldType::String, true)
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self::new(FieldType::String, false)
    }

    /// Create a required email field
    pub fn required_email() -> Self {
        Self::new(FieldType::Email, true)
    }

    /// Create a required int field
    pub fn required_int() -> Self {
        Self::new(FieldType::Int, true)
    }

    /// Create an optional int field
    pub fn optional_int() -> Self {
        Self::new(FieldType::Int, false)
    }

    /// Create a required float field
    pub fn required_float() -> Self {
        Self::new(FieldType::Float, true)
    }

    /// Create an optional bool field
    pub fn optional_bool() -> Self {
        Self::new(FieldType::Bool, false)
    }

    /// Attach an inclusive numeric range constraint
    pub fn with_range(mut self, range: NumericRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Attach a default applied when the field is absent
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Field table for one entity type, in declaration order.
///
/// Declaration order is preserved so that validation reports violations in
/// a stable, predictable order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<(&'static str, FieldDef)>,
}

impl Schema {
    /// Create a schema from its field table
    pub fn new(fields: Vec<(&'static str, FieldDef)>) -> Self {
        Self { fields }
    }

    /// Iterate fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldDef)> {
        self.fields.iter().map(|(name, def)| (*name, def))
    }

    /// Look up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, def)| def)
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the field table is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
