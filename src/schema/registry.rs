//! Entity registry: the five record types and their field tables.
//!
//! Each entity stores into the collection named after its type, lowercased:
//! User -> "user", ContactMessage -> "contactmessage", and so on.

use serde_json::json;

use super::types::{FieldDef, NumericRange, Schema};

/// The closed set of record types this backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Product,
    Booking,
    ContactMessage,
    Testimonial,
}

impl EntityKind {
    /// All entity kinds, in schema-introspection order.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::User,
        EntityKind::Product,
        EntityKind::Booking,
        EntityKind::ContactMessage,
        EntityKind::Testimonial,
    ];

    /// The entity's type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Product => "Product",
            EntityKind::Booking => "Booking",
            EntityKind::ContactMessage => "ContactMessage",
            EntityKind::Testimonial => "Testimonial",
        }
    }

    /// Storage collection name: the type name lowercased.
    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Product => "product",
            EntityKind::Booking => "booking",
            EntityKind::ContactMessage => "contactmessage",
            EntityKind::Testimonial => "testimonial",
        }
    }

    /// The entity's field table.
    pub fn schema(&self) -> Schema {
        match self {
            EntityKind::User => Schema::new(vec![
                ("name", FieldDef::required_string()),
                ("email", FieldDef::required_email()),
                ("address", FieldDef::required_string()),
                (
                    "age",
                    FieldDef::optional_int().with_range(NumericRange::between(0.0, 120.0)),
                ),
                ("is_active", FieldDef::optional_bool().with_default(json!(true))),
            ]),
            EntityKind::Product => Schema::new(vec![
                ("title", FieldDef::required_string()),
                ("description", FieldDef::optional_string()),
                (
                    "price",
                    FieldDef::required_float().with_range(NumericRange::at_least(0.0)),
                ),
                ("category", FieldDef::required_string()),
                ("in_stock", FieldDef::optional_bool().with_default(json!(true))),
            ]),
            EntityKind::Booking => Schema::new(vec![
                ("name", FieldDef::required_string()),
                ("email", FieldDef::required_email()),
                ("phone", FieldDef::required_string()),
                ("address", FieldDef::required_string()),
                ("service_type", FieldDef::required_string()),
                ("date", FieldDef::required_string()),
                ("time", FieldDef::required_string()),
                ("notes", FieldDef::optional_string()),
                (
                    "source",
                    FieldDef::optional_string().with_default(json!("website")),
                ),
            ]),
            EntityKind::ContactMessage => Schema::new(vec![
                ("name", FieldDef::required_string()),
                ("email", FieldDef::required_email()),
                ("message", FieldDef::required_string()),
                ("phone", FieldDef::optional_string()),
                ("subject", FieldDef::optional_string()),
            ]),
            EntityKind::Testimonial => Schema::new(vec![
                ("name", FieldDef::required_string()),
                (
                    "rating",
                    FieldDef::required_int().with_range(NumericRange::between(1.0, 5.0)),
                ),
                ("comment", FieldDef::required_string()),
                ("city", FieldDef::optional_string()),
            ]),
        }
    }
}
