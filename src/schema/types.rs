//! Core descriptor type definitions for record kinds.
//!
//! This module contains the data structures that describe a record kind:
//! its storage collection identifier and the ordered, typed, possibly
//! constrained fields its documents must carry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor for one record kind.
///
/// A record kind is a named category of documents sharing one validation
/// descriptor. The `collection` identifier is what the external tool uses as
/// the storage collection name; it defaults to the lower-cased kind name and
/// may be overridden for irregular plurals or aliases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindDescriptor {
    /// Kind name, unique within the registry.
    pub kind: String,
    /// Explicit storage collection identifier for the external consumer.
    pub collection: String,
    /// Ordered field descriptors.
    pub fields: Vec<FieldDescriptor>,
}

impl KindDescriptor {
    /// Create a descriptor with the collection identifier derived by
    /// lower-casing the kind name.
    pub fn new(kind: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        let kind = kind.into();
        let collection = kind.to_lowercase();
        Self {
            kind,
            collection,
            fields,
        }
    }

    /// Override the storage collection identifier.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Look up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Descriptor for a single field within a record kind.
///
/// Defines the field's semantic type, whether it is required, the default
/// used when an optional field is absent, and any value constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, unique within its kind.
    pub name: String,
    /// Semantic type of the field value.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field must be present (and non-null).
    pub required: bool,
    /// Default value filled in when an optional field is absent.
    /// Present exactly when `required` is false; null means nullable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Value constraints, all bounds inclusive.
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
    /// Human-readable description, introspection only.
    pub description: String,
}

impl FieldDescriptor {
    /// Declare a required field. Required fields carry no default.
    pub fn required(
        name: impl Into<String>,
        field_type: FieldType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
            default: None,
            constraints: Constraints::default(),
            description: description.into(),
        }
    }

    /// Declare an optional field with a default. Pass `Value::Null` for a
    /// nullable field with no meaningful default.
    pub fn optional(
        name: impl Into<String>,
        field_type: FieldType,
        default: Value,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            default: Some(default),
            constraints: Constraints::default(),
            description: description.into(),
        }
    }

    /// Set the inclusive numeric minimum.
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.constraints.minimum = Some(minimum);
        self
    }

    /// Set the inclusive numeric maximum.
    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.constraints.maximum = Some(maximum);
        self
    }

    /// Set the inclusive minimum length in characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.constraints.min_length = Some(min_length);
        self
    }

    /// Set the inclusive maximum length in characters.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.constraints.max_length = Some(max_length);
        self
    }
}

/// Semantic field types for record-kind fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// String value
    String,
    /// Integer number
    Integer,
    /// Decimal number
    Float,
    /// Boolean value
    Boolean,
    /// String value constrained to email-address grammar
    Email,
    /// Array of string values
    StringList,
}

impl FieldType {
    /// Canonical JSON type name, used in violation messages.
    pub fn json_name(&self) -> &'static str {
        match self {
            Self::String | Self::Email => "string",
            Self::Integer => "integer",
            Self::Float => "number",
            Self::Boolean => "boolean",
            Self::StringList => "array of strings",
        }
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::String
    }
}

/// Value constraints attached to a field, all bounds inclusive.
///
/// `minimum`/`maximum` apply to numeric fields; `min_length`/`max_length`
/// apply to string-valued fields and count characters, not bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl Constraints {
    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.minimum.is_none()
            && self.maximum.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
    }
}
