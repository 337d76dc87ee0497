//! Document validation and normalization against kind descriptors.
//!
//! Validation walks the descriptor's fields in order and accumulates every
//! violation found rather than stopping at the first, so the consuming tool
//! can show a complete picture. On success the returned document is
//! normalized: absent optional fields carry their defaults and values are
//! coerced to the descriptor's canonical semantic type.

use super::registry::SchemaRegistry;
use super::types::{FieldDescriptor, FieldType, KindDescriptor};
use crate::error::{SchemaResult, ValidationFailed, ValidationResult, Violation, ViolationCode};

use serde_json::{Number, Value};

impl SchemaRegistry {
    /// Validate a candidate document against a registered kind.
    ///
    /// Returns the normalized document on success. Fails with
    /// [`SchemaError::UnknownKind`] for an unregistered kind and with
    /// [`SchemaError::Validation`] carrying the full, ordered violation list
    /// when the document breaks any field rule. Fields present in the input
    /// but not declared in the descriptor pass through unvalidated.
    ///
    /// [`SchemaError::UnknownKind`]: crate::error::SchemaError::UnknownKind
    /// [`SchemaError::Validation`]: crate::error::SchemaError::Validation
    pub fn validate(&self, kind: &str, document: &Value) -> SchemaResult<Value> {
        let descriptor = self.describe(kind)?;
        let normalized = self.validate_document(descriptor, document).map_err(|e| {
            log::debug!(
                "document for kind '{}' rejected with {} violation(s)",
                kind,
                e.violations.len()
            );
            e
        })?;
        Ok(normalized)
    }

    /// Validate a document against a descriptor, accumulating violations.
    fn validate_document(
        &self,
        descriptor: &KindDescriptor,
        document: &Value,
    ) -> ValidationResult<Value> {
        let Some(obj) = document.as_object() else {
            let violation = Violation::new(
                "$",
                ViolationCode::WrongType,
                format!(
                    "document must be a JSON object, got {}",
                    Self::get_value_type(document)
                ),
            );
            return Err(ValidationFailed::new(&descriptor.kind, vec![violation]));
        };

        let mut normalized = obj.clone();
        let mut violations = Vec::new();

        for field in &descriptor.fields {
            match self.validate_field(field, obj.get(&field.name)) {
                Ok(Some(value)) => {
                    normalized.insert(field.name.clone(), value);
                }
                Ok(None) => {}
                Err(violation) => violations.push(violation),
            }
        }

        if violations.is_empty() {
            Ok(Value::Object(normalized))
        } else {
            Err(ValidationFailed::new(&descriptor.kind, violations))
        }
    }

    /// Check one field; at most one violation is reported per field.
    ///
    /// `Ok(Some(value))` means the normalized document should carry `value`
    /// for this field; `Ok(None)` means the input value is already canonical
    /// (or an accepted explicit null) and stays as-is.
    fn validate_field(
        &self,
        field: &FieldDescriptor,
        value: Option<&Value>,
    ) -> Result<Option<Value>, Violation> {
        let value = match value {
            None => {
                if field.required {
                    return Err(Violation::new(
                        &field.name,
                        ViolationCode::MissingRequired,
                        "required field is missing",
                    ));
                }
                // Absent optional field receives its declared default.
                // The registration invariant guarantees the default exists.
                return Ok(field.default.clone());
            }
            Some(Value::Null) => {
                if field.required {
                    return Err(Violation::new(
                        &field.name,
                        ViolationCode::MissingRequired,
                        "required field is null",
                    ));
                }
                // Explicit null on an optional field is accepted and kept.
                return Ok(None);
            }
            Some(value) => value,
        };

        let coerced = Self::coerce_value(field.field_type, value).ok_or_else(|| {
            Violation::new(
                &field.name,
                ViolationCode::WrongType,
                format!(
                    "expected {}, got {}",
                    field.field_type.json_name(),
                    Self::get_value_type(value)
                ),
            )
        })?;

        let canonical = coerced.as_ref().unwrap_or(value);
        self.check_constraints(field, canonical)?;
        Ok(coerced)
    }

    /// Coerce a value to the field's canonical semantic type.
    ///
    /// `Some(None)` means the value already has the canonical type,
    /// `Some(Some(v))` carries the converted value, `None` means the value
    /// cannot represent the type at all.
    fn coerce_value(field_type: FieldType, value: &Value) -> Option<Option<Value>> {
        match field_type {
            FieldType::String | FieldType::Email => value.is_string().then_some(None),
            FieldType::Boolean => match value {
                Value::Bool(_) => Some(None),
                Value::String(s) => match s.to_lowercase().as_str() {
                    "true" => Some(Some(Value::Bool(true))),
                    "false" => Some(Some(Value::Bool(false))),
                    _ => None,
                },
                _ => None,
            },
            FieldType::Integer => match value {
                Value::Number(n) if n.is_i64() || n.is_u64() => Some(None),
                // A float with no fractional part still names an integer.
                Value::Number(n) => {
                    let f = n.as_f64()?;
                    (f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64)
                        .then(|| Some(Value::Number(Number::from(f as i64))))
                }
                Value::String(s) => s
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .map(|n| Some(Value::Number(Number::from(n)))),
                _ => None,
            },
            FieldType::Float => match value {
                Value::Number(_) => Some(None),
                Value::String(s) => {
                    let parsed = s.trim().parse::<f64>().ok()?;
                    Number::from_f64(parsed).map(|n| Some(Value::Number(n)))
                }
                _ => None,
            },
            FieldType::StringList => match value {
                Value::Array(items) => items
                    .iter()
                    .all(Value::is_string)
                    .then_some(None),
                _ => None,
            },
        }
    }

    /// Check constraint satisfaction for a type-conformant value.
    fn check_constraints(&self, field: &FieldDescriptor, value: &Value) -> Result<(), Violation> {
        if field.field_type == FieldType::Email {
            let text = value.as_str().unwrap_or_default();
            if !Self::is_valid_email_format(text) {
                return Err(Violation::new(
                    &field.name,
                    ViolationCode::InvalidEmail,
                    format!("'{text}' is not a valid email address"),
                ));
            }
        }

        if let Some(text) = value.as_str() {
            let length = text.chars().count();
            if let Some(min) = field.constraints.min_length {
                if length < min {
                    return Err(Violation::new(
                        &field.name,
                        ViolationCode::TooShort,
                        format!("{length} characters, minimum is {min}"),
                    ));
                }
            }
            if let Some(max) = field.constraints.max_length {
                if length > max {
                    return Err(Violation::new(
                        &field.name,
                        ViolationCode::TooLong,
                        format!("{length} characters, maximum is {max}"),
                    ));
                }
            }
        }

        if let Some(number) = value.as_f64() {
            if let Some(min) = field.constraints.minimum {
                if number < min {
                    return Err(Violation::new(
                        &field.name,
                        ViolationCode::BelowMinimum,
                        format!("value {number} is below the minimum {min}"),
                    ));
                }
            }
            if let Some(max) = field.constraints.maximum {
                if number > max {
                    return Err(Violation::new(
                        &field.name,
                        ViolationCode::AboveMaximum,
                        format!("value {number} is above the maximum {max}"),
                    ));
                }
            }
        }

        Ok(())
    }
}
