//! Schema registry for declaring and looking up record kinds.
//!
//! The registry maps record-kind names to their validation descriptors. It is
//! populated once at process start and read-only thereafter; `describe` and
//! `validate` take `&self` and may be called from any number of threads
//! without coordination.

use super::builtin;
use super::types::{FieldDescriptor, KindDescriptor};
use crate::error::{RegistrationError, RegistrationResult, SchemaError, SchemaResult};

use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Registry of record-kind descriptors with validation capabilities.
///
/// Kinds are kept in declaration order so enumeration is stable for the
/// consuming tool; a side index gives O(1) lookup by name.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    kinds: Vec<KindDescriptor>,
    index: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Create a registry pre-populated with the built-in kinds.
    ///
    /// The built-in declarations are compiled in and known-good, so the only
    /// way this fails is a bug in [`builtin`] itself.
    pub fn new() -> RegistrationResult<Self> {
        Self::with_builtin_kinds()
    }

    /// Create a registry pre-populated with the built-in kinds
    /// (user, product, project, message).
    pub fn with_builtin_kinds() -> RegistrationResult<Self> {
        let mut registry = Self::empty();
        for kind in builtin::builtin_kinds() {
            registry.register(kind)?;
        }
        Ok(registry)
    }

    /// Create an empty registry to be populated through [`register`].
    ///
    /// [`register`]: Self::register
    pub fn empty() -> Self {
        Self {
            kinds: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a kind descriptor, enforcing the declaration invariants.
    ///
    /// Registration fails on a duplicate kind name, a duplicate field name
    /// within the kind, a required field carrying a default, or an optional
    /// field carrying none. Optional fields must declare a default; `null`
    /// marks a nullable field with no meaningful one.
    pub fn register(&mut self, descriptor: KindDescriptor) -> RegistrationResult<()> {
        if self.index.contains_key(&descriptor.kind) {
            return Err(RegistrationError::DuplicateKind {
                kind: descriptor.kind,
            });
        }

        let mut seen = HashSet::new();
        for field in &descriptor.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(RegistrationError::DuplicateField {
                    kind: descriptor.kind.clone(),
                    field: field.name.clone(),
                });
            }
            Self::check_default_invariant(&descriptor.kind, field)?;
        }

        log::debug!(
            "registered kind '{}' (collection '{}', {} fields)",
            descriptor.kind,
            descriptor.collection,
            descriptor.fields.len()
        );
        self.index
            .insert(descriptor.kind.clone(), self.kinds.len());
        self.kinds.push(descriptor);
        Ok(())
    }

    fn check_default_invariant(kind: &str, field: &FieldDescriptor) -> RegistrationResult<()> {
        match (field.required, &field.default) {
            (true, Some(_)) => Err(RegistrationError::DefaultOnRequiredField {
                kind: kind.to_string(),
                field: field.name.clone(),
            }),
            (false, None) => Err(RegistrationError::MissingDefault {
                kind: kind.to_string(),
                field: field.name.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// All declared kind names, in declaration order. Never fails.
    pub fn kind_names(&self) -> Vec<&str> {
        self.kinds.iter().map(|k| k.kind.as_str()).collect()
    }

    /// All kind descriptors, in declaration order.
    pub fn kinds(&self) -> &[KindDescriptor] {
        &self.kinds
    }

    /// Get the descriptor for a kind.
    pub fn describe(&self, kind: &str) -> SchemaResult<&KindDescriptor> {
        self.get_kind(kind)
            .ok_or_else(|| SchemaError::unknown_kind(kind))
    }

    /// Get the explicit storage collection identifier for a kind.
    pub fn collection_for(&self, kind: &str) -> SchemaResult<&str> {
        self.describe(kind).map(|k| k.collection.as_str())
    }

    /// Get a kind descriptor by name, if registered.
    pub fn get_kind(&self, kind: &str) -> Option<&KindDescriptor> {
        self.index.get(kind).map(|&i| &self.kinds[i])
    }

    /// Validate email-address grammar: local-part "@" domain, with at least
    /// one "." in the domain and non-empty labels around it.
    ///
    /// This is deliberately the minimal check the viewer tool needs, not full
    /// RFC 5322 parsing; anything that passes here is well-formed enough to
    /// store and display.
    pub(super) fn is_valid_email_format(value: &str) -> bool {
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return false;
        }
        // Domain needs a dot with something on both sides of every label.
        domain.contains('.') && !domain.split('.').any(str::is_empty)
    }

    /// Get the type name of a JSON value for violation messages.
    pub(super) fn get_value_type(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new().expect("Failed to register built-in kinds")
    }
}
