//! Schema discovery document for the external viewer tool.
//!
//! The generic database tool introspects the registry once at connect time:
//! it needs every kind name, the storage collection behind it, and the full
//! field list with constraints to render its editing UI. This module renders
//! that snapshot as one serializable document; the transport and format on
//! the wire are owned by the tool, not by this crate.

use crate::error::RegistrationResult;
use crate::schema::{KindDescriptor, SchemaRegistry};

use serde::Serialize;
use serde_json::Value;

/// Snapshot of every registered kind, in declaration order.
///
/// Serializes to the shape the viewer expects: an ordered list of
/// `{kind, collection, fields: [{name, type, required, default, constraints,
/// description}]}`.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryDocument {
    pub kinds: Vec<KindDescriptor>,
}

impl DiscoveryDocument {
    /// Build a discovery document from a registry.
    pub fn from_registry(registry: &SchemaRegistry) -> Self {
        Self {
            kinds: registry.kinds().to_vec(),
        }
    }

    /// Build a discovery document for the built-in kinds.
    pub fn builtin() -> RegistrationResult<Self> {
        Ok(Self::from_registry(&SchemaRegistry::new()?))
    }

    /// Number of kinds exposed.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// True when no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Render the document as a JSON value.
    ///
    /// Descriptor types serialize infallibly, so this cannot fail in
    /// practice; the signature stays honest about serde.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
