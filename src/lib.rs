//! Validation schema registry for document-database collections.
//!
//! Declares the field layout, defaults, and validation constraints of a
//! handful of record kinds (users, products, portfolio projects, contact
//! messages) and exposes them to a generic database viewer/editor through
//! introspection and a validation call. The registry is built once at
//! process start and read-only afterwards; validation is a pure function of
//! its inputs and safe to call concurrently.
//!
//! # Core Components
//!
//! - [`SchemaRegistry`] - Declares kinds, answers introspection, validates documents
//! - [`DiscoveryDocument`] - Serializable schema snapshot for the external tool
//! - [`KindDescriptor`] / [`FieldDescriptor`] - The declaration building blocks
//!
//! # Quick Start
//!
//! ```rust
//! use collection_schema::SchemaRegistry;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let normalized = registry.validate(
//!     "message",
//!     &json!({
//!         "name": "Jo",
//!         "email": "jo@example.com",
//!         "message": "Hi there",
//!     }),
//! )?;
//! assert_eq!(normalized["subject"], serde_json::Value::Null);
//! # Ok(())
//! # }
//! ```

pub mod discovery;
pub mod error;
pub mod schema;

// Re-export commonly used types for convenience
pub use discovery::DiscoveryDocument;
pub use error::{
    RegistrationError, SchemaError, SchemaResult, ValidationFailed, ValidationResult, Violation,
    ViolationCode,
};
pub use schema::{Constraints, FieldDescriptor, FieldType, KindDescriptor, SchemaRegistry};
