//! Record-kind descriptors and the validation registry.
//!
//! This module provides the schema registry plus the descriptor types it is
//! built from.
//!
//! # Key Types
//!
//! - [`KindDescriptor`] - One record kind with its ordered field descriptors
//! - [`FieldDescriptor`] - Type, requiredness, default, and constraints of one field
//! - [`SchemaRegistry`] - Registry for declaring, introspecting, and validating kinds
//!
//! # Examples
//!
//! ```rust
//! use collection_schema::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let message = registry.describe("message")?;
//! assert_eq!(message.collection, "message");
//! # Ok(())
//! # }
//! ```

pub mod builtin;
pub mod registry;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

// Re-export the main types for convenience
pub use registry::SchemaRegistry;
pub use types::{Constraints, FieldDescriptor, FieldType, KindDescriptor};
