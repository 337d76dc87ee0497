//! Error types for schema registry operations.
//!
//! Two failure families exist: `UnknownKind` (the caller asked about a record
//! kind that was never declared, a programmer error) and `ValidationFailed`
//! (a candidate document broke one or more field rules, an expected outcome
//! the caller corrects and retries). Declaration-time invariant breaches are
//! a third, startup-only family in [`RegistrationError`].

use serde::Serialize;
use std::fmt;

/// Main error type for registry operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The requested record kind is not registered.
    #[error("Unknown record kind: {kind}")]
    UnknownKind { kind: String },

    /// A candidate document failed validation against its kind's descriptor.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationFailed),
}

/// A document failed validation; carries every violation found.
///
/// Violations are reported in descriptor field order, all at once, so the
/// caller can surface them together rather than fixing one at a time.
#[derive(Debug, Clone)]
pub struct ValidationFailed {
    /// Record kind the document was validated against.
    pub kind: String,
    /// Field-level violations, in descriptor field order.
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "document for kind '{}' failed validation with {} violation(s)",
            self.kind,
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "; {}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailed {}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the offending field.
    pub field: String,
    /// Machine-readable reason.
    pub code: ViolationCode,
    /// Human-readable message for display by the consumer.
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{:?}]: {}", self.field, self.code, self.message)
    }
}

/// Reason codes for field-level violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    /// Required field absent (or explicitly null).
    MissingRequired,
    /// Value does not conform to the field's semantic type.
    WrongType,
    /// Numeric value below the inclusive minimum.
    BelowMinimum,
    /// Numeric value above the inclusive maximum.
    AboveMaximum,
    /// String shorter than the inclusive minimum character count.
    TooShort,
    /// String longer than the inclusive maximum character count.
    TooLong,
    /// Value does not match the email-address grammar.
    InvalidEmail,
}

/// Errors raised while declaring kinds at registry construction.
///
/// These are programming errors in the schema declarations themselves and
/// surface once, at process start, never during validation.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// A kind with this name is already registered.
    #[error("Record kind '{kind}' is already registered")]
    DuplicateKind { kind: String },

    /// Two fields in one kind share a name.
    #[error("Record kind '{kind}' declares field '{field}' more than once")]
    DuplicateField { kind: String, field: String },

    /// A required field may not carry a default value.
    #[error("Required field '{field}' of kind '{kind}' must not declare a default")]
    DefaultOnRequiredField { kind: String, field: String },

    /// An optional field must carry a default value (null is acceptable).
    #[error("Optional field '{field}' of kind '{kind}' declares no default")]
    MissingDefault { kind: String, field: String },
}

// Result type aliases for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type ValidationResult<T> = Result<T, ValidationFailed>;
pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl SchemaError {
    /// Create an unknown-kind error.
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind { kind: kind.into() }
    }
}

impl ValidationFailed {
    pub fn new(kind: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            kind: kind.into(),
            violations,
        }
    }
}
