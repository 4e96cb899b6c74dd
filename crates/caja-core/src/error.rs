//! # Error Types
//!
//! Typed validation errors for caja-core.
//!
//! ## Where Errors Live (and Where They Don't)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Strategy                                  │
//! │                                                                         │
//! │  card module        → NO errors. Total functions returning bool /      │
//! │                       CardBrand / best-effort strings. Bad input is    │
//! │                       an answer, not a failure.                         │
//! │                                                                         │
//! │  validation module  → ValidationError (this file). Field-level          │
//! │                       reasons are part of the contract: the form       │
//! │                       needs to know WHICH rule failed.                 │
//! │                                                                         │
//! │  Flow: ValidationError → frontend message (API layer, out of scope)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These occur when form input doesn't meet business rules, before any
/// request leaves the client.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (wrong characters, wrong shape).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A collection that must have members is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
