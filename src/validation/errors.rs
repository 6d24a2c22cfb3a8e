//! Validation error types
//!
//! Every variant is a client error; the HTTP layer maps all of them to 400
//! and echoes the `Display` text as the error message.

use thiserror::Error;

/// Result type for validation checks
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A violated input rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `name` missing, not a string, or blank
    #[error("Name is required and must be a non-empty string")]
    InvalidName,

    /// `quantity` missing, not convertible to an integer, or not positive
    #[error("Quantity must be a positive number")]
    InvalidQuantity,

    /// Path identifier not a positive integer
    #[error("Invalid ID format")]
    InvalidId,
}
