//! Input validation for inventory requests
//!
//! Pure checks run before any storage access:
//! - `validate_item`: name and quantity rules for create/update bodies
//! - `validate_id`: positive integer path identifiers

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::{validate_id, validate_item};
