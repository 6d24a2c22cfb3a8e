//! Item and identifier validators
//!
//! Rules:
//! - `name` must be a JSON string that is non-empty after trimming
//! - `quantity` must convert to an integer greater than zero
//! - ids must parse as integers greater than zero
//!
//! Name is checked before quantity, so a body failing both reports the name.

use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use crate::model::{ItemId, NewItem};

/// Validates an item body and returns the normalized input.
///
/// `data` is usually a JSON object; anything else has no `name` and fails
/// with `InvalidName`. The name is kept as supplied (untrimmed). A missing or
/// null `description` becomes empty, a non-string one is kept as JSON text.
pub fn validate_item(data: &Value) -> ValidationResult<NewItem> {
    let name = match data.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => return Err(ValidationError::InvalidName),
    };

    let quantity = data
        .get("quantity")
        .and_then(to_integer)
        .filter(|quantity| *quantity > 0)
        .ok_or(ValidationError::InvalidQuantity)?;

    let description = match data.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };

    Ok(NewItem {
        name,
        quantity,
        description,
    })
}

/// Validates a raw path identifier.
pub fn validate_id(raw: &str) -> ValidationResult<ItemId> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ValidationError::InvalidId)
}

/// Integer conversion for loosely typed JSON quantities.
///
/// Floats truncate toward zero, strings parse after trimming, booleans are
/// 0 or 1. Out-of-range values are not convertible.
fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite())
                .map(f64::trunc)
                .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
