use serde_json::Value;

use super::errors::NormalizeError;

/// Coerces a provider amount into a non-negative float.
///
/// Missing, null, false, zero and empty values fall back to `default`.
/// Anything else is read as a number and its sign is dropped, because
/// providers encode refunds and returns as negatives inconsistently.
pub fn coerce_amount(value: Option<&Value>, default: f64) -> Result<f64, NormalizeError> {
    let amount = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(default),
        Some(Value::Bool(true)) => 1.0,
        Some(Value::Number(number)) => number.as_f64().ok_or(NormalizeError::NumericCoercion)?,
        Some(Value::String(text)) if text.trim().is_empty() => return Ok(default),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| NormalizeError::NumericCoercion)?,
        Some(Value::Array(items)) if items.is_empty() => return Ok(default),
        Some(Value::Object(fields)) if fields.is_empty() => return Ok(default),
        Some(_) => return Err(NormalizeError::NumericCoercion),
    };

    if !amount.is_finite() {
        return Err(NormalizeError::NumericCoercion);
    }
    if amount == 0.0 {
        return Ok(default);
    }

    Ok(amount.abs())
}

/// Null, false, zero and empty strings or containers count as empty.
pub(super) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Reads a pass-through text field. Missing and null become an empty string.
pub fn text_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
