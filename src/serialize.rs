//! JSON normalization for analysis output.
//!
//! Canonicalizes every number in the tree: integral floats become JSON
//! integers, non-finite values become null. Objects and arrays recurse;
//! everything else passes through unchanged. The walk is total (it never
//! fails on well-formed analysis output) and idempotent, so persisting a
//! normalized tree and re-normalizing it is a no-op.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::Result;

/// Largest float with an exact integer representation (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serializes any analysis value and normalizes the resulting tree.
///
/// # Errors
///
/// Returns an error only if serde serialization itself fails.
pub fn to_normalized_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(normalize(serde_json::to_value(value)?))
}

/// Recursively canonicalizes a JSON tree.
#[must_use]
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (key, normalize(inner)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Number(number) => normalize_number(number),
        other => other,
    }
}

fn normalize_number(number: Number) -> Value {
    if number.is_f64() {
        let float = number.as_f64().unwrap_or(0.0);
        if !float.is_finite() {
            return Value::Null;
        }
        if float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER {
            return Value::Number(Number::from(float as i64));
        }
    }
    Value::Number(number)
}
