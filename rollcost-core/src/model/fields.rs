//! Serde helpers for the loosely typed fields of stored part records.
//!
//! The part store keeps most scalars as whatever the form produced: strings
//! for typed-in values, numbers after a save, `null` for never-touched
//! fields. These helpers read all of them without failing.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Read any scalar as its text form. `null` and `false` read as empty.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::Bool(false)) => String::new(),
        Some(other) => other.to_string(),
    })
}

/// Read a truthy flag.
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(s.trim(), "true" | "1"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}

/// Read an identifier stored as a number or a numeric string.
pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => crate::parser::parse_leading_int(&s),
        _ => None,
    })
}

/// Write an optional identifier as a number.
pub fn write_id<S: Serializer>(id: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => serializer.serialize_i64(*id),
        None => serializer.serialize_none(),
    }
}

/// Write a whole-number count as a number; anything else stays text.
pub fn write_count<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    match value.trim().parse::<i64>() {
        Ok(n) => serializer.serialize_i64(n),
        Err(_) => serializer.serialize_str(value),
    }
}

/// Write an enum-backed column. The store rejects empty strings there, so
/// blank is written as `null`.
pub fn write_enum<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.trim().is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_str(value)
    }
}

/// `skip_serializing_if` helper for flags that are only stored when set.
pub fn is_false(value: &bool) -> bool {
    !*value
}
