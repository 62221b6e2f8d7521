//! Argument validation performed before any request is sent.
//!
//! The validators work on [`serde_json::Value`] so that callers holding
//! loosely typed input (configuration, JSON from another service, CLI
//! arguments) get the same error taxonomy as callers using the typed
//! operations on [`SpotifyClient`](crate::spotify::SpotifyClient).

use serde_json::{Value, json};

use crate::error::{Error, ErrorKind, Result};

pub const REPEAT_STATES: [&str; 3] = ["off", "track", "context"];

/// Checks that `value` is a non-empty string identifier.
pub fn validate_id(value: &Value, field: &str) -> Result<()> {
    match value {
        Value::Null => Err(Error::new(
            ErrorKind::EmptyId,
            format!("{} cannot be nil", field),
        )
        .with_detail("field", field)),
        Value::String(s) if s.is_empty() => Err(Error::new(
            ErrorKind::EmptyId,
            format!("{} cannot be empty", field),
        )
        .with_detail("field", field)),
        Value::String(_) => Ok(()),
        other => Err(Error::new(
            ErrorKind::InvalidId,
            format!("{} must be a non-empty string, got: {}", field, other),
        )
        .with_detail("field", field)
        .with_detail("value", other.clone())),
    }
}

/// Checks that `value` is a non-empty access token string.
pub fn validate_token(value: &Value) -> Result<()> {
    const FIELD: &str = "Access token";

    match value {
        Value::Null => Err(Error::new(
            ErrorKind::EmptyToken,
            format!("{} cannot be nil", FIELD),
        )),
        Value::String(s) if s.is_empty() => Err(Error::new(
            ErrorKind::EmptyToken,
            format!("{} cannot be empty", FIELD),
        )),
        Value::String(_) => Ok(()),
        other => Err(Error::new(
            ErrorKind::InvalidToken,
            format!("{} must be a non-empty string, got: {}", FIELD, other),
        )
        .with_detail("value", other.clone())),
    }
}

/// Checks that `value` is a non-empty array.
pub fn validate_list(value: &Value, field: &str) -> Result<()> {
    match value {
        Value::Array(items) if items.is_empty() => Err(Error::new(
            ErrorKind::EmptyList,
            format!("{} cannot be empty", field),
        )
        .with_detail("field", field)),
        Value::Array(_) => Ok(()),
        other => Err(Error::new(
            ErrorKind::InvalidType,
            format!("{} must be a list, got: {}", field, other),
        )
        .with_detail("field", field)
        .with_detail("value", other.clone())),
    }
}

/// Checks every element of `value` is a non-empty string.
///
/// Reports the first offending element, scanning left to right, with its
/// position in `details.index`.
pub fn validate_all_ids(value: &Value, field: &str) -> Result<()> {
    let Some(items) = value.as_array() else {
        return validate_list(value, field);
    };

    let offending = items
        .iter()
        .enumerate()
        .find(|(_, item)| !matches!(item, Value::String(s) if !s.is_empty()));

    match offending {
        Some((index, item)) => Err(Error::new(
            ErrorKind::InvalidId,
            format!(
                "{}[{}] must be a non-empty string, got: {}",
                field, index, item
            ),
        )
        .with_detail("field", field)
        .with_detail("index", index)
        .with_detail("value", item.clone())),
        None => Ok(()),
    }
}

/// Checks a list of identifiers is non-empty, holds only valid ids and
/// does not exceed `max` entries.
pub fn validate_id_list(value: &Value, field: &str, max: usize) -> Result<()> {
    validate_list(value, field)?;
    validate_all_ids(value, field)?;

    let len = value.as_array().map(Vec::len).unwrap_or_default();
    if len > max {
        return Err(Error::new(
            ErrorKind::InvalidType,
            format!("{} accepts at most {} ids, got {}", field, max, len),
        )
        .with_detail("field", field)
        .with_detail("max", max)
        .with_detail("value", len));
    }

    Ok(())
}

/// Checks that `value` is one of `valid`.
pub fn validate_one_of(value: &str, field: &str, valid: &[&str]) -> Result<()> {
    if valid.contains(&value) {
        return Ok(());
    }

    Err(Error::new(
        ErrorKind::InvalidType,
        format!(
            "{} must be one of {}, got: {:?}",
            field,
            valid.join(", "),
            value
        ),
    )
    .with_detail("field", field)
    .with_detail("value", value)
    .with_detail("valid_types", json!(valid)))
}

/// Checks that `value` lies within `min..=max`.
pub fn validate_range(value: i64, field: &str, min: i64, max: i64) -> Result<()> {
    if (min..=max).contains(&value) {
        return Ok(());
    }

    Err(Error::new(
        ErrorKind::InvalidType,
        format!("{} must be between {} and {}, got: {}", field, min, max, value),
    )
    .with_detail("field", field)
    .with_detail("value", value)
    .with_detail("valid_range", json!([min, max])))
}

/// Checks that `value` is zero or positive.
pub fn validate_non_negative(value: i64, field: &str) -> Result<()> {
    if value >= 0 {
        return Ok(());
    }

    Err(Error::new(
        ErrorKind::InvalidType,
        format!("{} must be a non-negative integer, got: {}", field, value),
    )
    .with_detail("field", field)
    .with_detail("value", value))
}

/// Checks that `value` is a JSON boolean.
pub fn validate_bool(value: &Value, field: &str) -> Result<()> {
    if value.is_boolean() {
        return Ok(());
    }

    Err(Error::new(
        ErrorKind::InvalidType,
        format!("{} must be a boolean, got: {}", field, value),
    )
    .with_detail("field", field)
    .with_detail("value", value.clone()))
}

/// Shorthand used by the typed operations.
pub(crate) fn id(value: &str, field: &str) -> Result<()> {
    validate_id(&Value::from(value), field)
}

pub(crate) fn token(value: &str) -> Result<()> {
    validate_token(&Value::from(value))
}

pub(crate) fn ids(values: &[&str], field: &str, max: usize) -> Result<()> {
    validate_id_list(&json!(values), field, max)
}
