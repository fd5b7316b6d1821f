//! Field rules for film records.
//!
//! Validation for create/replace payloads, the lenient number checks used by
//! partial updates, and parsing of the `minimum-duration` list filter.

use serde_json::{Number, Value};

use crate::error::CoreError;
use crate::types::Minutes;

/// Entity name used in `CoreError::NotFound`.
pub const ENTITY_FILM: &str = "Film";

/// Require a non-empty text field.
///
/// Whitespace-only values are accepted; only a missing or zero-length value
/// is rejected.
pub fn validate_required_text<'a>(
    field: &str,
    value: Option<&'a str>,
) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Require a positive whole number of minutes.
pub fn validate_duration(value: Option<f64>) -> Result<Minutes, CoreError> {
    value
        .and_then(as_minutes)
        .ok_or_else(|| CoreError::Validation("duration must be a positive whole number".into()))
}

/// An optional budget must be a positive number when supplied.
///
/// The number is returned as parsed, so an integer budget stays an integer.
pub fn validate_budget(value: Option<Number>) -> Result<Option<Number>, CoreError> {
    match value {
        None => Ok(None),
        Some(b) if is_positive_number(&b) => Ok(Some(b)),
        Some(_) => Err(CoreError::Validation("budget must be a positive number".into())),
    }
}

/// Positive whole-minute duration from an arbitrary JSON value, if any.
///
/// Used by partial updates, where an unusable value is ignored rather than
/// rejected.
pub fn positive_duration(value: &Value) -> Option<Minutes> {
    value.as_f64().and_then(as_minutes)
}

/// Positive number from an arbitrary JSON value, if any.
pub fn positive_number(value: &Value) -> Option<Number> {
    value.as_number().filter(|n| is_positive_number(n)).cloned()
}

/// Parse the raw `minimum-duration` query value.
///
/// - missing, empty, non-numeric or zero: `Ok(None)` (no filter)
/// - negative: validation error
/// - positive: `Ok(Some(min))`
pub fn parse_minimum_duration(raw: Option<&str>) -> Result<Option<f64>, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let min = match raw.parse::<f64>() {
        Ok(n) if !n.is_nan() => n,
        _ => return Ok(None),
    };

    if min < 0.0 {
        return Err(CoreError::Validation("Duration must be > 0".into()));
    }
    if min == 0.0 {
        return Ok(None);
    }
    Ok(Some(min))
}

fn is_positive(n: f64) -> bool {
    n.is_finite() && n > 0.0
}

fn is_positive_number(n: &Number) -> bool {
    n.as_f64().is_some_and(is_positive)
}

fn as_minutes(n: f64) -> Option<Minutes> {
    if is_positive(n) && n.fract() == 0.0 && n <= f64::from(Minutes::MAX) {
        Some(n as Minutes)
    } else {
        None
    }
}
