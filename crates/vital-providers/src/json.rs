// ABOUTME: Safe typed field extraction from semi-structured JSON response trees
// ABOUTME: Required accessors fail hard, optional accessors resolve to None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

//! Node accessors for provider response trees.
//!
//! Two families with deliberately different failure behavior:
//!
//! - `required_*` accessors propagate [`MappingError::MissingField`] when the
//!   field is absent and [`MappingError::TypeMismatch`] when it exists with
//!   the wrong shape. Use them for fields every well-formed payload carries.
//! - `optional_*` accessors never fail; absence and type mismatch both
//!   resolve to `None`, keeping "absent" and "zero value" unambiguous at the
//!   call site.

use serde_json::Value;
use vital_core::MappingError;

/// Extract a required child node.
///
/// # Errors
///
/// Returns [`MappingError::MissingField`] if `field` is absent from `node`.
pub fn required_node<'a>(node: &'a Value, field: &'static str) -> Result<&'a Value, MappingError> {
    node.get(field).ok_or(MappingError::MissingField { field })
}

/// Extract a required child array.
///
/// # Errors
///
/// Returns [`MappingError::MissingField`] if `field` is absent, or
/// [`MappingError::TypeMismatch`] if it is present but not an array.
pub fn required_array<'a>(
    node: &'a Value,
    field: &'static str,
) -> Result<&'a [Value], MappingError> {
    required_node(node, field)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or(MappingError::TypeMismatch {
            field,
            expected: "an array",
        })
}

/// Extract a required floating-point field, coercing integer JSON numbers.
///
/// # Errors
///
/// Returns [`MappingError::MissingField`] if `field` is absent, or
/// [`MappingError::TypeMismatch`] if it is present but not numeric.
pub fn required_f64(node: &Value, field: &'static str) -> Result<f64, MappingError> {
    required_node(node, field)?
        .as_f64()
        .ok_or(MappingError::TypeMismatch {
            field,
            expected: "a number",
        })
}

/// Extract a required integer field.
///
/// # Errors
///
/// Returns [`MappingError::MissingField`] if `field` is absent, or
/// [`MappingError::TypeMismatch`] if it is present but not an integer.
pub fn required_i64(node: &Value, field: &'static str) -> Result<i64, MappingError> {
    required_node(node, field)?
        .as_i64()
        .ok_or(MappingError::TypeMismatch {
            field,
            expected: "an integer",
        })
}

/// Extract a required string field.
///
/// # Errors
///
/// Returns [`MappingError::MissingField`] if `field` is absent, or
/// [`MappingError::TypeMismatch`] if it is present but not a string.
pub fn required_str<'a>(node: &'a Value, field: &'static str) -> Result<&'a str, MappingError> {
    required_node(node, field)?
        .as_str()
        .ok_or(MappingError::TypeMismatch {
            field,
            expected: "a string",
        })
}

/// Extract an optional child node; absent resolves to `None`.
#[must_use]
pub fn optional_node<'a>(node: &'a Value, field: &str) -> Option<&'a Value> {
    node.get(field)
}

/// Extract an optional integer field; absence and type mismatch both resolve to `None`.
#[must_use]
pub fn optional_i64(node: &Value, field: &str) -> Option<i64> {
    node.get(field).and_then(Value::as_i64)
}

/// Extract an optional floating-point field; absence and type mismatch both resolve to `None`.
#[must_use]
pub fn optional_f64(node: &Value, field: &str) -> Option<f64> {
    node.get(field).and_then(Value::as_f64)
}

/// Extract an optional string field; absence and type mismatch both resolve to `None`.
#[must_use]
pub fn optional_str<'a>(node: &'a Value, field: &str) -> Option<&'a str> {
    node.get(field).and_then(Value::as_str)
}

/// Extract an optional boolean field; absence and type mismatch both resolve to `None`.
#[must_use]
pub fn optional_bool(node: &Value, field: &str) -> Option<bool> {
    node.get(field).and_then(Value::as_bool)
}
