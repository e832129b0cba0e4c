// ABOUTME: Tests for the JSON node accessor taxonomy
// ABOUTME: Required accessors fail hard, optional accessors resolve to None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::float_cmp
)]

use serde_json::json;
use vital_providers::json::{
    optional_bool, optional_f64, optional_i64, optional_str, required_array, required_f64,
    required_i64, required_node, required_str,
};
use vital_providers::MappingError;

#[test]
fn required_node_fails_hard_when_absent() {
    let node = json!({ "present": 1 });
    assert!(required_node(&node, "present").is_ok());
    assert_eq!(
        required_node(&node, "absent"),
        Err(MappingError::missing("absent"))
    );
}

#[test]
fn required_numeric_accessors_distinguish_absence_from_mismatch() {
    let node = json!({ "count": "not a number" });
    assert_eq!(
        required_i64(&node, "count"),
        Err(MappingError::mismatch("count", "an integer"))
    );
    assert_eq!(
        required_f64(&node, "count"),
        Err(MappingError::mismatch("count", "a number"))
    );
    assert_eq!(
        required_i64(&node, "missing"),
        Err(MappingError::missing("missing"))
    );
}

#[test]
fn required_f64_coerces_integer_json_numbers() {
    let node = json!({ "value": 70 });
    assert_eq!(required_f64(&node, "value").unwrap(), 70.0);
}

#[test]
fn required_array_rejects_non_array_shapes() {
    let node = json!({ "measures": { "not": "an array" } });
    assert_eq!(
        required_array(&node, "measures"),
        Err(MappingError::mismatch("measures", "an array"))
    );
}

#[test]
fn required_str_rejects_non_string_shapes() {
    let node = json!({ "timezone": 42 });
    assert_eq!(
        required_str(&node, "timezone"),
        Err(MappingError::mismatch("timezone", "a string"))
    );
}

#[test]
fn optional_accessors_never_fail() {
    let node = json!({ "text": 42, "number": "text", "flag": "yes" });

    // Absent fields resolve to None
    assert_eq!(optional_i64(&node, "missing"), None);
    assert_eq!(optional_f64(&node, "missing"), None);
    assert_eq!(optional_str(&node, "missing"), None);
    assert_eq!(optional_bool(&node, "missing"), None);

    // Mismatched shapes resolve to None as well, never an error
    assert_eq!(optional_str(&node, "text"), None);
    assert_eq!(optional_i64(&node, "number"), None);
    assert_eq!(optional_bool(&node, "flag"), None);
}

#[test]
fn optional_accessors_extract_present_values() {
    let node = json!({ "date": 1_609_459_200, "value": 70.5, "comment": "calibrated", "ok": true });
    assert_eq!(optional_i64(&node, "date"), Some(1_609_459_200));
    assert_eq!(optional_f64(&node, "value"), Some(70.5));
    assert_eq!(optional_str(&node, "comment"), Some("calibrated"));
    assert_eq!(optional_bool(&node, "ok"), Some(true));
}
