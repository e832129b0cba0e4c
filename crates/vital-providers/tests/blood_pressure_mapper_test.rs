// ABOUTME: Tests for the paired systolic/diastolic blood pressure mapper
// ABOUTME: Both components required, last-match-wins independently per code
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
use vital_providers::withings::{BloodPressureMapper, BodyMeasureMapper};
use vital_providers::MappingError;

#[test]
fn maps_paired_systolic_and_diastolic_entries() {
    let group = json!({
        "measures": [
            { "type": 10, "value": 120, "unit": 0 },
            { "type": 9, "value": 80, "unit": 0 }
        ],
        "date": 1_609_459_200
    });

    let point = BloodPressureMapper
        .map_group(&group, "UTC")
        .unwrap()
        .expect("paired entries should map");

    assert_eq!(point.body.systolic_blood_pressure.value, 120.0);
    assert_eq!(point.body.diastolic_blood_pressure.value, 80.0);
}

#[test]
fn lone_component_yields_nothing() {
    let systolic_only = json!({
        "measures": [{ "type": 10, "value": 120, "unit": 0 }]
    });
    assert_eq!(
        BloodPressureMapper.map_group(&systolic_only, "UTC").unwrap(),
        None
    );

    let diastolic_only = json!({
        "measures": [{ "type": 9, "value": 80, "unit": 0 }]
    });
    assert_eq!(
        BloodPressureMapper
            .map_group(&diastolic_only, "UTC")
            .unwrap(),
        None
    );
}

#[test]
fn duplicates_resolve_last_match_wins_per_component() {
    let group = json!({
        "measures": [
            { "type": 10, "value": 118, "unit": 0 },
            { "type": 9, "value": 78, "unit": 0 },
            { "type": 10, "value": 122, "unit": 0 },
            { "type": 9, "value": 82, "unit": 0 }
        ]
    });

    let point = BloodPressureMapper.map_group(&group, "UTC").unwrap().unwrap();
    assert_eq!(point.body.systolic_blood_pressure.value, 122.0);
    assert_eq!(point.body.diastolic_blood_pressure.value, 82.0);
}

#[test]
fn goal_group_yields_nothing() {
    let group = json!({
        "category": 2,
        "measures": [
            { "type": 10, "value": 120, "unit": 0 },
            { "type": 9, "value": 80, "unit": 0 }
        ]
    });

    assert_eq!(BloodPressureMapper.map_group(&group, "UTC").unwrap(), None);
}

#[test]
fn unusable_component_magnitude_yields_nothing() {
    let group = json!({
        "measures": [
            { "type": 10, "value": 120, "unit": 0 },
            { "type": 9, "value": 80 }
        ]
    });

    assert_eq!(BloodPressureMapper.map_group(&group, "UTC").unwrap(), None);
}

#[test]
fn missing_measures_field_is_a_hard_failure() {
    let group = json!({ "date": 1_609_459_200 });

    assert_eq!(
        BloodPressureMapper.map_group(&group, "UTC"),
        Err(MappingError::missing("measures"))
    );
}

#[test]
fn applies_unit_exponent_to_both_components() {
    let group = json!({
        "measures": [
            { "type": 10, "value": 1200, "unit": -1 },
            { "type": 9, "value": 800, "unit": -1 }
        ]
    });

    let point = BloodPressureMapper.map_group(&group, "UTC").unwrap().unwrap();
    assert_eq!(point.body.systolic_blood_pressure.value, 120.0);
    assert_eq!(point.body.diastolic_blood_pressure.value, 80.0);
}
