// ABOUTME: Withings body-measure endpoint mapping (measure?action=getmeas)
// ABOUTME: Group reader, type codes, unit conversion, and per-quantity mappers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

//! Withings provider mapping.
//!
//! The Withings body-measure endpoint reports measurement groups: bundles of
//! co-timed entries sharing one timestamp, an optional free-text comment, an
//! optional group identifier, a real-vs-objective category, and an
//! attribution marker. Each entry is a `(type, value, unit)` triple where
//! `unit` is a power-of-ten exponent applied to the stored integer `value`.
//!
//! The mappers here recognize one physiological quantity each and convert the
//! matching entry into a canonical data point. Groups that do not carry the
//! quantity of interest yield nothing rather than an error.

/// Withings flag and category constants
pub mod constants;

/// Group reader over one `measuregrps` node
pub mod group;

/// Per-quantity data point mappers and the response walker
pub mod mappers;

/// Body measure type codes and unit conversion
pub mod measure;

pub use group::MeasureGroup;
pub use mappers::{
    map_body_measure_response, BloodPressureMapper, BodyHeightMapper, BodyMeasureMapper,
    BodyTemperatureMapper, BodyWeightMapper, HeartRateMapper, OxygenSaturationMapper,
};
pub use measure::{actual_value, BodyMeasureType};

/// Source name recorded in the provenance of every Withings data point
pub const RESOURCE_API_SOURCE_NAME: &str = "Withings Resource API";
