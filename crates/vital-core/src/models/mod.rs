// ABOUTME: Canonical data models for normalized health measurements
// ABOUTME: Data point wrapper, unit value types, and concrete measure bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

//! Canonical measurement models.
//!
//! Every provider payload is normalized into a [`DataPoint`] carrying one
//! typed measure body, an optional zoned effective time, an optional
//! user note, and acquisition provenance. Consumers of these models never
//! see provider-specific structure.

/// Data point wrapper and acquisition provenance
pub mod datapoint;

/// Concrete measure bodies (body weight, blood pressure, etc.)
pub mod measures;

/// Physical unit enums and the unit-value pair
pub mod units;

pub use datapoint::{AcquisitionProvenance, DataPoint, Modality};
pub use measures::{
    BloodPressure, BodyHeight, BodyTemperature, BodyWeight, HeartRate, OxygenSaturation,
};
pub use units::{
    LengthUnit, MassUnit, PercentUnit, PressureUnit, TemperatureUnit, TemporalRateUnit, UnitValue,
};
