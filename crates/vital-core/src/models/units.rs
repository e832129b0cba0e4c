// ABOUTME: Physical unit enums and the generic unit-value pair
// ABOUTME: Serializes with canonical unit strings (kg, m, mmHg, beats/min, C, %)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

use serde::{Deserialize, Serialize};

/// A converted numeric magnitude paired with a fixed physical unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitValue<U> {
    /// Canonical unit of the magnitude
    pub unit: U,
    /// Converted magnitude in the canonical unit
    pub value: f64,
}

impl<U> UnitValue<U> {
    /// Create a unit value from a unit and a converted magnitude
    #[must_use]
    pub const fn new(unit: U, value: f64) -> Self {
        Self { unit, value }
    }
}

/// Mass units for body composition measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    /// Kilograms
    #[serde(rename = "kg")]
    Kilogram,
}

/// Length units for body dimension measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Meters
    #[serde(rename = "m")]
    Meter,
}

/// Pressure units for blood pressure measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    /// Millimeters of mercury
    #[serde(rename = "mmHg")]
    MmHg,
}

/// Temporal rate units for heart rate measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemporalRateUnit {
    /// Beats per minute
    #[serde(rename = "beats/min")]
    BeatsPerMinute,
}

/// Temperature units for body temperature measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[serde(rename = "C")]
    Celsius,
}

/// Percentage unit for saturation measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PercentUnit {
    /// Percent of a whole
    #[serde(rename = "%")]
    Percent,
}
