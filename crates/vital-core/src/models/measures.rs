// ABOUTME: Concrete canonical measure bodies carried inside a DataPoint
// ABOUTME: Body weight, height, blood pressure, heart rate, SpO2, and temperature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

use serde::{Deserialize, Serialize};

use super::units::{
    LengthUnit, MassUnit, PercentUnit, PressureUnit, TemperatureUnit, TemporalRateUnit, UnitValue,
};

/// Body weight measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyWeight {
    /// Weight as a mass unit value
    pub body_weight: UnitValue<MassUnit>,
}

impl BodyWeight {
    /// Create a body weight measure from a magnitude in kilograms
    #[must_use]
    pub const fn in_kilograms(value: f64) -> Self {
        Self {
            body_weight: UnitValue::new(MassUnit::Kilogram, value),
        }
    }
}

/// Body height measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyHeight {
    /// Height as a length unit value
    pub body_height: UnitValue<LengthUnit>,
}

impl BodyHeight {
    /// Create a body height measure from a magnitude in meters
    #[must_use]
    pub const fn in_meters(value: f64) -> Self {
        Self {
            body_height: UnitValue::new(LengthUnit::Meter, value),
        }
    }
}

/// Blood pressure measure combining the systolic and diastolic components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic component in mmHg
    pub systolic_blood_pressure: UnitValue<PressureUnit>,
    /// Diastolic component in mmHg
    pub diastolic_blood_pressure: UnitValue<PressureUnit>,
}

impl BloodPressure {
    /// Create a blood pressure measure from systolic and diastolic magnitudes in mmHg
    #[must_use]
    pub const fn in_mm_hg(systolic: f64, diastolic: f64) -> Self {
        Self {
            systolic_blood_pressure: UnitValue::new(PressureUnit::MmHg, systolic),
            diastolic_blood_pressure: UnitValue::new(PressureUnit::MmHg, diastolic),
        }
    }
}

/// Heart rate measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRate {
    /// Rate as a temporal rate unit value
    pub heart_rate: UnitValue<TemporalRateUnit>,
}

impl HeartRate {
    /// Create a heart rate measure from a magnitude in beats per minute
    #[must_use]
    pub const fn in_beats_per_minute(value: f64) -> Self {
        Self {
            heart_rate: UnitValue::new(TemporalRateUnit::BeatsPerMinute, value),
        }
    }
}

/// Blood oxygen saturation (`SpO2`) measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OxygenSaturation {
    /// Saturation as a percent unit value
    pub oxygen_saturation: UnitValue<PercentUnit>,
}

impl OxygenSaturation {
    /// Create an oxygen saturation measure from a magnitude in percent
    #[must_use]
    pub const fn in_percent(value: f64) -> Self {
        Self {
            oxygen_saturation: UnitValue::new(PercentUnit::Percent, value),
        }
    }
}

/// Body temperature measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyTemperature {
    /// Temperature as a temperature unit value
    pub body_temperature: UnitValue<TemperatureUnit>,
}

impl BodyTemperature {
    /// Create a body temperature measure from a magnitude in degrees Celsius
    #[must_use]
    pub const fn in_celsius(value: f64) -> Self {
        Self {
            body_temperature: UnitValue::new(TemperatureUnit::Celsius, value),
        }
    }
}
