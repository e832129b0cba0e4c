// ABOUTME: Withings body measure type codes and stored-value unit conversion
// ABOUTME: Raw entry values are integers scaled by a power-of-ten exponent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

/// Body measure type codes used in the `type` field of a measure entry
///
/// Withings reports every quantity in one shared entry list; the code
/// identifies which physiological quantity an entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyMeasureType {
    /// Body weight, stored in kilograms
    BodyWeight,
    /// Body height, stored in meters
    BodyHeight,
    /// Diastolic blood pressure, stored in mmHg
    DiastolicBloodPressure,
    /// Systolic blood pressure, stored in mmHg
    SystolicBloodPressure,
    /// Heart pulse, stored in beats per minute
    HeartRate,
    /// Blood oxygen saturation, stored in percent
    OxygenSaturation,
    /// Body temperature, stored in degrees Celsius
    BodyTemperature,
}

impl BodyMeasureType {
    /// The numeric `type` code the provider uses for this quantity
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::BodyWeight => 1,
            Self::BodyHeight => 4,
            Self::DiastolicBloodPressure => 9,
            Self::SystolicBloodPressure => 10,
            Self::HeartRate => 11,
            Self::OxygenSaturation => 54,
            Self::BodyTemperature => 71,
        }
    }
}

/// Convert a raw stored magnitude and its power-of-ten exponent into the
/// actual value: `raw * 10^exponent`.
///
/// Deterministic, no failure modes; the exponent range is unconstrained.
#[must_use]
pub fn actual_value(raw: f64, exponent: i32) -> f64 {
    raw * 10f64.powi(exponent)
}
