// ABOUTME: Canonical health measurement schema for the Vital platform
// ABOUTME: Foundation crate with data point models, unit types, and mapping errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

#![deny(unsafe_code)]

//! # Vital Core
//!
//! Foundation crate providing the canonical measurement schema that every
//! provider payload is normalized into. This crate has no knowledge of any
//! particular provider; it only defines the output contract and the error
//! taxonomy shared by all mappers.
//!
//! ## Modules
//!
//! - **models**: canonical data point, unit values, and concrete measures
//! - **errors**: hard-failure taxonomy for structural mapping problems

/// Hard-failure error taxonomy for measurement mapping
pub mod errors;

/// Canonical data models (`DataPoint`, unit values, measures)
pub mod models;

pub use errors::MappingError;
pub use models::{
    AcquisitionProvenance, BloodPressure, BodyHeight, BodyTemperature, BodyWeight, DataPoint,
    HeartRate, LengthUnit, MassUnit, Modality, OxygenSaturation, PercentUnit, PressureUnit,
    TemperatureUnit, TemporalRateUnit, UnitValue,
};
