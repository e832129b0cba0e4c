// ABOUTME: Quantity-specific mappers from Withings measure groups to canonical data points
// ABOUTME: One shared last-match scan composed with a per-quantity code and constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

//! Data point mappers for the Withings body-measure endpoint.
//!
//! Each mapper recognizes one physiological quantity inside a measurement
//! group and produces at most one canonical data point per call. The shared
//! algorithm is: skip goal groups, scan the entry list for the target type
//! code (last match wins), convert the stored magnitude by its power-of-ten
//! exponent, and assemble the result with group-level time, note, and
//! provenance. A group that simply does not carry the quantity yields
//! `Ok(None)`, never an error.

use serde_json::Value;
use tracing::{debug, trace};
use vital_core::models::{
    AcquisitionProvenance, BloodPressure, BodyHeight, BodyTemperature, BodyWeight, DataPoint,
    HeartRate, OxygenSaturation,
};
use vital_core::MappingError;

use crate::json::{required_array, required_i64, required_node, required_str};

use super::group::MeasureGroup;
use super::measure::BodyMeasureType;
use super::RESOURCE_API_SOURCE_NAME;

/// A mapper from one Withings measurement group to one canonical measure.
///
/// Implementations supply the quantity-specific recognition and conversion;
/// the group-level extraction is shared through [`MeasureGroup`]. Mappers
/// are stateless and freely shareable across threads.
pub trait BodyMeasureMapper {
    /// The canonical measure body this mapper produces
    type Measure;

    /// Map one `measuregrps` node to a data point, if the group carries
    /// this mapper's quantity.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingField`] / [`MappingError::TypeMismatch`]
    /// when the group is structurally unprocessable (no entry list, entry
    /// without a type code), and [`MappingError::InvalidTimeZone`] when a
    /// timestamp is present but `timezone_name` cannot be resolved.
    fn map_group(
        &self,
        node: &Value,
        timezone_name: &str,
    ) -> Result<Option<DataPoint<Self::Measure>>, MappingError>;
}

/// Assemble a canonical data point from a converted measure body and the
/// group-level metadata. Every optional passes through present-or-absent.
fn assemble<M>(
    group: &MeasureGroup<'_>,
    timezone_name: &str,
    body: M,
) -> Result<DataPoint<M>, MappingError> {
    let provenance = AcquisitionProvenance::new(RESOURCE_API_SOURCE_NAME)
        .with_external_id(group.group_id())
        .with_modality(group.modality());
    Ok(DataPoint::new(body, provenance)
        .with_effective_time(group.effective_time(timezone_name)?)
        .with_user_notes(group.comment().map(ToOwned::to_owned)))
}

/// Shared mapping path for quantities carried in a single entry.
fn map_single_measure<M>(
    node: &Value,
    timezone_name: &str,
    target: BodyMeasureType,
    build: impl FnOnce(f64) -> M,
) -> Result<Option<DataPoint<M>>, MappingError> {
    let group = MeasureGroup::new(node);
    if group.is_goal() {
        trace!(measure_type = ?target, "skipping goal group");
        return Ok(None);
    }
    let Some(entry) = group.find_last(target)? else {
        return Ok(None);
    };
    let Some(value) = MeasureGroup::converted_value(entry) else {
        trace!(measure_type = ?target, "matched entry has no usable magnitude");
        return Ok(None);
    };
    assemble(&group, timezone_name, build(value)).map(Some)
}

/// Maps body weight entries (type code 1) to kilogram data points
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyWeightMapper;

impl BodyMeasureMapper for BodyWeightMapper {
    type Measure = BodyWeight;

    fn map_group(
        &self,
        node: &Value,
        timezone_name: &str,
    ) -> Result<Option<DataPoint<BodyWeight>>, MappingError> {
        map_single_measure(
            node,
            timezone_name,
            BodyMeasureType::BodyWeight,
            BodyWeight::in_kilograms,
        )
    }
}

/// Maps body height entries (type code 4) to meter data points
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyHeightMapper;

impl BodyMeasureMapper for BodyHeightMapper {
    type Measure = BodyHeight;

    fn map_group(
        &self,
        node: &Value,
        timezone_name: &str,
    ) -> Result<Option<DataPoint<BodyHeight>>, MappingError> {
        map_single_measure(
            node,
            timezone_name,
            BodyMeasureType::BodyHeight,
            BodyHeight::in_meters,
        )
    }
}

/// Maps heart pulse entries (type code 11) to beats-per-minute data points
#[derive(Debug, Clone, Copy, Default)]
pub struct HeartRateMapper;

impl BodyMeasureMapper for HeartRateMapper {
    type Measure = HeartRate;

    fn map_group(
        &self,
        node: &Value,
        timezone_name: &str,
    ) -> Result<Option<DataPoint<HeartRate>>, MappingError> {
        map_single_measure(
            node,
            timezone_name,
            BodyMeasureType::HeartRate,
            HeartRate::in_beats_per_minute,
        )
    }
}

/// Maps `SpO2` entries (type code 54) to percent data points
#[derive(Debug, Clone, Copy, Default)]
pub struct OxygenSaturationMapper;

impl BodyMeasureMapper for OxygenSaturationMapper {
    type Measure = OxygenSaturation;

    fn map_group(
        &self,
        node: &Value,
        timezone_name: &str,
    ) -> Result<Option<DataPoint<OxygenSaturation>>, MappingError> {
        map_single_measure(
            node,
            timezone_name,
            BodyMeasureType::OxygenSaturation,
            OxygenSaturation::in_percent,
        )
    }
}

/// Maps body temperature entries (type code 71) to Celsius data points
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyTemperatureMapper;

impl BodyMeasureMapper for BodyTemperatureMapper {
    type Measure = BodyTemperature;

    fn map_group(
        &self,
        node: &Value,
        timezone_name: &str,
    ) -> Result<Option<DataPoint<BodyTemperature>>, MappingError> {
        map_single_measure(
            node,
            timezone_name,
            BodyMeasureType::BodyTemperature,
            BodyTemperature::in_celsius,
        )
    }
}

/// Maps paired systolic (type code 10) and diastolic (type code 9) entries
/// to one blood pressure data point.
///
/// Both components must be present in the group; a lone systolic or
/// diastolic entry yields `Ok(None)`. Duplicates of either code resolve
/// last-match-wins independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct BloodPressureMapper;

impl BodyMeasureMapper for BloodPressureMapper {
    type Measure = BloodPressure;

    fn map_group(
        &self,
        node: &Value,
        timezone_name: &str,
    ) -> Result<Option<DataPoint<BloodPressure>>, MappingError> {
        let group = MeasureGroup::new(node);
        if group.is_goal() {
            trace!("skipping goal group");
            return Ok(None);
        }
        let mut systolic = None;
        let mut diastolic = None;
        for entry in group.measures()? {
            let code = required_i64(entry, "type")?;
            if code == BodyMeasureType::SystolicBloodPressure.code() {
                systolic = Some(entry);
            } else if code == BodyMeasureType::DiastolicBloodPressure.code() {
                diastolic = Some(entry);
            }
        }
        let (Some(systolic), Some(diastolic)) = (systolic, diastolic) else {
            return Ok(None);
        };
        let (Some(systolic), Some(diastolic)) = (
            MeasureGroup::converted_value(systolic),
            MeasureGroup::converted_value(diastolic),
        ) else {
            trace!("matched blood pressure entries have no usable magnitude");
            return Ok(None);
        };
        assemble(
            &group,
            timezone_name,
            BloodPressure::in_mm_hg(systolic, diastolic),
        )
        .map(Some)
    }
}

/// Map a whole body-measure endpoint response through one mapper.
///
/// Reads the response `body` node, the provider-reported `timezone` name,
/// and the `measuregrps` array; maps every group and collects the data
/// points that were produced. Groups that yield nothing are skipped
/// silently.
///
/// # Errors
///
/// Returns [`MappingError::MissingField`] / [`MappingError::TypeMismatch`]
/// if the response lacks the `body`, `timezone`, or `measuregrps` fields,
/// and propagates the first hard failure raised by the mapper on any group.
pub fn map_body_measure_response<P: BodyMeasureMapper>(
    response: &Value,
    mapper: &P,
) -> Result<Vec<DataPoint<P::Measure>>, MappingError> {
    let body = required_node(response, "body")?;
    let timezone_name = required_str(body, "timezone")?;
    let groups = required_array(body, "measuregrps")?;
    let mut points = Vec::new();
    for node in groups {
        if let Some(point) = mapper.map_group(node, timezone_name)? {
            points.push(point);
        }
    }
    debug!(
        groups = groups.len(),
        points = points.len(),
        "mapped body measure response"
    );
    Ok(points)
}
