// ABOUTME: Canonical data point wrapper and acquisition provenance models
// ABOUTME: Immutable output record pairing a measure body with time, note, and provenance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Provenance marker distinguishing device-sensed values from
/// manually entered or computed ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    /// Captured by a device sensor
    #[serde(rename = "sensed")]
    Sensed,
    /// Entered by the user or derived by the provider
    #[serde(rename = "self-reported")]
    SelfReported,
}

/// Where a data point came from: source system, external identifier,
/// and how the value was acquired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionProvenance {
    /// Fixed name of the source system (one constant per provider)
    pub source_name: String,
    /// Provider-assigned identifier of the originating record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Sensed vs. self-reported marker, when the provider distinguishes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<Modality>,
}

impl AcquisitionProvenance {
    /// Create provenance for a named source with no external id or modality
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            external_id: None,
            modality: None,
        }
    }

    /// Attach an optional external identifier; absent stays absent
    #[must_use]
    pub fn with_external_id(mut self, external_id: Option<String>) -> Self {
        self.external_id = external_id;
        self
    }

    /// Attach an optional modality; absent stays absent
    #[must_use]
    pub const fn with_modality(mut self, modality: Option<Modality>) -> Self {
        self.modality = modality;
        self
    }
}

/// The canonical, immutable output record of a mapping call
///
/// Wraps one typed measure body with an optional zoned effective time, an
/// optional free-text user note, and acquisition provenance. Constructed
/// fresh per mapping call; the core holds no persistent state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint<M> {
    /// The measure body (e.g., [`super::measures::BodyWeight`])
    pub body: M,
    /// When the measurement took effect, resolved in the user's timezone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_time: Option<DateTime<FixedOffset>>,
    /// Free-text note attached by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
    /// Acquisition provenance of the measurement
    pub provenance: AcquisitionProvenance,
}

impl<M> DataPoint<M> {
    /// Create a data point from a measure body and its provenance
    #[must_use]
    pub const fn new(body: M, provenance: AcquisitionProvenance) -> Self {
        Self {
            body,
            effective_time: None,
            user_notes: None,
            provenance,
        }
    }

    /// Attach an optional effective time; absent stays absent
    #[must_use]
    pub const fn with_effective_time(
        mut self,
        effective_time: Option<DateTime<FixedOffset>>,
    ) -> Self {
        self.effective_time = effective_time;
        self
    }

    /// Attach an optional user note; absent stays absent
    #[must_use]
    pub fn with_user_notes(mut self, user_notes: Option<String>) -> Self {
        self.user_notes = user_notes;
        self
    }
}
