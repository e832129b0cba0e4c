// ABOUTME: Reader over one Withings measurement group node
// ABOUTME: Shared metadata extraction reused by every quantity-specific mapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use chrono_tz::Tz;
use serde_json::Value;
use vital_core::{MappingError, Modality};

use crate::json::{optional_f64, optional_i64, optional_str, required_array, required_i64};

use super::constants::{
    ATTRIB_DEVICE_AMBIGUOUS_USER, ATTRIB_DEVICE_KNOWN_USER, ATTRIB_MANUAL_ENTRY,
    ATTRIB_MANUAL_ENTRY_AT_CREATION, CATEGORY_USER_OBJECTIVE,
};
use super::measure::{actual_value, BodyMeasureType};

/// Borrow-wrapper over one node from the `measuregrps` array.
///
/// Exposes the group-level metadata every quantity-specific mapper needs:
/// the ordered entry list, the goal and attribution flags, the zoned
/// effective time, the free-text comment, and the external group id. The
/// wrapped node is read-only; a reader is constructed fresh per mapping call
/// and holds no state of its own.
#[derive(Debug)]
pub struct MeasureGroup<'a> {
    node: &'a Value,
}

impl<'a> MeasureGroup<'a> {
    /// Wrap one measurement group node
    #[must_use]
    pub const fn new(node: &'a Value) -> Self {
        Self { node }
    }

    /// The ordered entry list of this group.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MissingField`] if the `measures` field is
    /// absent, or [`MappingError::TypeMismatch`] if it is not an array. The
    /// entry list is a structural requirement of every group; a group
    /// without one is unprocessable.
    pub fn measures(&self) -> Result<&'a [Value], MappingError> {
        required_array(self.node, "measures")
    }

    /// Find the last entry in list order whose `type` code matches `target`.
    ///
    /// Duplicate codes inside one group resolve to the final occurrence.
    /// This preserves the provider contract's last-match-wins behavior; see
    /// DESIGN.md for why first-match might be the more defensible policy.
    ///
    /// # Errors
    ///
    /// Propagates the structural errors of [`Self::measures`], and returns
    /// [`MappingError::MissingField`] / [`MappingError::TypeMismatch`] if an
    /// entry lacks a usable `type` code.
    pub fn find_last(&self, target: BodyMeasureType) -> Result<Option<&'a Value>, MappingError> {
        let mut matched = None;
        for entry in self.measures()? {
            if required_i64(entry, "type")? == target.code() {
                matched = Some(entry);
            }
        }
        Ok(matched)
    }

    /// Whether this group is a user-set objective rather than an actual
    /// measurement. Absent category resolves to `false`.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        optional_i64(self.node, "category") == Some(CATEGORY_USER_OBJECTIVE)
    }

    /// How the measurement was acquired, when the attribution marker allows
    /// telling. Absent or unrecognized markers resolve to `None`.
    #[must_use]
    pub fn modality(&self) -> Option<Modality> {
        match optional_i64(self.node, "attrib") {
            Some(ATTRIB_DEVICE_KNOWN_USER | ATTRIB_DEVICE_AMBIGUOUS_USER) => Some(Modality::Sensed),
            Some(ATTRIB_MANUAL_ENTRY | ATTRIB_MANUAL_ENTRY_AT_CREATION) => {
                Some(Modality::SelfReported)
            }
            _ => None,
        }
    }

    /// The group's effective time, resolved in the caller-supplied IANA zone.
    ///
    /// The `date` field holds epoch seconds. An absent date yields `Ok(None)`
    /// without touching the zone name; conversion only happens when a
    /// timestamp is actually present. An epoch outside chrono's representable
    /// range also degrades to `Ok(None)`: a nonsensical timestamp is treated
    /// like other malformed optional data and never aborts the group.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidTimeZone`] if a date is present and
    /// `timezone_name` is not a known IANA zone.
    pub fn effective_time(
        &self,
        timezone_name: &str,
    ) -> Result<Option<DateTime<FixedOffset>>, MappingError> {
        let Some(epoch_seconds) = optional_i64(self.node, "date") else {
            return Ok(None);
        };
        let tz: Tz = timezone_name
            .parse()
            .map_err(|_| MappingError::invalid_timezone(timezone_name))?;
        Ok(Utc
            .timestamp_opt(epoch_seconds, 0)
            .single()
            .map(|utc| utc.with_timezone(&tz).fixed_offset()))
    }

    /// The free-text comment attached to this group, if any
    #[must_use]
    pub fn comment(&self) -> Option<&'a str> {
        optional_str(self.node, "comment")
    }

    /// The provider-assigned group identifier (`grpid`), if any
    #[must_use]
    pub fn group_id(&self) -> Option<String> {
        let id = optional_i64(self.node, "grpid")?;
        Some(id.to_string())
    }

    /// The converted magnitude of one entry: `value * 10^unit`.
    ///
    /// Resolves to `None` when the entry lacks a usable magnitude or unit
    /// exponent; one malformed entry never aborts the whole group.
    #[must_use]
    pub fn converted_value(entry: &Value) -> Option<f64> {
        let raw = optional_f64(entry, "value")?;
        let exponent = optional_i64(entry, "unit")?;
        Some(actual_value(raw, exponent as i32))
    }
}
