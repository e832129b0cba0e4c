// ABOUTME: Error types for measurement payload mapping
// ABOUTME: Distinguishes structural hard failures from soft omission (Ok(None))
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

//! Hard-failure taxonomy for measurement mapping.
//!
//! Mapping has two distinct result channels. Recoverable gaps (the target
//! quantity is absent from a group, a group is a goal entry, a matched entry
//! has an unusable magnitude) resolve to `Ok(None)` and never raise an error.
//! Structural problems surface as a [`MappingError`] and must be handled by
//! the caller, which decides whether to skip the group or abort a batch.

/// Errors raised when a provider payload is structurally unprocessable
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// A structurally required field is absent from the payload node
    #[error("missing required field '{field}'")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A required field exists but has the wrong JSON shape
    #[error("field '{field}' is not {expected}")]
    TypeMismatch {
        /// Name of the malformed field
        field: &'static str,
        /// Description of the expected shape (e.g., "a number")
        expected: &'static str,
    },

    /// The caller-supplied timezone name is not a known IANA zone
    #[error("invalid timezone name '{name}'")]
    InvalidTimeZone {
        /// The unresolvable zone name
        name: String,
    },
}

impl MappingError {
    /// Helper: build a `MissingField` error for a field name.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Helper: build a `TypeMismatch` error for a field and expected shape.
    #[must_use]
    pub const fn mismatch(field: &'static str, expected: &'static str) -> Self {
        Self::TypeMismatch { field, expected }
    }

    /// Helper: build an `InvalidTimeZone` error for an unresolvable name.
    pub fn invalid_timezone(name: impl Into<String>) -> Self {
        Self::InvalidTimeZone { name: name.into() }
    }
}
