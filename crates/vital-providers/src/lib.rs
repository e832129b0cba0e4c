// ABOUTME: Health data provider mapping implementations for the Vital platform
// ABOUTME: JSON node accessors and per-provider measurement group mappers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

#![deny(unsafe_code)]

//! Provider mapping implementations.
//!
//! Each provider exposes its own JSON shape, unit conventions, and ambiguity
//! rules; this crate absorbs that heterogeneity behind the canonical schema
//! defined in `vital-core`. Mapping is a pure, synchronous, one-shot
//! transform: the caller hands in an already-fetched response tree plus a
//! resolved IANA timezone name, and receives zero or one canonical data point
//! per group and quantity.
//!
//! Fetching, authentication, pagination, and persistence all live outside
//! this crate.

// Re-export vital-core modules so callers can use `vital_providers::models::*` etc.
pub use vital_core::errors;
pub use vital_core::models;

/// Safe typed extraction from semi-structured JSON trees
pub mod json;

// Provider implementations (conditionally compiled)

/// Withings body-measure endpoint mappers
#[cfg(feature = "provider-withings")]
pub mod withings;

pub use vital_core::MappingError;
