// ABOUTME: Withings API constants for group categories and attribution markers
// ABOUTME: Values documented by the Withings body-measure endpoint contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vital Health

//! Flag values from the Withings body-measure endpoint.

/// Group category: an actual measurement
pub const CATEGORY_REAL_MEASUREMENT: i64 = 1;

/// Group category: a user-set objective (goal), never an actual measurement
pub const CATEGORY_USER_OBJECTIVE: i64 = 2;

/// Attribution: captured by a device for a known user
pub const ATTRIB_DEVICE_KNOWN_USER: i64 = 0;

/// Attribution: captured by a device for an ambiguous user
pub const ATTRIB_DEVICE_AMBIGUOUS_USER: i64 = 1;

/// Attribution: entered manually by the user
pub const ATTRIB_MANUAL_ENTRY: i64 = 2;

/// Attribution: entered manually while creating the user profile
pub const ATTRIB_MANUAL_ENTRY_AT_CREATION: i64 = 4;
