// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`.

// ============================================================================
// EDITOR SETTINGS
// ============================================================================
/// Minimum zoom level (2% of original size)
const MIN_ZOOM: f64 = 0.02;

/// Maximum zoom level (50x original size)
const MAX_ZOOM: f64 = 50.0;

// ============================================================================
// HIT TESTING SETTINGS
// ============================================================================
/// Maximum distance (screen pixels) from a handle center that still
/// counts as a click on that handle
const CLICK_DISTANCE: f64 = 8.0;

// ============================================================================
// EDIT BADGE SETTINGS
// ============================================================================
// The clickable "edit" affordance drawn at the top-right corner of a
// path's bounding box.

/// Side length of the badge square (screen pixels)
const BADGE_SIZE: f64 = 24.0;

/// Vertical offset of the badge below the bounding box corner
const BADGE_OFFSET_Y: f64 = 16.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Editor settings (zoom, viewport, etc.)
pub mod editor {
    /// Minimum zoom level (2% of original size)
    pub const MIN_ZOOM: f64 = super::MIN_ZOOM;

    /// Maximum zoom level (50x original size)
    pub const MAX_ZOOM: f64 = super::MAX_ZOOM;
}

/// Hit-test tolerances
pub mod hit_test {
    /// Click tolerance around a handle center (screen pixels)
    pub const MIN_CLICK_DISTANCE: f64 = super::CLICK_DISTANCE;
}

/// Edit badge placement
pub mod badge {
    /// Side length of the badge square (screen pixels)
    pub const SIZE: f64 = super::BADGE_SIZE;

    /// Vertical offset below the bounding box corner
    pub const OFFSET_Y: f64 = super::BADGE_OFFSET_Y;
}
