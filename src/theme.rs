// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and handle sizes
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// HANDLE COLORS -- Anchor and control point fills and strokes
// ============================================================================
const ANCHOR_FILL: Color = Color::from_rgb8(0xff, 0x00, 0x00);
const CONTROL_FILL: Color = Color::from_rgb8(0x00, 0xff, 0x00);
const HANDLE_STROKE: Color = Color::from_rgb8(0x33, 0x33, 0x33);

// ============================================================================
// HANDLE GEOMETRY
// ============================================================================
const ANCHOR_RADIUS: f64 = 6.0;
const CONTROL_RADIUS: f64 = 4.0;
const HANDLE_STROKE_WIDTH: f64 = 1.0;

// ============================================================================
// EDIT BADGE
// ============================================================================
const BADGE_FILL: Color = Color::from_rgb8(0xf4, 0x43, 0x36);
const BADGE_GLYPH: Color = Color::from_rgb8(0xff, 0xff, 0xff);

/// Anchor handle fill (on-curve points)
pub const fn anchor_fill() -> Color {
    ANCHOR_FILL
}

/// Control handle fill (off-curve points)
pub const fn control_fill() -> Color {
    CONTROL_FILL
}

/// Stroke color shared by all handles
pub const fn handle_stroke() -> Color {
    HANDLE_STROKE
}

/// Anchor handle radius (screen pixels)
pub const fn anchor_radius() -> f64 {
    ANCHOR_RADIUS
}

/// Control handle radius (screen pixels)
pub const fn control_radius() -> f64 {
    CONTROL_RADIUS
}

/// Stroke width shared by all handles
pub const fn handle_stroke_width() -> f64 {
    HANDLE_STROKE_WIDTH
}

/// Edit badge background fill
pub const fn badge_fill() -> Color {
    BADGE_FILL
}

/// Edit badge glyph (cross) color
pub const fn badge_glyph() -> Color {
    BADGE_GLYPH
}
