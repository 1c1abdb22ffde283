// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Viewport transformation between canvas space and screen space.
//!
//! The host owns the real viewport; it mirrors the current zoom and pan
//! into the session through this value so handle placement and hit
//! testing agree with what is actually on screen.

use crate::settings;
use kurbo::{Point, Vec2};

/// Zoom and pan applied on top of canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Uniform zoom factor (1.0 = 100%)
    pub zoom: f64,
    /// Screen-space pan offset
    pub pan: Vec2,
}

impl ViewPort {
    /// Identity viewport (no zoom, no pan)
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }

    /// Set the zoom, clamped to the configured bounds
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(settings::editor::MIN_ZOOM, settings::editor::MAX_ZOOM);
    }

    /// Canvas coordinates to screen coordinates
    pub fn to_screen(&self, pos: Point) -> Point {
        Point::new(pos.x * self.zoom + self.pan.x, pos.y * self.zoom + self.pan.y)
    }

    /// Screen coordinates back to canvas coordinates
    pub fn to_canvas(&self, pos: Point) -> Point {
        Point::new((pos.x - self.pan.x) / self.zoom, (pos.y - self.pan.y) / self.zoom)
    }
}

impl Default for ViewPort {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trip() {
        let vp = ViewPort::new();
        let p = Point::new(12.0, -3.5);
        assert_eq!(vp.to_canvas(vp.to_screen(p)), p);
    }

    #[test]
    fn zoom_and_pan_round_trip() {
        let vp = ViewPort {
            zoom: 2.5,
            pan: Vec2::new(40.0, -10.0),
        };
        let p = Point::new(8.0, 16.0);
        let screen = vp.to_screen(p);
        assert_eq!(screen, Point::new(60.0, 30.0));
        assert_eq!(vp.to_canvas(screen), p);
    }

    #[test]
    fn set_zoom_clamps_to_bounds() {
        let mut vp = ViewPort::new();
        vp.set_zoom(0.0001);
        assert_eq!(vp.zoom, settings::editor::MIN_ZOOM);
        vp.set_zoom(1e6);
        assert_eq!(vp.zoom, settings::editor::MAX_ZOOM);
    }
}
