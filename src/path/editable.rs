// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! One registered path: geometry plus display placement and
//! interactivity flags.
//!
//! `EditablePath` is what the importer hands to the session for every
//! shape in the document. The placement (left/top offset, per-axis
//! scale, rotation) comes from the document's resolved transform; the
//! interactivity flags are how the session makes a path inert while it
//! is being edited through its handles.

use crate::model::PathId;
use crate::path::command::{self, PathCommand};
use crate::settings;
use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Color;

/// Selection/interaction flags for a registered path.
///
/// While a path is in edit mode it is manipulated only through its
/// handles: it stays hit-testable (so clicks on it do not count as
/// background clicks) but cannot be selected or moved directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interactivity {
    /// Whether the path can be selected and moved as a whole
    pub selectable: bool,
    /// Whether the host should draw the path's transform controls
    pub show_controls: bool,
    /// Whether the host should draw the path's selection border
    pub show_borders: bool,
    /// Whether the path participates in hit testing at all
    pub hit_enabled: bool,
}

impl Default for Interactivity {
    fn default() -> Self {
        Self {
            selectable: true,
            show_controls: true,
            show_borders: true,
            hit_enabled: true,
        }
    }
}

impl Interactivity {
    /// Flags for the path currently being edited through handles
    pub fn locked_for_editing() -> Self {
        Self {
            selectable: false,
            show_controls: false,
            show_borders: false,
            hit_enabled: true,
        }
    }
}

/// An imported path registered with the edit session
#[derive(Debug, Clone)]
pub struct EditablePath {
    /// Stable identifier; a fresh id is minted when the path object is
    /// replaced after a completed edit
    pub id: PathId,

    /// Absolute command list in the path's own coordinate space
    pub commands: Vec<PathCommand>,

    /// Horizontal display offset of the path on the canvas
    pub left: f64,

    /// Vertical display offset of the path on the canvas
    pub top: f64,

    /// Horizontal scale factor from the document transform
    pub scale_x: f64,

    /// Vertical scale factor from the document transform
    pub scale_y: f64,

    /// Rotation in radians from the document transform.
    ///
    /// Stored but not applied to handle placement unless the session's
    /// `rotate_handles` option is set.
    pub rotation: f64,

    /// Fill color, if the document specified one
    pub fill: Option<Color>,

    /// Current interaction flags
    pub interactivity: Interactivity,
}

impl EditablePath {
    /// Create a path that renders at its own coordinates.
    ///
    /// The placement starts at the geometry's minimum point, which
    /// makes the display mapping the identity until the host moves or
    /// scales the path.
    pub fn new(commands: Vec<PathCommand>) -> Self {
        let min = command::smallest_point(&commands);
        Self {
            id: PathId::next(),
            commands,
            left: min.x,
            top: min.y,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            fill: None,
            interactivity: Interactivity::default(),
        }
    }

    /// Set the display placement taken from a document transform
    pub fn with_placement(mut self, left: f64, top: f64, scale_x: f64, scale_y: f64) -> Self {
        self.left = left;
        self.top = top;
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Set the fill color
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Whether the last command closes the path
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Serialize the current geometry to a path-data string
    pub fn path_data(&self) -> String {
        command::write_path_data(&self.commands)
    }

    /// Convert to a kurbo `BezPath` in the path's own coordinate space
    pub fn to_bezpath(&self) -> BezPath {
        let mut bez = BezPath::new();
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => bez.move_to(*p),
                PathCommand::LineTo(p) => bez.line_to(*p),
                PathCommand::CurveTo { c1, c2, to } => bez.curve_to(*c1, *c2, *to),
                PathCommand::Close => bez.close_path(),
            }
        }
        bez
    }

    /// Bounding box on the canvas, with scale and offset applied.
    ///
    /// Uses the same coordinate mapping as handle projection, so the
    /// edit badge and the handles agree about where the path sits.
    pub fn display_bounds(&self) -> Rect {
        let local = self.to_bezpath().bounding_box();
        let min = command::smallest_point(&self.commands);
        let map = |p: Point| {
            Point::new(
                p.x * self.scale_x - (min.x - self.left),
                p.y * self.scale_y - (min.y - self.top),
            )
        };
        let p0 = map(Point::new(local.x0, local.y0));
        let p1 = map(Point::new(local.x1, local.y1));
        Rect::from_points(p0, p1)
    }

    /// Center of the clickable edit badge: the top-right corner of the
    /// display bounds, nudged down by the configured offset.
    pub fn badge_center(&self) -> Point {
        let bounds = self.display_bounds();
        Point::new(bounds.x1, bounds.y0 + settings::badge::OFFSET_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square() -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 10.0)),
            PathCommand::LineTo(pt(0.0, 10.0)),
            PathCommand::Close,
        ]
    }

    #[test]
    fn closed_flag_tracks_last_command() {
        let closed = EditablePath::new(square());
        assert!(closed.is_closed());

        let open = EditablePath::new(vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(5.0, 5.0)),
        ]);
        assert!(!open.is_closed());
    }

    #[test]
    fn path_data_round_trips_geometry() {
        let path = EditablePath::new(square());
        assert_eq!(path.path_data(), "M 0 0 L 10 0 L 10 10 L 0 10 z");
    }

    #[test]
    fn display_bounds_applies_scale_and_offset() {
        let path = EditablePath::new(square()).with_placement(100.0, 50.0, 2.0, 2.0);
        let bounds = path.display_bounds();
        // Local min is (0,0), so display bounds start at (left, top).
        assert_eq!(bounds.x0, 100.0);
        assert_eq!(bounds.y0, 50.0);
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 20.0);
    }

    #[test]
    fn badge_sits_at_top_right_plus_offset() {
        let path = EditablePath::new(square()).with_placement(100.0, 50.0, 1.0, 1.0);
        let badge = path.badge_center();
        assert_eq!(badge, pt(110.0, 50.0 + settings::badge::OFFSET_Y));
    }

    #[test]
    fn default_interactivity_is_fully_interactive() {
        let path = EditablePath::new(square());
        assert!(path.interactivity.selectable);
        assert!(path.interactivity.show_controls);
        assert!(path.interactivity.show_borders);
        assert!(path.interactivity.hit_enabled);
    }

    #[test]
    fn editing_lock_keeps_hit_testing_enabled() {
        let locked = Interactivity::locked_for_editing();
        assert!(!locked.selectable);
        assert!(!locked.show_controls);
        assert!(!locked.show_borders);
        assert!(locked.hit_enabled);
    }
}
