// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Editable points: on-curve anchors and their off-curve controls.
//!
//! Anchors own their control pair by value, so a control can never
//! outlive the anchor it belongs to. The two controls of one anchor are
//! deliberately independent: dragging one does not mirror the other to
//! keep the tangent smooth.

use crate::model::PointId;
use crate::theme;
use kurbo::{Point, Vec2};

/// An off-curve point defining one cubic tangent handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Stable identifier used to match drag events to this control
    pub id: PointId,
    /// Position in canvas coordinates
    pub pos: Point,
}

impl ControlPoint {
    /// Create a control point at a position
    pub fn new(pos: Point) -> Self {
        Self {
            id: PointId::next(),
            pos,
        }
    }
}

/// The two controls of the cubic segment leaving an anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPair {
    /// Outgoing tangent control (first control of the segment)
    pub c1: ControlPoint,
    /// Incoming tangent control of the next anchor (second control)
    pub c2: ControlPoint,
}

/// An on-curve vertex of the path being edited.
///
/// `controls` is populated only when the segment from this anchor to
/// the *next* anchor is a cubic curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    /// Stable identifier used to match drag events to this anchor
    pub id: PointId,
    /// Position in canvas coordinates
    pub pos: Point,
    /// Controls of the outgoing cubic segment, if any
    pub controls: Option<ControlPair>,
}

impl AnchorPoint {
    /// Create an anchor with no outgoing curve controls
    pub fn new(pos: Point) -> Self {
        Self {
            id: PointId::next(),
            pos,
            controls: None,
        }
    }

    /// Attach (or reposition) the outgoing cubic controls
    pub fn set_controls(&mut self, c1: Point, c2: Point) {
        match &mut self.controls {
            Some(pair) => {
                pair.c1.pos = c1;
                pair.c2.pos = c2;
            }
            None => {
                self.controls = Some(ControlPair {
                    c1: ControlPoint::new(c1),
                    c2: ControlPoint::new(c2),
                });
            }
        }
    }

    /// Move the anchor to a new position, translating both owned
    /// controls by the same delta so the curve shape is preserved
    /// relative to the anchor.
    pub fn move_to(&mut self, pos: Point) {
        let delta: Vec2 = pos - self.pos;
        self.pos = pos;
        if let Some(pair) = &mut self.controls {
            pair.c1.pos += delta;
            pair.c2.pos += delta;
        }
    }
}

/// What kind of point a handle stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// On-curve anchor handle
    Anchor,
    /// Off-curve control handle
    Control,
}

/// A renderable handle artifact.
///
/// The session produces one `Handle` per visible point; the host draws
/// a filled circle at `center` with the theme radius/colors for `kind`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Id of the anchor or control this handle manipulates
    pub point: PointId,
    /// Anchor or control
    pub kind: HandleKind,
    /// Center in screen coordinates
    pub center: Point,
}

impl Handle {
    /// Radius the host should use when drawing this handle
    pub fn radius(&self) -> f64 {
        match self.kind {
            HandleKind::Anchor => theme::anchor_radius(),
            HandleKind::Control => theme::control_radius(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn anchor_move_translates_owned_controls_rigidly() {
        let mut anchor = AnchorPoint::new(pt(20.0, 10.0));
        anchor.set_controls(pt(15.0, 0.0), pt(20.0, 5.0));

        anchor.move_to(pt(25.0, 15.0));

        let pair = anchor.controls.unwrap();
        assert_eq!(anchor.pos, pt(25.0, 15.0));
        assert_eq!(pair.c1.pos, pt(20.0, 5.0));
        assert_eq!(pair.c2.pos, pt(25.0, 10.0));
    }

    #[test]
    fn anchor_move_without_controls_is_just_a_move() {
        let mut anchor = AnchorPoint::new(pt(1.0, 1.0));
        anchor.move_to(pt(4.0, 5.0));
        assert_eq!(anchor.pos, pt(4.0, 5.0));
        assert!(anchor.controls.is_none());
    }

    #[test]
    fn set_controls_twice_repositions_without_new_ids() {
        let mut anchor = AnchorPoint::new(pt(0.0, 0.0));
        anchor.set_controls(pt(1.0, 0.0), pt(2.0, 0.0));
        let first = anchor.controls.unwrap();

        anchor.set_controls(pt(3.0, 0.0), pt(4.0, 0.0));
        let second = anchor.controls.unwrap();

        assert_eq!(first.c1.id, second.c1.id);
        assert_eq!(first.c2.id, second.c2.id);
        assert_eq!(second.c1.pos, pt(3.0, 0.0));
        assert_eq!(second.c2.pos, pt(4.0, 0.0));
    }

    #[test]
    fn handle_radius_follows_kind() {
        let anchor = Handle {
            point: PointId::next(),
            kind: HandleKind::Anchor,
            center: pt(0.0, 0.0),
        };
        let control = Handle {
            point: PointId::next(),
            kind: HandleKind::Control,
            center: pt(0.0, 0.0),
        };
        assert!(anchor.radius() > control.radius());
    }
}
