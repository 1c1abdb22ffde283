// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Handle projection and drag handling for EditSession — turning the
//! edited path's commands into anchors, and anchor/control moves back
//! into commands.

use super::{DragPhase, EditSession};
use crate::editing::point::{AnchorPoint, Handle, HandleKind};
use crate::model::PointId;
use crate::path::command::{PathCommand, smallest_point};
use crate::path::{EditablePath, Interactivity};
use kurbo::{Affine, Point};

impl EditSession {
    /// Project the edited path's commands into the anchor list.
    ///
    /// Walks the commands in order: move/line endpoints become anchors;
    /// a curve attaches its control coordinates to the *previous*
    /// anchor (the outgoing tangent) and adds a terminal anchor at the
    /// curve endpoint. Coordinates are mapped through the path's scale
    /// and the minimum-bound offset so handles line up with the
    /// rendered path wherever its own bounding box sits.
    pub(crate) fn show_handles(&mut self) {
        self.anchors.clear();

        let Some(id) = self.editing_path() else {
            return;
        };
        let Some(path) = self.path(id) else {
            return;
        };

        let min = smallest_point(&path.commands);
        let (left, top) = (path.left, path.top);
        let (sx, sy) = (path.scale_x, path.scale_y);

        // Rotation is not part of the reference placement; it is only
        // applied when explicitly enabled (about the display center).
        let rotate = (self.options.rotate_handles && path.rotation != 0.0)
            .then(|| Affine::rotate_about(path.rotation, path.display_bounds().center()));

        let map = |p: Point| {
            let mapped = Point::new(p.x * sx - (min.x - left), p.y * sy - (min.y - top));
            match rotate {
                Some(affine) => affine * mapped,
                None => mapped,
            }
        };

        let mut anchors: Vec<AnchorPoint> = Vec::new();
        for cmd in &path.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    anchors.push(AnchorPoint::new(map(*p)));
                }
                PathCommand::CurveTo { c1, c2, to } => {
                    if let Some(last) = anchors.last_mut() {
                        last.set_controls(map(*c1), map(*c2));
                    }
                    anchors.push(AnchorPoint::new(map(*to)));
                }
                PathCommand::Close => {}
            }
        }

        tracing::debug!(
            "[show_handles] projected {} anchors for {:?}",
            anchors.len(),
            id
        );
        self.anchors = anchors;
    }

    /// Renderable handles for the current anchor list, in screen
    /// coordinates. Anchors come before their controls so controls
    /// draw on top of the curve they steer.
    pub fn handles(&self) -> Vec<Handle> {
        let mut handles = Vec::new();
        for anchor in self.anchors() {
            handles.push(Handle {
                point: anchor.id,
                kind: HandleKind::Anchor,
                center: self.viewport.to_screen(anchor.pos),
            });
            if let Some(pair) = &anchor.controls {
                for control in [&pair.c1, &pair.c2] {
                    handles.push(Handle {
                        point: control.id,
                        kind: HandleKind::Control,
                        center: self.viewport.to_screen(control.pos),
                    });
                }
            }
        }
        handles
    }

    /// Apply a drag of one handle and rebuild the edited path.
    ///
    /// An anchor drag translates its owned controls by the same delta;
    /// a control drag moves only that control. `phase` selects between
    /// the in-place rebuild (continuous dragging) and the full replace
    /// (end of a discrete edit). Returns false when no handle with
    /// this id exists or nothing is being edited.
    pub fn drag_handle(&mut self, point: PointId, screen_pos: Point, phase: DragPhase) -> bool {
        if self.editing_path().is_none() {
            return false;
        }

        let pos = self.viewport.to_canvas(screen_pos);
        let mut found = false;

        for anchor in self.anchors.iter_mut() {
            if anchor.id == point {
                anchor.move_to(pos);
                found = true;
                break;
            }
            if let Some(pair) = &mut anchor.controls {
                if pair.c1.id == point {
                    pair.c1.pos = pos;
                    found = true;
                    break;
                }
                if pair.c2.id == point {
                    pair.c2.pos = pos;
                    found = true;
                    break;
                }
            }
        }

        if !found {
            tracing::debug!("[drag_handle] no handle {:?}", point);
            return false;
        }

        tracing::debug!(
            "[drag_handle] {:?} -> ({}, {}), {:?}",
            point,
            pos.x,
            pos.y,
            phase
        );

        match phase {
            DragPhase::Move => self.rebuild_in_place(),
            DragPhase::Release => self.rebuild_replace(),
        }
        true
    }

    /// Rebuild the edited path's commands from the anchor list without
    /// touching the path object itself.
    ///
    /// Placement is deliberately left stale here: re-deriving bounds on
    /// every pointer move would recreate the object and lose its
    /// z-order mid-drag. The release-phase replace normalizes it.
    fn rebuild_in_place(&mut self) {
        let Some(id) = self.editing_path() else {
            return;
        };
        let closed = self.path(id).is_some_and(EditablePath::is_closed);
        let Some(commands) = Self::commands_from_anchors(&self.anchors, closed) else {
            return;
        };
        if let Some(path) = self.paths.iter_mut().find(|p| p.id == id) {
            path.commands = commands;
        }
    }

    /// Discard the edited path object and register a fresh one built
    /// from the anchor positions: new id, re-derived placement, same
    /// fill, sent to the back of the z-order. Edit mode continues on
    /// the replacement.
    fn rebuild_replace(&mut self) {
        let Some(old_id) = self.editing_path() else {
            return;
        };
        let Some(old_index) = self.paths.iter().position(|p| p.id == old_id) else {
            return;
        };

        let closed = self.paths[old_index].is_closed();
        let Some(commands) = Self::commands_from_anchors(&self.anchors, closed) else {
            return;
        };

        let old = self.paths.remove(old_index);
        let mut replacement = EditablePath::new(commands);
        replacement.fill = old.fill;
        replacement.interactivity = Interactivity::locked_for_editing();

        let new_id = replacement.id;
        self.paths.insert(0, replacement);
        self.set_editing_path_id(new_id);

        tracing::debug!("[rebuild] replaced {:?} with {:?}", old_id, new_id);
    }

    /// The reconstruction rule: `M` for the first anchor, then `C`
    /// with the *previous* anchor's controls when it owns both, `L`
    /// otherwise, and a trailing close when the path was closed.
    ///
    /// Fewer than two anchors is a silent no-op.
    fn commands_from_anchors(anchors: &[AnchorPoint], closed: bool) -> Option<Vec<PathCommand>> {
        if anchors.len() < 2 {
            return None;
        }

        let mut commands = Vec::with_capacity(anchors.len() + 1);
        commands.push(PathCommand::MoveTo(anchors[0].pos));

        for pair in anchors.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            match &previous.controls {
                Some(controls) => commands.push(PathCommand::CurveTo {
                    c1: controls.c1.pos,
                    c2: controls.c2.pos,
                    to: current.pos,
                }),
                None => commands.push(PathCommand::LineTo(current.pos)),
            }
        }

        if closed {
            commands.push(PathCommand::Close);
        }
        Some(commands)
    }
}
