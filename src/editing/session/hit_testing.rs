// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer dispatch and hit testing for EditSession

use super::{DownAction, EditMode, EditSession};
use crate::editing::hit_test::{self, HitTestResult};
use crate::model::PathId;
use kurbo::Point;

impl EditSession {
    /// The handle under a screen position, if any
    pub fn handle_at(&self, screen_pos: Point) -> Option<HitTestResult> {
        let candidates = self
            .handles()
            .into_iter()
            .map(|h| (h.point, h.center, h.kind));
        let result = hit_test::find_closest(screen_pos, candidates, hit_test::MIN_CLICK_DISTANCE);

        match &result {
            Some(hit) => tracing::debug!(
                "[handle_at] hit {:?} ({:?}) at distance {}",
                hit.point,
                hit.kind,
                hit.distance
            ),
            None => tracing::debug!("[handle_at] no handle under cursor"),
        }
        result
    }

    /// The edit badge under a screen position, topmost path first.
    ///
    /// The edited path shows no transform controls, so its badge is
    /// not clickable while its handles are up.
    pub fn badge_at(&self, screen_pos: Point) -> Option<PathId> {
        for path in self.paths.iter().rev() {
            if !path.interactivity.hit_enabled || !path.interactivity.show_controls {
                continue;
            }
            let center = self.viewport.to_screen(path.badge_center());
            if hit_test::badge_contains(center, screen_pos) {
                return Some(path.id);
            }
        }
        None
    }

    /// The topmost hit-enabled path whose display bounds contain the
    /// screen position
    pub fn path_at(&self, screen_pos: Point) -> Option<PathId> {
        let pos = self.viewport.to_canvas(screen_pos);
        self.paths
            .iter()
            .rev()
            .find(|p| p.interactivity.hit_enabled && p.display_bounds().contains(pos))
            .map(|p| p.id)
    }

    /// Dispatch a pointer-down event.
    ///
    /// Priority order: a handle grab (while editing), then an edit
    /// badge, then a path body, and finally the background — which
    /// exits edit mode if one is active, and clears the selection
    /// otherwise.
    pub fn pointer_down(&mut self, screen_pos: Point) -> DownAction {
        if self.mode() == EditMode::Editing
            && let Some(hit) = self.handle_at(screen_pos)
        {
            return DownAction::BeganDrag(hit.point);
        }

        if let Some(id) = self.badge_at(screen_pos) {
            self.activate_edit(id);
            return DownAction::EnteredEdit(id);
        }

        if let Some(id) = self.path_at(screen_pos) {
            let selectable = self
                .path(id)
                .is_some_and(|p| p.interactivity.selectable);
            if selectable {
                self.set_selected(Some(id));
                return DownAction::SelectedPath(id);
            }
            // The edited path's body: consumed, but nothing happens.
            return DownAction::Ignored;
        }

        if self.mode() == EditMode::Editing {
            self.exit_edit();
            return DownAction::ExitedEdit;
        }

        self.set_selected(None);
        DownAction::Background
    }
}
