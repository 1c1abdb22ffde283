// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - manages editing state for one imported document
//!
//! The session owns every registered path, tracks which one (at most)
//! is in edit mode, and holds the anchor list projected from that
//! path's commands. Hosts drive it with explicit calls and read back
//! handles, flags, and rebuilt path data after each call.

mod handle_editing;
mod hit_testing;

use super::point::AnchorPoint;
use super::viewport::ViewPort;
use crate::import::ImportResult;
use crate::model::PathId;
use crate::path::{EditablePath, Interactivity};
use peniko::Color;

/// Selection state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// No path selected or edited
    #[default]
    None,
    /// One path selected as a whole (movable by the host)
    Selected,
    /// One path in edit mode, manipulated only through its handles
    Editing,
}

/// Behavior switches for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorOptions {
    /// Apply the path's rotation transform when placing handles.
    ///
    /// Off by default: the reference behavior places handles without
    /// rotation, and whether that is a simplification or a defect is
    /// unresolved, so both behaviors stay available.
    pub rotate_handles: bool,
}

/// Direction of carrying a drag: still moving, or released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Pointer still down; rebuild geometry in place so the path
    /// object (and its z-order) survives every intermediate update
    Move,
    /// Pointer released; replace the path object so bounds and fill
    /// are re-evaluated for the final shape
    Release,
}

/// What a `pointer_down` call resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownAction {
    /// A handle was grabbed; subsequent `drag_handle` calls move it
    BeganDrag(crate::model::PointId),
    /// An edit badge was clicked and its path entered edit mode
    EnteredEdit(PathId),
    /// A path body was clicked and is now selected
    SelectedPath(PathId),
    /// A background click ended the edit mode that was active
    ExitedEdit,
    /// A background click with nothing to exit
    Background,
    /// The click landed on an object that takes no action (e.g. the
    /// edited path's own body, which only its handles manipulate)
    Ignored,
}

/// Editing session for one imported document
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    /// Registered paths in z-order (index 0 is the back)
    pub paths: Vec<EditablePath>,

    /// Current viewport, mirrored from the host
    pub viewport: ViewPort,

    /// Behavior switches
    pub options: EditorOptions,

    /// The path currently in edit mode, if any
    editing: Option<PathId>,

    /// The path currently selected as a whole, if any
    selected: Option<PathId>,

    /// Anchors projected from the edited path's commands. Controls are
    /// owned by their anchors, so clearing this list removes every
    /// handle artifact at once.
    anchors: Vec<AnchorPoint>,

    /// Background color reported by the importer, if any
    background: Option<Color>,
}

impl EditSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with behavior switches
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Register a path and return its id
    pub fn add_path(&mut self, path: EditablePath) -> PathId {
        let id = path.id;
        tracing::debug!("[add_path] registered path {:?}", id);
        self.paths.push(path);
        id
    }

    /// Register everything an import produced: the editable paths and
    /// the detected background color.
    pub fn load_document(&mut self, import: ImportResult) -> Vec<PathId> {
        self.background = import.background_color.or(self.background);
        import
            .paths
            .into_iter()
            .map(|path| self.add_path(path))
            .collect()
    }

    /// Background color detected at import, for the host's swatch
    pub fn background_color(&self) -> Option<Color> {
        self.background
    }

    /// Current selection state
    pub fn mode(&self) -> EditMode {
        if self.editing.is_some() {
            EditMode::Editing
        } else if self.selected.is_some() {
            EditMode::Selected
        } else {
            EditMode::None
        }
    }

    /// Id of the path in edit mode, if any
    pub fn editing_path(&self) -> Option<PathId> {
        self.editing
    }

    /// Id of the selected path, if any
    pub fn selected_path(&self) -> Option<PathId> {
        self.selected
    }

    /// Look up a registered path
    pub fn path(&self, id: PathId) -> Option<&EditablePath> {
        self.paths.iter().find(|p| p.id == id)
    }

    fn path_mut(&mut self, id: PathId) -> Option<&mut EditablePath> {
        self.paths.iter_mut().find(|p| p.id == id)
    }

    /// Anchors of the path being edited (empty outside edit mode)
    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    /// Enter edit mode for a path.
    ///
    /// If another path is being edited its state is fully torn down
    /// first — handles removed, interactivity restored — before the
    /// new path's handles appear. The edited path itself becomes
    /// non-selectable and non-movable; every other path becomes fully
    /// interactive. Returns false for an unknown id.
    pub fn activate_edit(&mut self, id: PathId) -> bool {
        if self.path(id).is_none() {
            tracing::warn!("[activate_edit] unknown path {:?}", id);
            return false;
        }

        if let Some(current) = self.editing
            && current != id
        {
            self.exit_edit();
        }

        self.editing = Some(id);
        self.selected = None;

        for path in self.paths.iter_mut() {
            path.interactivity = if path.id == id {
                Interactivity::locked_for_editing()
            } else {
                Interactivity::default()
            };
        }

        self.show_handles();
        tracing::info!(
            "[activate_edit] editing path {:?} ({} anchors)",
            id,
            self.anchors.len()
        );
        true
    }

    /// Leave edit mode.
    ///
    /// Handle artifacts are removed before anything else is dropped,
    /// then the edited path's interactivity is restored.
    pub fn exit_edit(&mut self) {
        self.hide_handles();
        if let Some(id) = self.editing.take() {
            if let Some(path) = self.path_mut(id) {
                path.interactivity = Interactivity::default();
            }
            tracing::info!("[exit_edit] left edit mode for {:?}", id);
        }
    }

    /// Remove all handle artifacts. Controls are owned by their
    /// anchors, so they cannot outlive this clear.
    fn hide_handles(&mut self) {
        self.anchors.clear();
    }

    /// Reset the session: handles first, then paths and the rest
    pub fn clear(&mut self) {
        self.hide_handles();
        self.editing = None;
        self.selected = None;
        self.paths.clear();
        self.background = None;
    }

    pub(crate) fn set_selected(&mut self, id: Option<PathId>) {
        self.selected = id;
    }

    pub(crate) fn set_editing_path_id(&mut self, id: PathId) {
        self.editing = Some(id);
    }
}
