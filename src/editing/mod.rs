// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod point;
pub mod session;
pub mod viewport;

pub use point::{AnchorPoint, ControlPair, ControlPoint, Handle, HandleKind};
pub use session::{DownAction, DragPhase, EditMode, EditSession, EditorOptions};
pub use viewport::ViewPort;
