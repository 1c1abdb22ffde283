// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Pathbender: a headless SVG path editing core.
//!
//! The crate imports an SVG document, registers its paths in an
//! [`EditSession`], and exposes each path's anchor and Bézier control
//! points as draggable handles. As the host reports handle drags, the
//! session keeps the underlying path geometry (and its serialized
//! path-data string) synchronized.
//!
//! All UI concerns stay in the host: rendering, pointer capture, and
//! widget chrome. The core is driven by explicit method calls
//! (`pointer_down`, `drag_handle`, ...) and never calls back into a
//! UI framework.

pub mod editing;
pub mod import;
pub mod model;
pub mod path;
pub mod settings;
pub mod theme;

pub use editing::point::{AnchorPoint, ControlPair, ControlPoint, Handle, HandleKind};
pub use editing::session::{DownAction, DragPhase, EditMode, EditSession, EditorOptions};
pub use editing::viewport::ViewPort;
pub use import::{ImportError, ImportResult, Passthrough, import_svg};
pub use model::{PathId, PointId};
pub use path::{EditablePath, PathCommand, smallest_point, write_path_data};

/// Initialize tracing output (controlled via the RUST_LOG env var) for
/// hosts that do not install a subscriber of their own.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pathbender=debug".parse().unwrap()),
        )
        .try_init();
}
