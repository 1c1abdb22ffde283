// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Path abstraction — the editable representation.
//!
//! [`PathCommand`] is the absolute move/line/cubic/close command list a
//! path is made of, and [`EditablePath`] is one registered path together
//! with its display placement and interactivity flags. Commands are
//! created from SVG input when a document is imported, and serialized
//! back to path-data strings as handles are dragged.

pub mod command;
pub mod editable;

pub use command::{PathCommand, smallest_point, write_path_data};
pub use editable::{EditablePath, Interactivity};
