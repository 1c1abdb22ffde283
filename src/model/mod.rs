// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Core identifiers shared across the session model

pub mod ids;

pub use ids::{PathId, PointId};
