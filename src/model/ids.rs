// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for paths and editable points.
//!
//! Each id is a monotonically increasing `u64` minted from a global atomic
//! counter. Ids are used as keys when matching drag events and click targets
//! to paths and handles, replacing the mutual object references the editor
//! would otherwise need (point → session → path). They are never reused
//! within a process, so a removed path or point leaves no dangling handle.

use std::sync::atomic::{AtomicU64, Ordering};

static PATH_COUNTER: AtomicU64 = AtomicU64::new(1);
static POINT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for a registered path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathId(u64);

impl PathId {
    /// Mint a new unique path id
    pub fn next() -> Self {
        Self(PATH_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PathId {
    fn default() -> Self {
        Self::next()
    }
}

/// A unique identifier for an anchor or control point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(u64);

impl PointId {
    /// Mint a new unique point id
    pub fn next() -> Self {
        Self(POINT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PointId {
    fn default() -> Self {
        Self::next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_ids_are_unique() {
        let a = PathId::next();
        let b = PathId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn point_ids_are_unique() {
        let a = PointId::next();
        let b = PointId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn default_mints_fresh_ids() {
        assert_ne!(PointId::default(), PointId::default());
    }
}
