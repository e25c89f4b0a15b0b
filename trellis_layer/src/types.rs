// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small value types shared across the layer stack.

use core::sync::atomic::{AtomicU64, Ordering};

/// Axis selector for per-axis queries, commands, and events.
///
/// A change along [`Axis::Column`] is a *horizontal* structure change (the
/// arrangement of columns moved); a change along [`Axis::Row`] is a
/// *vertical* one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The column axis (horizontal arrangement, widths).
    Column,
    /// The row axis (vertical arrangement, heights).
    Row,
}

impl Axis {
    /// The opposite axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Column => Self::Row,
            Self::Row => Self::Column,
        }
    }
}

/// Which edge of the target position a reorder inserts at.
///
/// [`Edge::Leading`] is the left edge for columns and the top edge for rows:
/// the moved positions land immediately before the target. [`Edge::Trailing`]
/// inserts immediately after it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Insert before the target position (left/top edge).
    Leading,
    /// Insert after the target position (right/bottom edge).
    Trailing,
}

/// Unique identity of a layer instance.
///
/// Events record the id of the last layer boundary they were converted
/// against, so re-converting against the same layer is a no-op. This replaces
/// reference-equality on a back-pointer with an explicit conversion-state
/// token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

impl LayerId {
    /// Allocates a fresh id, distinct from every id allocated so far.
    #[must_use]
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, LayerId};

    #[test]
    fn other_axis_round_trips() {
        assert_eq!(Axis::Column.other(), Axis::Row);
        assert_eq!(Axis::Row.other().other(), Axis::Row);
    }

    #[test]
    fn layer_ids_are_distinct() {
        assert_ne!(LayerId::next(), LayerId::next());
    }
}
