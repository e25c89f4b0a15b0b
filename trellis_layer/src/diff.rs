// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural diffs and the per-kind diff computations.

use alloc::vec::Vec;

use trellis_range::{Range, util::ranges_of};

use crate::Edge;

/// Whether a diff removes positions or inserts them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiffKind {
    /// Positions were inserted.
    Add,
    /// Positions were removed.
    Delete,
}

/// One atomic structural change needed to transform a *before* arrangement of
/// positions into an *after* arrangement.
///
/// A reorder or hide/show operation decomposes into a sequence of `Delete`
/// diffs (vacated before-positions) followed by `Add` diffs (where survivors
/// land). Consumers apply these to redraw only the affected rows or columns
/// instead of repainting the whole grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructuralDiff {
    /// Whether positions were added or deleted.
    pub kind: DiffKind,
    /// The affected positions in the before arrangement. Empty for an `Add`
    /// whose insertion point carries no before extent.
    pub before: Range,
    /// The corresponding positions in the after arrangement. Empty (a
    /// collapsed point) for a `Delete`.
    pub after: Range,
}

impl StructuralDiff {
    /// Creates an `Add` diff.
    #[must_use]
    pub const fn add(before: Range, after: Range) -> Self {
        Self {
            kind: DiffKind::Add,
            before,
            after,
        }
    }

    /// Creates a `Delete` diff.
    #[must_use]
    pub const fn delete(before: Range, after: Range) -> Self {
        Self {
            kind: DiffKind::Delete,
            before,
            after,
        }
    }
}

/// Computes the diffs for a reorder of `before_from_ranges` to
/// `before_to_position`.
///
/// All inputs are *before* coordinates: the contiguous ranges that moved
/// (sorted, disjoint), the target position, and the edge flag selecting
/// whether the insertion point is the target itself ([`Edge::Leading`]) or
/// one past it ([`Edge::Trailing`]).
///
/// The result is one `Delete` per contiguous moved range, mapped to the
/// collapsed point where it vacated (shifted by the cumulative size of
/// earlier deletions), followed by one `Add` per range landing at the
/// insertion point shifted by every moved range that lay before it.
///
/// # Examples
///
/// Moving positions `{0, 1}` after position `4` in a five-position layer:
///
/// ```
/// use trellis_layer::{DiffKind, Edge, reorder_diffs};
/// use trellis_range::Range;
///
/// let diffs = reorder_diffs(&[Range::new(0, 2)], 4, Edge::Trailing);
/// assert_eq!(diffs.len(), 2);
/// assert_eq!(diffs[0].kind, DiffKind::Delete);
/// assert_eq!((diffs[0].before, diffs[0].after), (Range::new(0, 2), Range::new(0, 0)));
/// assert_eq!(diffs[1].kind, DiffKind::Add);
/// assert_eq!(diffs[1].after, Range::new(3, 5));
/// ```
#[must_use]
pub fn reorder_diffs(
    before_from_ranges: &[Range],
    before_to_position: i64,
    edge: Edge,
) -> Vec<StructuralDiff> {
    let insertion = match edge {
        Edge::Leading => before_to_position,
        Edge::Trailing => before_to_position + 1,
    };

    // The insertion point in after coordinates: subtract, for each moved
    // range before the target, the portion of it that lies before the target.
    let mut after_add = insertion;
    for r in before_from_ranges {
        if r.start >= insertion {
            break;
        }
        after_add -= r.end.min(insertion) - r.start;
    }

    let mut diffs = Vec::with_capacity(before_from_ranges.len() * 2);

    let mut removed = 0;
    for r in before_from_ranges {
        let vacated = r.start - removed;
        diffs.push(StructuralDiff::delete(*r, Range::empty_at(vacated)));
        removed += r.size();
    }

    let before_add = Range::empty_at(insertion);
    let mut offset = 0;
    for r in before_from_ranges {
        diffs.push(StructuralDiff::add(
            before_add,
            Range::new(after_add + offset, after_add + offset + r.size()),
        ));
        offset += r.size();
    }

    diffs
}

/// Computes the diffs for hiding `ranges` (sorted, disjoint before-position
/// ranges): one `Delete` per range, collapsed to its shifted after-position.
#[must_use]
pub fn hide_diffs(ranges: &[Range]) -> Vec<StructuralDiff> {
    let mut removed = 0;
    ranges
        .iter()
        .map(|r| {
            let after = r.start - removed;
            removed += r.size();
            StructuralDiff::delete(*r, Range::empty_at(after))
        })
        .collect()
}

/// Computes the diffs for showing previously hidden positions.
///
/// `positions` are the sorted *after* positions that are now visible. The
/// result is one `Add` per maximal run of newly inserted positions, with the
/// before-position collapsed at the point the run was inserted.
///
/// ```
/// use trellis_layer::show_diffs;
/// use trellis_range::Range;
///
/// let diffs = show_diffs(&[1, 4]);
/// assert_eq!(diffs[0].after, Range::new(1, 2));
/// assert_eq!(diffs[1].after, Range::new(4, 5));
/// ```
#[must_use]
pub fn show_diffs(positions: &[i64]) -> Vec<StructuralDiff> {
    let mut diffs = Vec::new();
    let mut shown = 0;
    for run in ranges_of(positions) {
        let before = run.start - shown;
        diffs.push(StructuralDiff::add(Range::empty_at(before), run));
        shown += run.size();
    }
    diffs
}

#[cfg(test)]
mod tests {
    use trellis_range::Range;

    use super::{DiffKind, hide_diffs, reorder_diffs, show_diffs};
    use crate::Edge;

    #[test]
    fn reorder_to_trailing_edge_shifts_target_by_moved_size() {
        // Move positions {0, 1} after position 4 in a five-position layer:
        // after order is 2,3,4,0,1.
        let diffs = reorder_diffs(&[Range::new(0, 2)], 4, Edge::Trailing);
        assert_eq!(diffs.len(), 2);

        assert_eq!(diffs[0].kind, DiffKind::Delete);
        assert_eq!(diffs[0].before, Range::new(0, 2));
        assert_eq!(diffs[0].after, Range::empty_at(0));

        assert_eq!(diffs[1].kind, DiffKind::Add);
        assert_eq!(diffs[1].before, Range::empty_at(5));
        assert_eq!(diffs[1].after, Range::new(3, 5));
    }

    #[test]
    fn reorder_to_leading_edge_inserts_before_target() {
        // Move positions {0, 1} before position 4: after order is 2,3,0,1,4.
        let diffs = reorder_diffs(&[Range::new(0, 2)], 4, Edge::Leading);
        assert_eq!(diffs[1].after, Range::new(2, 4));
    }

    #[test]
    fn reorder_of_discontiguous_ranges_accumulates_shifts() {
        // Move {0} and {2, 3} before position 5 in a six-position layer:
        // before 0,1,2,3,4,5 → after 1,4,0,2,3,5.
        let diffs = reorder_diffs(&[Range::new(0, 1), Range::new(2, 4)], 5, Edge::Leading);
        assert_eq!(diffs.len(), 4);

        // First delete vacates position 0; second is shifted left by one.
        assert_eq!(diffs[0].before, Range::new(0, 1));
        assert_eq!(diffs[0].after, Range::empty_at(0));
        assert_eq!(diffs[1].before, Range::new(2, 4));
        assert_eq!(diffs[1].after, Range::empty_at(1));

        // Insertion point 5 shifted by the three moved positions before it.
        assert_eq!(diffs[2].after, Range::new(2, 3));
        assert_eq!(diffs[3].after, Range::new(3, 5));
    }

    #[test]
    fn reorder_from_right_of_target_does_not_shift_target() {
        // Move {3, 4} before position 1: after order is 0,3,4,1,2.
        let diffs = reorder_diffs(&[Range::new(3, 5)], 1, Edge::Leading);
        assert_eq!(diffs[0].after, Range::empty_at(3));
        assert_eq!(diffs[1].after, Range::new(1, 3));
    }

    #[test]
    fn hide_diffs_collapse_to_shifted_points() {
        let diffs = hide_diffs(&[Range::new(1, 2), Range::new(4, 6)]);
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].before, Range::new(1, 2));
        assert_eq!(diffs[0].after, Range::empty_at(1));
        assert_eq!(diffs[1].before, Range::new(4, 6));
        assert_eq!(diffs[1].after, Range::empty_at(3));
    }

    #[test]
    fn show_diffs_emit_one_add_per_run() {
        let diffs = show_diffs(&[1, 4]);
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].kind, DiffKind::Add);
        assert_eq!(diffs[0].before, Range::empty_at(1));
        assert_eq!(diffs[0].after, Range::new(1, 2));
        assert_eq!(diffs[1].before, Range::empty_at(3));
        assert_eq!(diffs[1].after, Range::new(4, 5));
    }

    #[test]
    fn empty_inputs_yield_empty_diffs() {
        assert!(reorder_diffs(&[], 0, Edge::Leading).is_empty());
        assert!(hide_diffs(&[]).is_empty());
        assert!(show_diffs(&[]).is_empty());
    }
}
