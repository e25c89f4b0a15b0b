// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free helpers for grouping, merging, and flattening position collections.

use alloc::vec::Vec;

use crate::Range;

/// Partitions `values` into maximal runs of consecutive integers.
///
/// The input is sorted (a copy; the argument is untouched) before grouping,
/// so values may arrive in any order. Each returned group is ascending.
///
/// Quirk, preserved deliberately: an empty input yields one empty group, not
/// zero groups. Callers that want zero groups for empty input should use
/// [`group_runs`] instead. Both behaviors are long-standing and pinned by
/// tests.
///
/// # Examples
///
/// ```
/// use trellis_range::util::group_by_contiguous;
///
/// let groups = group_by_contiguous(&[0, 1, 2, 4, 5]);
/// assert_eq!(groups, vec![vec![0, 1, 2], vec![4, 5]]);
///
/// assert_eq!(group_by_contiguous(&[]), vec![Vec::<i64>::new()]);
/// ```
#[must_use]
pub fn group_by_contiguous(values: &[i64]) -> Vec<Vec<i64>> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut groups = Vec::new();
    let mut current = Vec::new();
    for (i, v) in sorted.iter().copied().enumerate() {
        if i > 0 && v != sorted[i - 1] + 1 {
            groups.push(core::mem::take(&mut current));
        }
        current.push(v);
    }
    // The trailing group is pushed unconditionally, which is what makes the
    // empty input produce a single empty group.
    groups.push(current);
    groups
}

/// Like [`group_by_contiguous`], but an empty input yields zero groups.
#[must_use]
pub fn group_runs(values: &[i64]) -> Vec<Vec<i64>> {
    if values.is_empty() {
        return Vec::new();
    }
    group_by_contiguous(values)
}

/// Converts a sequence of integers into the minimal sorted list of ranges of
/// contiguous runs. Duplicates are collapsed; input order is irrelevant.
///
/// # Examples
///
/// ```
/// use trellis_range::{Range, util::ranges_of};
///
/// let ranges = ranges_of(&[4, 0, 1, 5, 2]);
/// assert_eq!(ranges, vec![Range::new(0, 3), Range::new(4, 6)]);
/// assert!(ranges_of(&[]).is_empty());
/// ```
#[must_use]
pub fn ranges_of(values: &[i64]) -> Vec<Range> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut out: Vec<Range> = Vec::new();
    for v in sorted {
        match out.last_mut() {
            Some(last) if last.end == v => last.end = v + 1,
            _ => out.push(Range::new(v, v + 1)),
        }
    }
    out
}

/// Joins ranges that are already sorted and touch end-to-end into the single
/// spanning range.
///
/// Returns `None` (a sentinel, not a failure) if the input does not tile
/// end-to-end without gaps, or if the input is empty.
#[must_use]
pub fn join_consecutive(ranges: &[Range]) -> Option<Range> {
    let first = ranges.first()?;
    let mut end = first.end;
    for r in &ranges[1..] {
        if r.start != end {
            return None;
        }
        end = r.end;
    }
    Some(Range::new(first.start, end))
}

/// Merges a list of possibly-overlapping or adjacent ranges, in any order,
/// into the minimal sorted disjoint set. Empty ranges are dropped.
#[must_use]
pub fn merge_ranges(ranges: &[Range]) -> Vec<Range> {
    let mut sorted: Vec<Range> = ranges.iter().copied().filter(|r| !r.is_empty()).collect();
    sorted.sort_unstable();

    let mut out: Vec<Range> = Vec::new();
    for r in sorted {
        match out.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => out.push(r),
        }
    }
    out
}

/// Flattens ranges into a sorted, de-duplicated array of individual
/// positions, silently excluding negative values.
///
/// Negative positions are the conventional "no position" result of failed
/// coordinate conversions; they are routine, so they are filtered rather
/// than treated as errors.
///
/// # Examples
///
/// ```
/// use trellis_range::{Range, util::positions};
///
/// let flat = positions([Range::new(-1, 3), Range::new(4, 7)]);
/// assert_eq!(flat, vec![0, 1, 2, 4, 5, 6]);
/// ```
#[must_use]
pub fn positions<I: IntoIterator<Item = Range>>(ranges: I) -> Vec<i64> {
    let mut out: Vec<i64> = ranges
        .into_iter()
        .flat_map(|r| r.start.max(0)..r.end)
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{group_by_contiguous, group_runs, join_consecutive, merge_ranges, positions, ranges_of};
    use crate::Range;

    #[test]
    fn group_by_contiguous_splits_at_gaps() {
        let groups = group_by_contiguous(&[0, 1, 2, 4, 5]);
        assert_eq!(groups, vec![vec![0, 1, 2], vec![4, 5]]);
    }

    #[test]
    fn group_by_contiguous_sorts_its_input() {
        let groups = group_by_contiguous(&[5, 0, 4, 1, 2]);
        assert_eq!(groups, vec![vec![0, 1, 2], vec![4, 5]]);
    }

    #[test]
    fn group_by_contiguous_empty_input_yields_one_empty_group() {
        // Long-standing quirk, pinned: one empty group, not zero groups.
        let groups = group_by_contiguous(&[]);
        assert_eq!(groups, vec![Vec::<i64>::new()]);
    }

    #[test]
    fn group_runs_empty_input_yields_zero_groups() {
        assert!(group_runs(&[]).is_empty());
        assert_eq!(group_runs(&[7]), vec![vec![7]]);
    }

    #[test]
    fn ranges_of_collapses_runs_and_duplicates() {
        let ranges = ranges_of(&[1, 2, 2, 3, 7]);
        assert_eq!(ranges, vec![Range::new(1, 4), Range::new(7, 8)]);
        assert!(ranges_of(&[]).is_empty());
    }

    #[test]
    fn join_consecutive_spans_touching_ranges() {
        let joined = join_consecutive(&[Range::new(0, 3), Range::new(3, 5), Range::new(5, 9)]);
        assert_eq!(joined, Some(Range::new(0, 9)));
    }

    #[test]
    fn join_consecutive_returns_none_on_gap() {
        let joined = join_consecutive(&[Range::new(0, 3), Range::new(4, 5)]);
        assert_eq!(joined, None);
        assert_eq!(join_consecutive(&[]), None);
    }

    #[test]
    fn merge_ranges_handles_overlap_adjacency_and_order() {
        let merged = merge_ranges(&[
            Range::new(8, 10),
            Range::new(0, 3),
            Range::new(3, 5),
            Range::new(4, 6),
            Range::empty_at(20),
        ]);
        assert_eq!(merged, vec![Range::new(0, 6), Range::new(8, 10)]);
    }

    #[test]
    fn positions_filters_negative_values() {
        let flat = positions([Range::new(-1, 3), Range::new(4, 7)]);
        assert_eq!(flat, vec![0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn positions_of_empty_input_is_empty() {
        assert!(positions([]).is_empty());
        assert!(positions([Range::new(-5, 0)]).is_empty());
    }
}
