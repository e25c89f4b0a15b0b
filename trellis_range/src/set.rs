// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ordered set of disjoint, non-adjacent ranges.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::Range;

/// An ordered collection of disjoint, non-adjacent [`Range`]s sorted by start.
///
/// The set behaves like a sorted set of individual integers stored as
/// intervals. Invariant: no two stored ranges overlap *or* touch; adjacent
/// ranges are always merged into one on insert, so the representation is
/// canonical and two sets containing the same integers compare equal.
///
/// Mutation is O(n) in the number of stored ranges, which is expected to be
/// small (tens, not thousands) for the grid workloads this crate serves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range>,
}

impl RangeSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Creates a set from an iterator of ranges, merging as needed.
    #[must_use]
    pub fn from_ranges<I: IntoIterator<Item = Range>>(ranges: I) -> Self {
        let mut set = Self::new();
        for range in ranges {
            set.insert_range(range);
        }
        set
    }

    /// Inserts a single value.
    pub fn insert(&mut self, value: i64) {
        self.insert_range(Range::new(value, value + 1));
    }

    /// Inserts a range, merging it with any overlapping or adjacent stored
    /// ranges. Inserting an empty range is a no-op.
    pub fn insert_range(&mut self, range: Range) {
        if range.is_empty() {
            return;
        }

        // Skip past stored ranges entirely before the insertion, then absorb
        // every stored range the new one touches.
        let mut lo = 0;
        while lo < self.ranges.len() && self.ranges[lo].end < range.start {
            lo += 1;
        }
        let mut hi = lo;
        let mut start = range.start;
        let mut end = range.end;
        while hi < self.ranges.len() && self.ranges[hi].start <= range.end {
            start = start.min(self.ranges[hi].start);
            end = end.max(self.ranges[hi].end);
            hi += 1;
        }
        self.ranges
            .splice(lo..hi, core::iter::once(Range::new(start, end)));
    }

    /// Removes a single value.
    pub fn remove(&mut self, value: i64) {
        self.remove_range(Range::new(value, value + 1));
    }

    /// Removes a range, splitting stored ranges around the removed interval.
    ///
    /// Stored ranges fully covered by `range` are dropped; partially covered
    /// ranges keep their surviving sub-intervals. Removing an empty range or
    /// values not present is a no-op.
    pub fn remove_range(&mut self, range: Range) {
        if range.is_empty() {
            return;
        }
        let mut out = Vec::with_capacity(self.ranges.len() + 1);
        for r in &self.ranges {
            if !r.overlaps(&range) {
                out.push(*r);
                continue;
            }
            if r.start < range.start {
                out.push(Range::new(r.start, range.start));
            }
            if range.end < r.end {
                out.push(Range::new(range.end, r.end));
            }
        }
        self.ranges = out;
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of stored (maximal) ranges.
    #[must_use]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Total number of individual integers contained in the set.
    #[must_use]
    pub fn value_count(&self) -> i64 {
        self.ranges.iter().map(Range::size).sum()
    }

    /// Returns `true` if `value` is contained in some stored range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.ranges
            .binary_search_by(|r| {
                if r.end <= value {
                    Ordering::Less
                } else if r.start > value {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// The stored ranges, sorted by start, disjoint and non-adjacent.
    #[must_use]
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// Iterates the individual values of the set in ascending order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.ranges.iter().flat_map(Range::iter)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::RangeSet;
    use crate::Range;

    #[test]
    fn insert_merges_adjacent_ranges() {
        let mut set = RangeSet::new();
        set.insert_range(Range::new(10, 20));
        set.insert_range(Range::new(20, 25));
        assert_eq!(set.ranges(), &[Range::new(10, 25)]);
        assert_eq!(set.range_count(), 1);
    }

    #[test]
    fn insert_covered_range_is_idempotent() {
        let mut set = RangeSet::new();
        set.insert_range(Range::new(10, 20));
        set.insert_range(Range::new(10, 15));
        assert_eq!(set.ranges(), &[Range::new(10, 20)]);
    }

    #[test]
    fn insert_bridges_multiple_stored_ranges() {
        let mut set = RangeSet::new();
        set.insert_range(Range::new(0, 2));
        set.insert_range(Range::new(5, 7));
        set.insert_range(Range::new(10, 12));
        // Touches the first two, swallows nothing of the third.
        set.insert_range(Range::new(2, 6));
        assert_eq!(set.ranges(), &[Range::new(0, 7), Range::new(10, 12)]);
    }

    #[test]
    fn insert_single_values_coalesce() {
        let mut set = RangeSet::new();
        set.insert(3);
        set.insert(5);
        set.insert(4);
        assert_eq!(set.ranges(), &[Range::new(3, 6)]);
        let values: Vec<i64> = set.values().collect();
        assert_eq!(values, &[3, 4, 5]);
    }

    #[test]
    fn remove_splits_stored_range() {
        let mut set = RangeSet::new();
        set.insert_range(Range::new(0, 10));
        set.remove_range(Range::new(3, 6));
        assert_eq!(set.ranges(), &[Range::new(0, 3), Range::new(6, 10)]);
        assert_eq!(set.value_count(), 7);
    }

    #[test]
    fn remove_drops_fully_covered_ranges() {
        let mut set = RangeSet::new();
        set.insert_range(Range::new(2, 4));
        set.insert_range(Range::new(6, 8));
        set.remove_range(Range::new(0, 10));
        assert!(set.is_empty());
    }

    #[test]
    fn add_remove_round_trip_returns_to_empty() {
        let disjoint = [Range::new(0, 3), Range::new(5, 9), Range::new(20, 21)];
        let mut set = RangeSet::new();
        for r in disjoint {
            set.insert_range(r);
        }
        for r in disjoint {
            set.remove_range(r);
        }
        assert!(set.is_empty());
        assert_eq!(set.range_count(), 0);
    }

    #[test]
    fn contains_uses_half_open_bounds() {
        let mut set = RangeSet::new();
        set.insert_range(Range::new(5, 8));
        assert!(set.contains(5));
        assert!(set.contains(7));
        assert!(!set.contains(8));
        assert!(!set.contains(4));
    }

    #[test]
    fn empty_operations_are_no_ops() {
        let mut set = RangeSet::new();
        set.insert_range(Range::empty_at(4));
        assert!(set.is_empty());
        set.insert_range(Range::new(0, 3));
        set.remove_range(Range::empty_at(1));
        assert_eq!(set.ranges(), &[Range::new(0, 3)]);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = RangeSet::from_ranges([Range::new(0, 3), Range::new(7, 9)]);
        assert_eq!(set.range_count(), 2);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.value_count(), 0);
    }
}
