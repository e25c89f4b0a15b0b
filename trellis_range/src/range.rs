// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The half-open integer interval value type.

/// A half-open interval `[start, end)` over signed positions.
///
/// `start == end` denotes an empty range. Equality and hashing consider both
/// fields, so two empty ranges at different positions compare unequal.
///
/// Construction requires `start <= end`; a range with `start > end` is a
/// programmer error and is rejected eagerly since every algorithm in this
/// crate assumes the half-open invariant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    /// First position contained in the range (inclusive).
    pub start: i64,
    /// One past the last contained position (exclusive).
    pub end: i64,
}

impl Range {
    /// Creates a new range `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        assert!(start <= end, "Range requires start <= end");
        Self { start, end }
    }

    /// Creates an empty range positioned at `position`.
    #[must_use]
    pub const fn empty_at(position: i64) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Number of positions contained in the range.
    #[must_use]
    pub const fn size(&self) -> i64 {
        self.end - self.start
    }

    /// Returns `true` if the range contains no positions.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `position` lies within `[start, end)`.
    #[must_use]
    pub const fn contains(&self, position: i64) -> bool {
        self.start <= position && position < self.end
    }

    /// Returns `true` if the two intervals share at least one position.
    ///
    /// Half-open semantics: ranges that touch at an endpoint, such as
    /// `[0, 1)` and `[1, 2)`, do not overlap. Empty ranges never overlap
    /// anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_range::Range;
    ///
    /// assert!(Range::new(0, 5).overlaps(&Range::new(4, 8)));
    /// assert!(!Range::new(0, 1).overlaps(&Range::new(1, 2)));
    /// assert!(!Range::new(3, 3).overlaps(&Range::new(0, 9)));
    /// ```
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    /// Returns `true` if the intervals overlap or touch at an endpoint.
    ///
    /// This is the merge criterion used by [`RangeSet`](crate::RangeSet):
    /// touching ranges are coalesced even though they do not overlap.
    #[must_use]
    pub const fn touches(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The positions contained in both ranges, or `None` if they do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self::new(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }

    /// This range translated by `delta`.
    #[must_use]
    pub const fn shifted(&self, delta: i64) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }

    /// Iterates the positions contained in the range, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + use<> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::Range;

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let a = Range::new(0, 1);
        let b = Range::new(1, 2);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        // But they do touch, which is the merge criterion.
        assert!(a.touches(&b));
    }

    #[test]
    fn interior_point_is_overlap() {
        let a = Range::new(0, 5);
        let b = Range::new(4, 10);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert_eq!(a.intersection(&b), Some(Range::new(4, 5)));
    }

    #[test]
    fn empty_ranges_never_overlap() {
        let empty = Range::empty_at(3);
        assert!(empty.is_empty());
        assert!(!empty.overlaps(&Range::new(0, 9)));
        assert!(!Range::new(0, 9).overlaps(&empty));
    }

    #[test]
    fn size_and_contains() {
        let r = Range::new(2, 6);
        assert_eq!(r.size(), 4);
        assert!(r.contains(2));
        assert!(r.contains(5));
        assert!(!r.contains(6));
        assert!(!r.contains(1));
    }

    #[test]
    #[should_panic(expected = "start <= end")]
    fn inverted_range_is_rejected() {
        let _ = Range::new(5, 2);
    }

    #[test]
    fn shifted_translates_both_bounds() {
        assert_eq!(Range::new(2, 6).shifted(-2), Range::new(0, 4));
    }
}
