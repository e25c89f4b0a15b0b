// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_range --heading-base-level=0

//! Trellis Range: half-open integer interval primitives.
//!
//! This crate provides the foundational position arithmetic used by the Trellis
//! layer stack:
//!
//! - [`Range`]: an immutable half-open interval `[start, end)` over `i64`
//!   positions, with half-open overlap semantics (ranges that merely touch at
//!   an endpoint do *not* overlap).
//! - [`RangeSet`]: an ordered collection of disjoint, non-adjacent ranges that
//!   behaves like a sorted set of individual integers. Inserting a value or
//!   range merges it with any overlapping or adjacent stored ranges; removing
//!   splits stored ranges around the removed interval.
//! - Free functions in [`util`] for partitioning integer sequences into
//!   contiguous runs, converting between integer lists and minimal range
//!   lists, merging range lists, and flattening ranges back into positions.
//!
//! Positions are signed: a negative position is the conventional "no
//! position" value produced by failed coordinate conversions higher up the
//! stack, and the flattening helpers silently filter negatives rather than
//! treating them as errors.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_range::{Range, RangeSet};
//!
//! let mut set = RangeSet::new();
//! set.insert_range(Range::new(10, 20));
//! // Adjacent ranges are merged into one on insert.
//! set.insert_range(Range::new(20, 25));
//! assert_eq!(set.ranges(), &[Range::new(10, 25)]);
//!
//! // Removing an interior interval splits the stored range.
//! set.remove_range(Range::new(12, 14));
//! assert_eq!(set.ranges(), &[Range::new(10, 12), Range::new(14, 25)]);
//! assert_eq!(set.range_count(), 2);
//! assert_eq!(set.value_count(), 13);
//! ```
//!
//! ## Grouping helpers
//!
//! ```rust
//! use trellis_range::{Range, util};
//!
//! // Maximal runs of consecutive integers.
//! let groups = util::group_by_contiguous(&[0, 1, 2, 4, 5]);
//! assert_eq!(groups, vec![vec![0, 1, 2], vec![4, 5]]);
//!
//! // The same runs, as minimal ranges.
//! let ranges = util::ranges_of(&[4, 0, 1, 5, 2]);
//! assert_eq!(ranges, vec![Range::new(0, 3), Range::new(4, 6)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod range;
mod set;
pub mod util;

pub use range::Range;
pub use set::RangeSet;
