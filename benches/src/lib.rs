// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Trellis benchmarks.

use trellis_hideshow::HideShowLayer;
use trellis_layer::{Axis, BaseLayer};
use trellis_reorder::ReorderLayer;

/// A reorder + hide/show column stack over a base of `columns` x 10.
#[must_use]
pub fn column_stack(columns: i64) -> HideShowLayer<ReorderLayer<BaseLayer>> {
    let base = BaseLayer::new(columns, 10);
    let reorder = ReorderLayer::new(base, Axis::Column);
    HideShowLayer::new(reorder, Axis::Column)
}

/// Every third value in `0..n`, the worst case for run grouping.
#[must_use]
pub fn scattered_values(n: i64) -> Vec<i64> {
    (0..n).step_by(3).collect()
}
