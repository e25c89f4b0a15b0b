// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trait implemented by every transformation stage.

use alloc::vec::Vec;

use trellis_range::{Range, util::ranges_of};

use crate::{Axis, Command, LayerEvent, LayerListener, LayerId};

/// One stage in a composable transformation stack.
///
/// A layer exposes a contiguous *position* space `0..count(axis)` per axis
/// and converts between its own positions and those of the layer directly
/// beneath it. Pixel extents are reported in the layer's own coordinate
/// space, so a viewport layer reports window-relative pixels while the layers
/// below it report content pixels.
///
/// Conversions that cannot be represented in the target space return `None`;
/// callers are expected to check before use. Out-of-range probes are routine
/// (mid-scroll, mid-reorder) and are never an error.
pub trait Layer {
    /// Unique identity of this layer instance, used as the event
    /// conversion-state token.
    fn id(&self) -> LayerId;

    /// Number of positions along `axis` in this layer's space.
    fn count(&self, axis: Axis) -> i64;

    /// Pixel size of one position. Out-of-range positions report `0.0`.
    fn size_of(&self, axis: Axis, position: i64) -> f64;

    /// Total pixel extent of this layer along `axis`.
    fn extent(&self, axis: Axis) -> f64 {
        (0..self.count(axis)).map(|p| self.size_of(axis, p)).sum()
    }

    /// Pixel offset of the start of `position` from the start of this
    /// layer's space.
    fn start_of(&self, axis: Axis, position: i64) -> f64 {
        (0..position.max(0)).map(|p| self.size_of(axis, p)).sum()
    }

    /// The position whose pixel span contains `pixel`, or `None` if the
    /// offset lies outside this layer's extent.
    fn position_at(&self, axis: Axis, pixel: f64) -> Option<i64> {
        if pixel < 0.0 {
            return None;
        }
        let mut start = 0.0;
        for p in 0..self.count(axis) {
            let end = start + self.size_of(axis, p);
            if pixel < end {
                return Some(p);
            }
            start = end;
        }
        None
    }

    /// Converts a position in this layer's space into the space of the
    /// adjacent underlying layer.
    fn local_to_underlying(&self, axis: Axis, position: i64) -> Option<i64>;

    /// Converts a position in the underlying layer's space into this layer's
    /// space. Returns `None` for positions this layer does not expose (for
    /// example, hidden or scrolled-out positions).
    fn underlying_to_local(&self, axis: Axis, underlying_position: i64) -> Option<i64>;

    /// Converts a collection of underlying-position ranges into this layer's
    /// space.
    ///
    /// The default implementation converts every contained position
    /// individually, drops the unrepresentable ones, and regroups the
    /// survivors into minimal contiguous ranges. Layers with an
    /// order-preserving mapping may override this with endpoint arithmetic.
    fn underlying_to_local_ranges(&self, axis: Axis, ranges: &[Range]) -> Vec<Range> {
        let converted: Vec<i64> = ranges
            .iter()
            .flat_map(Range::iter)
            .filter_map(|p| self.underlying_to_local(axis, p))
            .collect();
        ranges_of(&converted)
    }

    /// Resolves a position in this layer's space to the stable index of the
    /// bottom layer, or `None` if the position is out of range.
    fn index_of(&self, axis: Axis, position: i64) -> Option<i64>;

    /// Resolves a stable index to its current position in this layer's
    /// space, or `None` if the index is not visible here.
    fn position_of_index(&self, axis: Axis, index: i64) -> Option<i64>;

    /// Handles `command` or delegates it to the underlying layer, returning
    /// whether it was consumed anywhere in the stack.
    ///
    /// Events produced by the mutation are appended to `events`. A delegating
    /// layer converts every appended event into its own coordinate space
    /// (dropping events whose target becomes unrepresentable) and notifies
    /// its listeners, so when the outermost call returns, `events` holds the
    /// surviving events in the outermost layer's coordinates, in mutation
    /// order.
    fn do_command(&mut self, command: &Command, events: &mut Vec<LayerEvent>) -> bool;

    /// Subscribes a listener to events fired by (or propagated through) this
    /// layer. Listeners observe events in this layer's coordinate space.
    fn add_listener(&mut self, listener: LayerListener);
}
