// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_reorder --heading-base-level=0

//! Trellis Reorder: a transform layer that permutes positions along one axis.
//!
//! [`ReorderLayer`] wraps an underlying [`Layer`] and maintains a permutation
//! mapping its own positions to underlying positions. Moving positions
//! (singly or in batches, to the leading or trailing edge of a target)
//! mutates the permutation and fires a reorder [`StructuralEvent`] carrying
//! the *before* positions, indexes, and target, so downstream diffing stays
//! accurate even though the layer's state has already changed.
//!
//! The opposite axis passes through untouched.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_layer::{Axis, BaseLayer, Command, Edge, Layer};
//! use trellis_reorder::ReorderLayer;
//!
//! let mut layer = ReorderLayer::new(BaseLayer::new(5, 5), Axis::Row);
//!
//! // Move rows 0 and 1 after row 4: the permutation becomes 2,3,4,0,1.
//! let mut events = Vec::new();
//! let handled = layer.do_command(
//!     &Command::Reorder {
//!         axis: Axis::Row,
//!         from_positions: vec![0, 1],
//!         to_position: 4,
//!         edge: Edge::Trailing,
//!     },
//!     &mut events,
//! );
//! assert!(handled);
//! assert_eq!(layer.order(), &[2, 3, 4, 0, 1]);
//!
//! // Position 0 now shows the row whose stable index is 2.
//! assert_eq!(layer.index_of(Axis::Row, 0), Some(2));
//! assert_eq!(layer.position_of_index(Axis::Row, 0), Some(3));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use trellis_layer::{
    Axis, Command, Edge, EventRelay, Layer, LayerEvent, LayerId, LayerListener, StructuralEvent,
    convert_from,
};
use trellis_range::util::ranges_of;

/// A transform layer that maintains a permutation of positions along one
/// axis.
///
/// The permutation maps this layer's positions to underlying positions. It is
/// created as the identity and re-synced to the identity if the underlying
/// count changes out from under it (a structural change below discards any
/// ordering that no longer fits).
#[derive(Debug)]
pub struct ReorderLayer<L: Layer> {
    id: LayerId,
    axis: Axis,
    underlying: L,
    order: Vec<i64>,
    relay: EventRelay,
}

impl<L: Layer> ReorderLayer<L> {
    /// Creates a reorder layer over `underlying` for `axis`, starting with
    /// the identity permutation.
    #[must_use]
    pub fn new(underlying: L, axis: Axis) -> Self {
        let order = (0..underlying.count(axis)).collect();
        Self {
            id: LayerId::next(),
            axis,
            underlying,
            order,
            relay: EventRelay::new(),
        }
    }

    /// The axis this layer reorders.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The current permutation: element `p` is the underlying position shown
    /// at this layer's position `p`.
    #[must_use]
    pub fn order(&self) -> &[i64] {
        &self.order
    }

    /// A shared reference to the underlying layer.
    #[must_use]
    pub fn underlying(&self) -> &L {
        &self.underlying
    }

    /// Moves a single position to `to_position`; see
    /// [`ReorderLayer::reorder_multiple`].
    pub fn reorder(
        &mut self,
        from_position: i64,
        to_position: i64,
        edge: Edge,
        events: &mut Vec<LayerEvent>,
    ) -> bool {
        self.reorder_multiple(&[from_position], to_position, edge, events)
    }

    /// Moves `from_positions` contiguously to the given edge of
    /// `to_position`, fires the reorder event, and appends it to `events`.
    ///
    /// Returns `false` without mutating if the target or every source
    /// position is out of range. Out-of-range source positions are dropped;
    /// duplicates are collapsed.
    pub fn reorder_multiple(
        &mut self,
        from_positions: &[i64],
        to_position: i64,
        edge: Edge,
        events: &mut Vec<LayerEvent>,
    ) -> bool {
        self.sync_order();
        let count = self.order.len() as i64;

        let mut froms: Vec<i64> = from_positions
            .iter()
            .copied()
            .filter(|p| (0..count).contains(p))
            .collect();
        froms.sort_unstable();
        froms.dedup();
        if froms.is_empty() || !(0..count).contains(&to_position) {
            return false;
        }

        // Capture the before state for the event while positions still mean
        // what the caller meant.
        let before_ranges = ranges_of(&froms);
        let before_indexes: Vec<i64> = froms
            .iter()
            .filter_map(|&p| self.index_of(self.axis, p))
            .collect();

        let moved: Vec<i64> = froms.iter().map(|&p| self.order[p as usize]).collect();
        for &p in froms.iter().rev() {
            self.order.remove(p as usize);
        }
        let insertion = match edge {
            Edge::Leading => to_position,
            Edge::Trailing => to_position + 1,
        };
        let shift = froms.iter().filter(|&&p| p < insertion).count() as i64;
        let at = (insertion - shift).clamp(0, self.order.len() as i64) as usize;
        self.order.splice(at..at, moved);

        let event = LayerEvent::Structural(StructuralEvent::reorder(
            self.axis,
            before_ranges,
            before_indexes,
            to_position,
            edge,
        ));
        self.relay.fire(&event);
        events.push(event);
        true
    }

    /// Re-syncs the permutation to the identity if the underlying count
    /// changed.
    fn sync_order(&mut self) {
        let count = self.underlying.count(self.axis);
        if self.order.len() as i64 != count {
            self.order = (0..count).collect();
        }
    }
}

impl<L: Layer> Layer for ReorderLayer<L> {
    fn id(&self) -> LayerId {
        self.id
    }

    fn count(&self, axis: Axis) -> i64 {
        if axis == self.axis {
            self.order.len() as i64
        } else {
            self.underlying.count(axis)
        }
    }

    fn size_of(&self, axis: Axis, position: i64) -> f64 {
        match self.local_to_underlying(axis, position) {
            Some(u) => self.underlying.size_of(axis, u),
            None => 0.0,
        }
    }

    fn local_to_underlying(&self, axis: Axis, position: i64) -> Option<i64> {
        if axis == self.axis {
            usize::try_from(position)
                .ok()
                .and_then(|p| self.order.get(p))
                .copied()
        } else {
            (position >= 0 && position < self.underlying.count(axis)).then_some(position)
        }
    }

    fn underlying_to_local(&self, axis: Axis, underlying_position: i64) -> Option<i64> {
        if axis == self.axis {
            self.order
                .iter()
                .position(|&u| u == underlying_position)
                .map(|p| p as i64)
        } else {
            (underlying_position >= 0 && underlying_position < self.underlying.count(axis))
                .then_some(underlying_position)
        }
    }

    fn index_of(&self, axis: Axis, position: i64) -> Option<i64> {
        let u = self.local_to_underlying(axis, position)?;
        self.underlying.index_of(axis, u)
    }

    fn position_of_index(&self, axis: Axis, index: i64) -> Option<i64> {
        let u = self.underlying.position_of_index(axis, index)?;
        self.underlying_to_local(axis, u)
    }

    fn do_command(&mut self, command: &Command, events: &mut Vec<LayerEvent>) -> bool {
        match command {
            Command::Reorder {
                axis,
                from_positions,
                to_position,
                edge,
            } if *axis == self.axis => {
                self.reorder_multiple(from_positions, *to_position, *edge, events)
            }
            _ => {
                let Some(converted) = command.to_underlying(self) else {
                    return false;
                };
                let mark = events.len();
                let handled = self.underlying.do_command(&converted, events);
                convert_from(events, mark, self);
                for event in &events[mark..] {
                    self.relay.fire(event);
                }
                handled
            }
        }
    }

    fn add_listener(&mut self, listener: LayerListener) {
        self.relay.add_listener(listener);
    }
}
