// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_hideshow --heading-base-level=0

//! Trellis Hide/Show: a transform layer that removes positions along one axis.
//!
//! [`HideShowLayer`] wraps an underlying [`Layer`] and maintains a set of
//! hidden *indexes*. Position-to-position conversion skips hidden entries, so
//! this layer's visible position space stays contiguous `0..count` even
//! though the underlying indexes have gaps. A position is hidden iff its
//! index is in the hidden set, which makes hiding stable under reorders
//! happening below.
//!
//! Hiding fires a hide [`StructuralEvent`] carrying the vacated position
//! ranges (in the underlying layer's coordinate space at the time of
//! firing); showing fires a show event carrying the sorted now-visible
//! positions, from which consumers compute one `Add` diff per restored run.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_hideshow::HideShowLayer;
//! use trellis_layer::{Axis, BaseLayer, Layer};
//!
//! let mut layer = HideShowLayer::new(BaseLayer::new(5, 5), Axis::Column);
//!
//! let mut events = Vec::new();
//! layer.hide_positions(&[1, 4], &mut events);
//! assert_eq!(layer.count(Axis::Column), 3);
//!
//! // The visible position space is contiguous: positions 0,1,2 map to
//! // underlying 0,2,3.
//! assert_eq!(layer.local_to_underlying(Axis::Column, 1), Some(2));
//! assert_eq!(layer.underlying_to_local(Axis::Column, 3), Some(2));
//! // Hidden positions are not representable locally.
//! assert_eq!(layer.underlying_to_local(Axis::Column, 4), None);
//!
//! layer.show_all(&mut events);
//! assert_eq!(layer.count(Axis::Column), 5);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashSet;
use smallvec::SmallVec;
use trellis_layer::{
    Axis, Command, EventRelay, Layer, LayerEvent, LayerId, LayerListener, StructuralEvent,
    convert_from,
};
use trellis_range::util::ranges_of;

/// Sorted hidden positions; hides are typically small and short-lived.
type HiddenPositions = SmallVec<[i64; 8]>;

/// A transform layer that hides a removable subset of indexes along one
/// axis.
///
/// The opposite axis passes through untouched.
#[derive(Debug)]
pub struct HideShowLayer<L: Layer> {
    id: LayerId,
    axis: Axis,
    underlying: L,
    hidden: HashSet<i64>,
    relay: EventRelay,
}

impl<L: Layer> HideShowLayer<L> {
    /// Creates a hide/show layer over `underlying` for `axis` with nothing
    /// hidden.
    #[must_use]
    pub fn new(underlying: L, axis: Axis) -> Self {
        Self {
            id: LayerId::next(),
            axis,
            underlying,
            hidden: HashSet::new(),
            relay: EventRelay::new(),
        }
    }

    /// The axis this layer hides along.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// A shared reference to the underlying layer.
    #[must_use]
    pub fn underlying(&self) -> &L {
        &self.underlying
    }

    /// The hidden indexes, sorted.
    #[must_use]
    pub fn hidden_indexes(&self) -> Vec<i64> {
        let mut out: Vec<i64> = self.hidden.iter().copied().collect();
        out.sort_unstable();
        out
    }

    /// Returns `true` if `index` is currently hidden.
    #[must_use]
    pub fn is_hidden(&self, index: i64) -> bool {
        self.hidden.contains(&index)
    }

    /// The hidden indexes resolved to underlying positions, sorted. Hidden
    /// indexes the underlying layer no longer exposes are skipped.
    fn hidden_positions(&self) -> HiddenPositions {
        let mut out: HiddenPositions = self
            .hidden
            .iter()
            .filter_map(|&index| self.underlying.position_of_index(self.axis, index))
            .collect();
        out.sort_unstable();
        out
    }

    /// Hides the given positions (in this layer's space), fires the hide
    /// event, and appends it to `events`.
    ///
    /// Returns `false` without mutating if no position is valid. Out-of-range
    /// positions are dropped; duplicates are collapsed.
    pub fn hide_positions(&mut self, positions: &[i64], events: &mut Vec<LayerEvent>) -> bool {
        let mut locals: Vec<i64> = positions
            .iter()
            .copied()
            .filter(|&p| p >= 0 && p < self.count(self.axis))
            .collect();
        locals.sort_unstable();
        locals.dedup();
        if locals.is_empty() {
            return false;
        }

        // Capture underlying positions and stable indexes before mutating;
        // the event's ranges are expressed in the underlying layer's space at
        // the time of firing.
        let underlying_positions: Vec<i64> = locals
            .iter()
            .filter_map(|&p| self.local_to_underlying(self.axis, p))
            .collect();
        let indexes: Vec<i64> = locals
            .iter()
            .filter_map(|&p| self.index_of(self.axis, p))
            .collect();

        for &index in &indexes {
            self.hidden.insert(index);
        }

        let event = LayerEvent::Structural(StructuralEvent::hide(
            self.axis,
            ranges_of(&underlying_positions),
            indexes,
        ));
        self.relay.fire(&event);
        events.push(event);
        true
    }

    /// Reveals the given hidden indexes, fires the show event, and appends
    /// it to `events`.
    ///
    /// Indexes that are not currently hidden are ignored; returns `false`
    /// without firing if nothing changed.
    pub fn show_indexes(&mut self, indexes: &[i64], events: &mut Vec<LayerEvent>) -> bool {
        let mut revealed: Vec<i64> = indexes
            .iter()
            .copied()
            .filter(|index| self.hidden.remove(index))
            .collect();
        revealed.sort_unstable();
        revealed.dedup();
        if revealed.is_empty() {
            return false;
        }
        self.fire_show(revealed, events);
        true
    }

    /// Reveals every hidden index; fires one show event covering all of
    /// them. A no-op when nothing is hidden.
    pub fn show_all(&mut self, events: &mut Vec<LayerEvent>) -> bool {
        if self.hidden.is_empty() {
            return false;
        }
        let mut revealed: Vec<i64> = self.hidden.drain().collect();
        revealed.sort_unstable();
        self.fire_show(revealed, events);
        true
    }

    fn fire_show(&mut self, revealed_indexes: Vec<i64>, events: &mut Vec<LayerEvent>) {
        // After-positions of the revealed indexes, in this layer's
        // (post-mutation) space.
        let mut positions: Vec<i64> = revealed_indexes
            .iter()
            .filter_map(|&index| self.position_of_index(self.axis, index))
            .collect();
        positions.sort_unstable();

        let event =
            LayerEvent::Structural(StructuralEvent::show(self.axis, positions, revealed_indexes));
        self.relay.fire(&event);
        events.push(event);
    }
}

impl<L: Layer> Layer for HideShowLayer<L> {
    fn id(&self) -> LayerId {
        self.id
    }

    fn count(&self, axis: Axis) -> i64 {
        if axis == self.axis {
            self.underlying.count(axis) - self.hidden_positions().len() as i64
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
        if axis != self.axis {
            return (position >= 0 && position < self.underlying.count(axis)).then_some(position);
        }
        if position < 0 || position >= self.count(axis) {
            return None;
        }
        // Walk past every hidden slot at or before the running target.
        let mut u = position;
        for &hp in &self.hidden_positions() {
            if hp <= u {
                u += 1;
            }
        }
        Some(u)
    }

    fn underlying_to_local(&self, axis: Axis, underlying_position: i64) -> Option<i64> {
        if axis != self.axis {
            return (underlying_position >= 0
                && underlying_position < self.underlying.count(axis))
            .then_some(underlying_position);
        }
        if underlying_position < 0 || underlying_position >= self.underlying.count(axis) {
            return None;
        }
        let hidden = self.hidden_positions();
        if hidden.contains(&underlying_position) {
            return None;
        }
        let skipped = hidden.iter().filter(|&&hp| hp < underlying_position).count();
        Some(underlying_position - skipped as i64)
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
            Command::Hide { axis, positions } if *axis == self.axis => {
                self.hide_positions(positions, events)
            }
            Command::Show { axis, indexes } if *axis == self.axis => {
                self.show_indexes(indexes, events)
            }
            Command::ShowAll { axis } if *axis == self.axis => self.show_all(events),
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
