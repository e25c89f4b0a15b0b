// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural-change events and their propagation machinery.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;
use trellis_range::Range;

use crate::{Axis, Edge, Layer, LayerId, StructuralDiff, hide_diffs, reorder_diffs, show_diffs};

bitflags! {
    /// Which axes of the grid structure an event changed.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// The column arrangement changed.
        const HORIZONTAL = 1 << 0;
        /// The row arrangement changed.
        const VERTICAL = 1 << 1;
    }
}

/// The kind-specific payload of a [`StructuralEvent`].
///
/// Every payload stores *before* coordinates captured at the layer that
/// performed the mutation, so diffs stay accurate even though the layer's own
/// state has already changed by the time the event is observed.
#[derive(Clone, Debug, PartialEq)]
pub enum StructuralKind {
    /// Positions moved to a new location.
    Reorder {
        /// Contiguous before-position ranges that moved (sorted, disjoint).
        before_from_ranges: Vec<Range>,
        /// Stable indexes of the moved positions.
        before_from_indexes: Vec<i64>,
        /// Target position, in before coordinates.
        before_to_position: i64,
        /// Which edge of the target the moved positions landed at.
        edge: Edge,
    },
    /// Positions were hidden.
    Hide {
        /// Before-position ranges that were hidden (sorted, disjoint).
        ranges: Vec<Range>,
        /// Stable indexes of the hidden positions.
        indexes: Vec<i64>,
    },
    /// Previously hidden indexes became visible.
    Show {
        /// Sorted after-positions that are now visible.
        positions: Vec<i64>,
        /// Stable indexes of the revealed positions.
        indexes: Vec<i64>,
    },
    /// Pixel sizes changed without moving positions.
    Resize {
        /// Position ranges whose pixel size changed.
        ranges: Vec<Range>,
    },
}

/// A structural change along one axis, fired by the layer that performed the
/// mutation and converted into each enclosing layer's coordinate space as it
/// propagates up the stack.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuralEvent {
    /// The axis whose arrangement changed. The opposite axis is untouched:
    /// exactly one axis per event instance carries diffs.
    pub axis: Axis,
    /// The kind-specific before-state payload.
    pub kind: StructuralKind,
    converted_against: Option<LayerId>,
}

impl StructuralEvent {
    /// Creates a reorder event from before-state captured at the mutating
    /// layer.
    #[must_use]
    pub fn reorder(
        axis: Axis,
        before_from_ranges: Vec<Range>,
        before_from_indexes: Vec<i64>,
        before_to_position: i64,
        edge: Edge,
    ) -> Self {
        Self {
            axis,
            kind: StructuralKind::Reorder {
                before_from_ranges,
                before_from_indexes,
                before_to_position,
                edge,
            },
            converted_against: None,
        }
    }

    /// Creates a hide event from the hidden before-position ranges.
    #[must_use]
    pub fn hide(axis: Axis, ranges: Vec<Range>, indexes: Vec<i64>) -> Self {
        Self {
            axis,
            kind: StructuralKind::Hide { ranges, indexes },
            converted_against: None,
        }
    }

    /// Creates a show event from the sorted now-visible positions.
    #[must_use]
    pub fn show(axis: Axis, positions: Vec<i64>, indexes: Vec<i64>) -> Self {
        Self {
            axis,
            kind: StructuralKind::Show { positions, indexes },
            converted_against: None,
        }
    }

    /// Creates a resize event for the given position ranges.
    #[must_use]
    pub fn resize(axis: Axis, ranges: Vec<Range>) -> Self {
        Self {
            axis,
            kind: StructuralKind::Resize { ranges },
            converted_against: None,
        }
    }

    /// The axes this event changed.
    #[must_use]
    pub fn change_flags(&self) -> ChangeFlags {
        match self.axis {
            Axis::Column => ChangeFlags::HORIZONTAL,
            Axis::Row => ChangeFlags::VERTICAL,
        }
    }

    /// Returns `true` if the column arrangement changed.
    #[must_use]
    pub fn is_horizontal_change(&self) -> bool {
        self.axis == Axis::Column
    }

    /// Returns `true` if the row arrangement changed.
    #[must_use]
    pub fn is_vertical_change(&self) -> bool {
        self.axis == Axis::Row
    }

    /// Computes the structural diffs for `axis` on demand.
    ///
    /// Returns `None` for the axis this event did not change; callers check
    /// [`StructuralEvent::is_horizontal_change`] /
    /// [`StructuralEvent::is_vertical_change`] first. A resize produces an
    /// empty diff collection: pixel geometry changed but no position moved.
    #[must_use]
    pub fn diffs(&self, axis: Axis) -> Option<Vec<StructuralDiff>> {
        if axis != self.axis {
            return None;
        }
        Some(match &self.kind {
            StructuralKind::Reorder {
                before_from_ranges,
                before_to_position,
                edge,
                ..
            } => reorder_diffs(before_from_ranges, *before_to_position, *edge),
            StructuralKind::Hide { ranges, .. } => hide_diffs(ranges),
            StructuralKind::Show { positions, .. } => show_diffs(positions),
            StructuralKind::Resize { .. } => Vec::new(),
        })
    }

    /// Rewrites this event's coordinates from the space of `layer`'s
    /// underlying layer into `layer`'s own space.
    ///
    /// Returns `false` if the event's target position cannot be represented
    /// in `layer`'s space, in which case the event must be dropped and not
    /// propagated further up this branch.
    ///
    /// Idempotent per boundary: converting twice against the same layer is a
    /// no-op, tracked via the layer's [`LayerId`].
    pub fn convert_to_local(&mut self, layer: &dyn Layer) -> bool {
        if self.converted_against == Some(layer.id()) {
            return true;
        }
        let axis = self.axis;
        match &mut self.kind {
            StructuralKind::Reorder {
                before_from_ranges,
                before_to_position,
                ..
            } => {
                let Some(to) = layer.underlying_to_local(axis, *before_to_position) else {
                    return false;
                };
                *before_from_ranges = layer.underlying_to_local_ranges(axis, before_from_ranges);
                *before_to_position = to;
            }
            StructuralKind::Hide { ranges, .. } => {
                *ranges = layer.underlying_to_local_ranges(axis, ranges);
            }
            StructuralKind::Show { positions, .. } => {
                let mut converted: Vec<i64> = positions
                    .iter()
                    .filter_map(|&p| layer.underlying_to_local(axis, p))
                    .collect();
                converted.sort_unstable();
                *positions = converted;
            }
            StructuralKind::Resize { ranges } => {
                *ranges = layer.underlying_to_local_ranges(axis, ranges);
            }
        }
        self.converted_against = Some(layer.id());
        true
    }
}

/// An event fired by a layer and propagated to every layer above it.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerEvent {
    /// A structural change along one axis.
    Structural(StructuralEvent),
    /// A request to repaint without any structural change. Carries no
    /// coordinates, so it propagates through every boundary unchanged.
    VisualRefresh,
}

impl LayerEvent {
    /// Converts the event across one layer boundary; see
    /// [`StructuralEvent::convert_to_local`]. Visual refreshes always
    /// convert successfully.
    pub fn convert_to_local(&mut self, layer: &dyn Layer) -> bool {
        match self {
            Self::Structural(ev) => ev.convert_to_local(layer),
            Self::VisualRefresh => true,
        }
    }
}

/// A subscription callback observing events in one layer's coordinate space.
pub type LayerListener = Box<dyn FnMut(&LayerEvent)>;

/// Listener list embedded in each concrete layer.
#[derive(Default)]
pub struct EventRelay {
    listeners: Vec<LayerListener>,
}

impl EventRelay {
    /// Creates a relay with no listeners.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Adds a listener.
    pub fn add_listener(&mut self, listener: LayerListener) {
        self.listeners.push(listener);
    }

    /// Notifies every listener of `event`, in subscription order.
    pub fn fire(&mut self, event: &LayerEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for EventRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRelay")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Converts every event appended at or after `mark` across `layer`'s
/// boundary, removing events whose conversion fails.
///
/// Delegating layers call this after the underlying `do_command` returns, so
/// each event is converted exactly once per boundary, bottom-up, matching the
/// physical stack order.
pub fn convert_from(events: &mut Vec<LayerEvent>, mark: usize, layer: &dyn Layer) {
    let mut i = mark;
    while i < events.len() {
        if events[i].convert_to_local(layer) {
            i += 1;
        } else {
            events.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use trellis_range::Range;

    use super::{ChangeFlags, LayerEvent, StructuralEvent};
    use crate::{Axis, BaseLayer, Edge, Layer};

    #[test]
    fn exactly_one_axis_carries_diffs() {
        let ev = StructuralEvent::hide(Axis::Column, vec![Range::new(1, 2)], vec![1]);
        assert!(ev.diffs(Axis::Column).is_some());
        assert!(ev.diffs(Axis::Row).is_none());
        assert!(ev.is_horizontal_change());
        assert!(!ev.is_vertical_change());
        assert_eq!(ev.change_flags(), ChangeFlags::HORIZONTAL);
    }

    #[test]
    fn resize_has_empty_diffs_but_flags_its_axis() {
        let ev = StructuralEvent::resize(Axis::Row, vec![Range::new(2, 3)]);
        assert_eq!(ev.diffs(Axis::Row), Some(vec![]));
        assert_eq!(ev.change_flags(), ChangeFlags::VERTICAL);
    }

    #[test]
    fn convert_to_local_is_idempotent_per_layer() {
        let base = BaseLayer::new(10, 10);
        let mut ev = StructuralEvent::reorder(
            Axis::Column,
            vec![Range::new(0, 2)],
            vec![0, 1],
            4,
            Edge::Trailing,
        );
        assert!(ev.convert_to_local(&base));
        let once = ev.clone();
        // A second conversion against the same boundary must not double-shift.
        assert!(ev.convert_to_local(&base));
        assert_eq!(ev, once);
    }

    #[test]
    fn cloned_events_do_not_alias() {
        let base = BaseLayer::new(10, 10);
        let ev = LayerEvent::Structural(StructuralEvent::show(Axis::Row, vec![3], vec![3]));
        let mut fork = ev.clone();
        assert!(fork.convert_to_local(&base));
        // The original branch still holds unconverted state.
        assert_eq!(
            ev,
            LayerEvent::Structural(StructuralEvent::show(Axis::Row, vec![3], vec![3]))
        );
    }

    #[test]
    fn visual_refresh_converts_through_any_boundary() {
        let base = BaseLayer::new(2, 2);
        let mut ev = LayerEvent::VisualRefresh;
        assert!(ev.convert_to_local(&base));
    }
}
