// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The concrete bottom layer of a stack.

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;
use trellis_range::Range;

use crate::{
    Axis, Command, EventRelay, Layer, LayerEvent, LayerId, LayerListener, StructuralEvent,
};

/// Default pixel width of a column.
pub const DEFAULT_COLUMN_WIDTH: f64 = 100.0;
/// Default pixel height of a row.
pub const DEFAULT_ROW_HEIGHT: f64 = 20.0;

/// The bottom layer of a stack: fixed counts, default pixel sizes, and
/// per-position size overrides.
///
/// At the base, positions and indexes coincide, so both conversions are
/// bounds-checked identities. The base handles [`Command::Resize`] (firing a
/// resize event for the affected range) and [`Command::VisualRefresh`];
/// everything else is reported unhandled since there is no layer below.
#[derive(Debug)]
pub struct BaseLayer {
    id: LayerId,
    counts: [i64; 2],
    default_sizes: [f64; 2],
    size_overrides: [HashMap<i64, f64>; 2],
    relay: EventRelay,
}

const fn ix(axis: Axis) -> usize {
    match axis {
        Axis::Column => 0,
        Axis::Row => 1,
    }
}

impl BaseLayer {
    /// Creates a base layer with the default column width and row height.
    #[must_use]
    pub fn new(column_count: i64, row_count: i64) -> Self {
        Self::with_sizes(
            column_count,
            row_count,
            DEFAULT_COLUMN_WIDTH,
            DEFAULT_ROW_HEIGHT,
        )
    }

    /// Creates a base layer with explicit default pixel sizes.
    #[must_use]
    pub fn with_sizes(
        column_count: i64,
        row_count: i64,
        column_width: f64,
        row_height: f64,
    ) -> Self {
        assert!(
            column_count >= 0 && row_count >= 0,
            "BaseLayer counts must be non-negative"
        );
        Self {
            id: LayerId::next(),
            counts: [column_count, row_count],
            default_sizes: [column_width.max(0.0), row_height.max(0.0)],
            size_overrides: [HashMap::new(), HashMap::new()],
            relay: EventRelay::new(),
        }
    }

    /// Sets the pixel size of one position without firing an event.
    ///
    /// Out-of-range positions are ignored; negative sizes are clamped to
    /// zero. The command path ([`Command::Resize`]) fires the event.
    pub fn set_size(&mut self, axis: Axis, position: i64, size: f64) {
        if position < 0 || position >= self.counts[ix(axis)] {
            return;
        }
        self.size_overrides[ix(axis)].insert(position, size.max(0.0));
    }
}

impl Layer for BaseLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn count(&self, axis: Axis) -> i64 {
        self.counts[ix(axis)]
    }

    fn size_of(&self, axis: Axis, position: i64) -> f64 {
        if position < 0 || position >= self.counts[ix(axis)] {
            return 0.0;
        }
        self.size_overrides[ix(axis)]
            .get(&position)
            .copied()
            .unwrap_or(self.default_sizes[ix(axis)])
    }

    fn local_to_underlying(&self, axis: Axis, position: i64) -> Option<i64> {
        (position >= 0 && position < self.counts[ix(axis)]).then_some(position)
    }

    fn underlying_to_local(&self, axis: Axis, underlying_position: i64) -> Option<i64> {
        self.local_to_underlying(axis, underlying_position)
    }

    fn index_of(&self, axis: Axis, position: i64) -> Option<i64> {
        self.local_to_underlying(axis, position)
    }

    fn position_of_index(&self, axis: Axis, index: i64) -> Option<i64> {
        self.local_to_underlying(axis, index)
    }

    fn do_command(&mut self, command: &Command, events: &mut Vec<LayerEvent>) -> bool {
        match command {
            Command::Resize {
                axis,
                position,
                size,
            } => {
                if *position < 0 || *position >= self.counts[ix(*axis)] {
                    return false;
                }
                self.set_size(*axis, *position, *size);
                let event = LayerEvent::Structural(StructuralEvent::resize(
                    *axis,
                    vec![Range::new(*position, *position + 1)],
                ));
                self.relay.fire(&event);
                events.push(event);
                true
            }
            Command::VisualRefresh => {
                let event = LayerEvent::VisualRefresh;
                self.relay.fire(&event);
                events.push(event);
                true
            }
            _ => false,
        }
    }

    fn add_listener(&mut self, listener: LayerListener) {
        self.relay.add_listener(listener);
    }
}
