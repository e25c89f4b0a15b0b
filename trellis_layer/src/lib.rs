// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_layer --heading-base-level=0

//! Trellis Layer: the layer abstraction, command set, and structural event model.
//!
//! A Trellis grid is a stack of composable transformation layers. Each layer
//! exposes a *position* space — the visible, contiguous `0..count` coordinates
//! of that stage — and converts between its own positions and those of the
//! layer directly beneath it. The stable *index* space of the bottom layer
//! identifies underlying data regardless of the current visual arrangement.
//!
//! The core pieces are:
//!
//! - [`Layer`]: the trait every transformation stage implements. It reports
//!   row/column counts and pixel extents, converts positions across the layer
//!   boundary, dispatches [`Command`]s down the stack, and notifies listeners
//!   of [`LayerEvent`]s travelling up.
//! - [`Command`]: a tagged command issued against the top of a stack.
//!   Position-carrying commands are rewritten into the underlying layer's
//!   coordinates at every boundary on the way down; a command whose positions
//!   cannot be represented below is rejected, never panicked on.
//! - [`StructuralEvent`] / [`LayerEvent`]: tagged structural-change events
//!   (reorder, hide, show, resize) carrying enough *before* state to compute
//!   a collection of [`StructuralDiff`] records on demand. As an event
//!   propagates up the stack, [`StructuralEvent::convert_to_local`] rewrites
//!   its coordinates into each enclosing layer's space, exactly once per
//!   boundary, and drops the event when a target position becomes
//!   unrepresentable.
//! - [`BaseLayer`]: the concrete bottom layer with fixed counts, default
//!   pixel sizes, and per-position size overrides. At the base, positions and
//!   indexes coincide.
//!
//! ## Coordinate failure semantics
//!
//! Per-frame lookups routinely probe out-of-range positions mid-scroll and
//! mid-reorder, so a conversion that cannot be represented in the target
//! space returns `None` rather than panicking. Callers check before use;
//! event propagation down an invalid branch simply stops.
//!
//! ## Minimal example
//!
//! A two-entry "stack" of just a base layer, resized through the command
//! protocol:
//!
//! ```rust
//! use trellis_layer::{Axis, BaseLayer, Command, Layer, LayerEvent};
//!
//! let mut base = BaseLayer::new(5, 3);
//! assert_eq!(base.count(Axis::Column), 5);
//!
//! let mut events = Vec::new();
//! let handled = base.do_command(
//!     &Command::Resize { axis: Axis::Column, position: 2, size: 150.0 },
//!     &mut events,
//! );
//! assert!(handled);
//! assert_eq!(base.size_of(Axis::Column, 2), 150.0);
//!
//! // The mutation produced exactly one structural event for the column axis.
//! assert_eq!(events.len(), 1);
//! match &events[0] {
//!     LayerEvent::Structural(ev) => assert!(ev.is_horizontal_change()),
//!     LayerEvent::VisualRefresh => unreachable!(),
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod base;
mod command;
mod diff;
mod event;
mod layer;
mod types;

pub use base::{BaseLayer, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};
pub use command::Command;
pub use diff::{DiffKind, StructuralDiff, hide_diffs, reorder_diffs, show_diffs};
pub use event::{
    ChangeFlags, EventRelay, LayerEvent, LayerListener, StructuralEvent, StructuralKind,
    convert_from,
};
pub use layer::Layer;
pub use types::{Axis, Edge, LayerId};
