// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The typed command set dispatched down a layer stack.

use alloc::vec::Vec;

use crate::{Axis, Edge, Layer};

/// A command issued against a layer, in that layer's coordinate space.
///
/// Commands are dispatched top-down: each layer either handles a command or
/// rewrites its position payloads into the underlying layer's coordinates
/// (via [`Command::to_underlying`]) and delegates. Index payloads are stable
/// and pass through boundaries unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Move positions to a new location along one axis.
    Reorder {
        /// Axis the reorder applies to.
        axis: Axis,
        /// Positions to move, in the receiving layer's space.
        from_positions: Vec<i64>,
        /// Target position, in the receiving layer's space.
        to_position: i64,
        /// Which edge of the target the moved positions land at.
        edge: Edge,
    },
    /// Hide positions along one axis.
    Hide {
        /// Axis the hide applies to.
        axis: Axis,
        /// Positions to hide, in the receiving layer's space.
        positions: Vec<i64>,
    },
    /// Make previously hidden indexes visible again.
    Show {
        /// Axis the show applies to.
        axis: Axis,
        /// Stable indexes to reveal.
        indexes: Vec<i64>,
    },
    /// Make every hidden index on `axis` visible again.
    ShowAll {
        /// Axis to reveal.
        axis: Axis,
    },
    /// Set the pixel size of one position.
    Resize {
        /// Axis the resize applies to.
        axis: Axis,
        /// Position to resize, in the receiving layer's space.
        position: i64,
        /// New pixel size; negative values are clamped to zero.
        size: f64,
    },
    /// Set the viewport origin pixel along one axis.
    SetOrigin {
        /// Axis to scroll.
        axis: Axis,
        /// New origin offset in content pixels.
        pixel: f64,
    },
    /// Scroll the viewport by a pixel delta along one axis.
    ScrollBy {
        /// Axis to scroll.
        axis: Axis,
        /// Signed pixel delta.
        pixels: f64,
    },
    /// Disable viewport windowing so the full content is exposed (used for
    /// auto-resize and print-style full rendering).
    TurnViewportOff,
    /// Restore viewport windowing and the saved origin.
    TurnViewportOn,
    /// Request a full visual refresh without any structural change.
    VisualRefresh,
}

impl Command {
    /// Rewrites this command's position payloads from `layer`'s space into
    /// the space of `layer`'s underlying layer.
    ///
    /// Returns `None` if any position cannot be represented below, in which
    /// case the command must not be delegated further. Commands without
    /// position payloads (and index-carrying commands) convert to an
    /// unchanged clone.
    #[must_use]
    pub fn to_underlying(&self, layer: &dyn Layer) -> Option<Self> {
        match self {
            Self::Reorder {
                axis,
                from_positions,
                to_position,
                edge,
            } => {
                let from_positions = convert_all(layer, *axis, from_positions)?;
                let to_position = layer.local_to_underlying(*axis, *to_position)?;
                Some(Self::Reorder {
                    axis: *axis,
                    from_positions,
                    to_position,
                    edge: *edge,
                })
            }
            Self::Hide { axis, positions } => Some(Self::Hide {
                axis: *axis,
                positions: convert_all(layer, *axis, positions)?,
            }),
            Self::Resize {
                axis,
                position,
                size,
            } => Some(Self::Resize {
                axis: *axis,
                position: layer.local_to_underlying(*axis, *position)?,
                size: *size,
            }),
            _ => Some(self.clone()),
        }
    }
}

fn convert_all(layer: &dyn Layer, axis: Axis, positions: &[i64]) -> Option<Vec<i64>> {
    positions
        .iter()
        .map(|&p| layer.local_to_underlying(axis, p))
        .collect()
}
