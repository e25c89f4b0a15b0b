// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_viewport --heading-base-level=0

//! Trellis Viewport: the transform layer that windows a scrollable region.
//!
//! [`ViewportLayer`] wraps an underlying [`Layer`] and maps the visible pixel
//! window — a pixel origin ([`kurbo::Point`]) plus a client area
//! ([`kurbo::Size`]) — onto a sub-range of underlying positions. The visible
//! count per axis is computed by accumulating underlying position sizes from
//! the origin until the client area is filled; partially visible positions at
//! either edge count as visible.
//!
//! Position conversion across the viewport boundary is pure arithmetic
//! (adding or subtracting the origin position), so positions past the visible
//! end still convert; only positions that would land before the window start
//! are unrepresentable. This is what lets structural events from below be
//! trimmed to exactly the affected screen region as they propagate up.
//!
//! The viewport can be temporarily turned off ([`Command::TurnViewportOff`])
//! to expose the full underlying space for auto-resize or print-style full
//! rendering, and back on again, restoring the saved origin.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use trellis_layer::{Axis, BaseLayer, Layer};
//! use trellis_viewport::ViewportLayer;
//!
//! // Five 10px columns, a 20px-wide window.
//! let base = BaseLayer::with_sizes(5, 5, 10.0, 10.0);
//! let mut viewport = ViewportLayer::new(base, Size::new(20.0, 20.0));
//! assert_eq!(viewport.count(Axis::Column), 2);
//!
//! viewport.set_origin(Axis::Column, 10.0);
//! assert_eq!(viewport.visible_range(Axis::Column), trellis_range::Range::new(1, 3));
//! assert_eq!(viewport.start_of(Axis::Column, 0), 0.0);
//! assert_eq!(viewport.index_of(Axis::Column, 0), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Size};
use trellis_layer::{
    Axis, Command, EventRelay, Layer, LayerEvent, LayerId, LayerListener, convert_from,
};
use trellis_range::Range;

/// The transform layer that windows a scrollable visible region over the
/// full position space of the layers below it.
#[derive(Debug)]
pub struct ViewportLayer<L: Layer> {
    id: LayerId,
    underlying: L,
    /// Pixel origin of the window, in content (underlying) pixels.
    origin: Point,
    client_area: Size,
    /// The origin to restore when the viewport is turned back on; `Some`
    /// while the viewport is off.
    saved_origin: Option<Point>,
    relay: EventRelay,
}

impl<L: Layer> ViewportLayer<L> {
    /// Creates a viewport over `underlying` with the given client area and
    /// the origin at the top-left of the content.
    #[must_use]
    pub fn new(underlying: L, client_area: Size) -> Self {
        Self {
            id: LayerId::next(),
            underlying,
            origin: Point::ORIGIN,
            client_area: Size::new(client_area.width.max(0.0), client_area.height.max(0.0)),
            saved_origin: None,
            relay: EventRelay::new(),
        }
    }

    /// A shared reference to the underlying layer.
    #[must_use]
    pub fn underlying(&self) -> &L {
        &self.underlying
    }

    /// The current pixel origin in content coordinates.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// The client area in pixels.
    #[must_use]
    pub const fn client_area(&self) -> Size {
        self.client_area
    }

    /// Returns `true` while windowing is disabled and the full underlying
    /// space is exposed.
    #[must_use]
    pub const fn is_viewport_off(&self) -> bool {
        self.saved_origin.is_some()
    }

    /// Resizes the client area, clamping the origin to the new maximum.
    pub fn set_client_area(&mut self, client_area: Size) {
        self.client_area = Size::new(client_area.width.max(0.0), client_area.height.max(0.0));
        self.clamp_origin();
    }

    /// Sets the origin pixel along `axis`, clamped to `[0, content - client]`.
    ///
    /// While the viewport is off, the saved origin is updated instead so the
    /// scroll position takes effect on [`Command::TurnViewportOn`].
    pub fn set_origin(&mut self, axis: Axis, pixel: f64) {
        let clamped = pixel.clamp(0.0, self.max_origin(axis));
        if let Some(saved) = &mut self.saved_origin {
            match axis {
                Axis::Column => saved.x = clamped,
                Axis::Row => saved.y = clamped,
            }
            return;
        }
        match axis {
            Axis::Column => self.origin.x = clamped,
            Axis::Row => self.origin.y = clamped,
        }
    }

    /// Scrolls by a signed pixel delta along `axis`.
    pub fn scroll_by(&mut self, axis: Axis, pixels: f64) {
        let current = match (&self.saved_origin, axis) {
            (Some(saved), Axis::Column) => saved.x,
            (Some(saved), Axis::Row) => saved.y,
            (None, Axis::Column) => self.origin.x,
            (None, Axis::Row) => self.origin.y,
        };
        self.set_origin(axis, current + pixels);
    }

    /// The underlying positions currently visible, as a half-open range.
    #[must_use]
    pub fn visible_range(&self, axis: Axis) -> Range {
        let start = self.origin_position(axis);
        Range::new(start, start + self.count(axis))
    }

    fn origin_pixel(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Column => self.origin.x,
            Axis::Row => self.origin.y,
        }
    }

    fn client_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Column => self.client_area.width,
            Axis::Row => self.client_area.height,
        }
    }

    fn max_origin(&self, axis: Axis) -> f64 {
        (self.underlying.extent(axis) - self.client_extent(axis)).max(0.0)
    }

    /// First underlying position at or spanning the origin pixel.
    fn origin_position(&self, axis: Axis) -> i64 {
        if self.is_viewport_off() {
            return 0;
        }
        self.underlying
            .position_at(axis, self.origin_pixel(axis))
            .unwrap_or(0)
    }

    fn clamp_origin(&mut self) {
        for axis in [Axis::Column, Axis::Row] {
            let max = self.max_origin(axis);
            match axis {
                Axis::Column => self.origin.x = self.origin.x.clamp(0.0, max),
                Axis::Row => self.origin.y = self.origin.y.clamp(0.0, max),
            }
            if let Some(saved) = &mut self.saved_origin {
                match axis {
                    Axis::Column => saved.x = saved.x.clamp(0.0, max),
                    Axis::Row => saved.y = saved.y.clamp(0.0, max),
                }
            }
        }
    }

    fn push_refresh(&mut self, events: &mut Vec<LayerEvent>) {
        let event = LayerEvent::VisualRefresh;
        self.relay.fire(&event);
        events.push(event);
    }
}

impl<L: Layer> Layer for ViewportLayer<L> {
    fn id(&self) -> LayerId {
        self.id
    }

    fn count(&self, axis: Axis) -> i64 {
        let total = self.underlying.count(axis);
        if self.is_viewport_off() {
            return total;
        }
        let start = self.origin_position(axis);
        let limit = self.origin_pixel(axis) + self.client_extent(axis);
        let mut pos = start;
        let mut px = self.underlying.start_of(axis, start);
        while pos < total && px < limit {
            px += self.underlying.size_of(axis, pos);
            pos += 1;
        }
        pos - start
    }

    fn size_of(&self, axis: Axis, position: i64) -> f64 {
        match self.local_to_underlying(axis, position) {
            Some(u) => self.underlying.size_of(axis, u),
            None => 0.0,
        }
    }

    fn start_of(&self, axis: Axis, position: i64) -> f64 {
        match self.local_to_underlying(axis, position) {
            Some(u) => self.underlying.start_of(axis, u) - self.origin_pixel(axis),
            None => 0.0,
        }
    }

    fn position_at(&self, axis: Axis, pixel: f64) -> Option<i64> {
        if pixel < 0.0 {
            return None;
        }
        let u = self
            .underlying
            .position_at(axis, pixel + self.origin_pixel(axis))?;
        self.underlying_to_local(axis, u)
    }

    /// Pure origin arithmetic: positions past the visible end still convert,
    /// so probes beyond the window are bounds-checked by the layers below.
    fn local_to_underlying(&self, axis: Axis, position: i64) -> Option<i64> {
        (position >= 0).then(|| self.origin_position(axis) + position)
    }

    fn underlying_to_local(&self, axis: Axis, underlying_position: i64) -> Option<i64> {
        let local = underlying_position - self.origin_position(axis);
        (local >= 0).then_some(local)
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
            Command::SetOrigin { axis, pixel } => {
                self.set_origin(*axis, *pixel);
                self.push_refresh(events);
                true
            }
            Command::ScrollBy { axis, pixels } => {
                self.scroll_by(*axis, *pixels);
                self.push_refresh(events);
                true
            }
            Command::TurnViewportOff => {
                if self.saved_origin.is_none() {
                    self.saved_origin = Some(self.origin);
                    self.origin = Point::ORIGIN;
                    self.push_refresh(events);
                }
                true
            }
            Command::TurnViewportOn => {
                if let Some(saved) = self.saved_origin.take() {
                    self.origin = saved;
                    self.clamp_origin();
                    self.push_refresh(events);
                }
                true
            }
            _ => {
                let Some(converted) = command.to_underlying(self) else {
                    return false;
                };
                let mark = events.len();
                let handled = self.underlying.do_command(&converted, events);
                convert_from(events, mark, self);
                // Structural changes below may have shrunk the content.
                self.clamp_origin();
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
