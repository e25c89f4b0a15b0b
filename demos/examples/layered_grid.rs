// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A composed column stack: base + reorder + hide/show + viewport.
//!
//! This example shows how the transform layers stack by ownership and how
//! commands and events flow through them:
//! - `trellis_layer::BaseLayer` holds the raw counts and pixel sizes,
//! - `trellis_reorder` permutes column positions,
//! - `trellis_hideshow` removes columns from the visible sequence,
//! - `trellis_viewport` windows the result to a scrollable client area.
//!
//! Commands are dispatched against the top layer in its own coordinates;
//! events come back out converted into that same space, with lazy diffs.
//!
//! Run:
//! - `cargo run -p trellis_demos --example layered_grid`

use kurbo::Size;
use trellis_hideshow::HideShowLayer;
use trellis_layer::{Axis, BaseLayer, Command, Edge, Layer, LayerEvent};
use trellis_reorder::ReorderLayer;
use trellis_viewport::ViewportLayer;

/// Print the visible columns of `layer`: position, stable index, pixel run.
fn print_window(layer: &dyn Layer) {
    print!("  columns:");
    for p in 0..layer.count(Axis::Column) {
        let index = layer.index_of(Axis::Column, p).unwrap_or(-1);
        print!(
            "  [{p}]=c{index} @{:.0}+{:.0}",
            layer.start_of(Axis::Column, p),
            layer.size_of(Axis::Column, p),
        );
    }
    println!();
}

/// Print every event produced by one command, with its column diffs.
fn print_events(events: &[LayerEvent]) {
    for event in events {
        match event {
            LayerEvent::Structural(ev) if ev.is_horizontal_change() => {
                println!("  event: {:?}", ev.kind);
                for diff in ev.diffs(Axis::Column).unwrap_or_default() {
                    println!("    diff: {diff:?}");
                }
            }
            other => println!("  event: {other:?}"),
        }
    }
}

fn main() {
    // Eight 60px columns, four 24px rows, windowed to a 240x96 client area:
    // four columns and all four rows visible at a time.
    let base = BaseLayer::with_sizes(8, 4, 60.0, 24.0);
    let reorder = ReorderLayer::new(base, Axis::Column);
    let hideshow = HideShowLayer::new(reorder, Axis::Column);
    let mut grid = ViewportLayer::new(hideshow, Size::new(240.0, 96.0));

    // Listeners observe events in the subscribing layer's coordinate space.
    grid.add_listener(Box::new(|event| {
        println!("  listener saw: {event:?}");
    }));

    println!("== Initial window ==");
    print_window(&grid);

    // Move the first two visible columns behind column 4 (trailing edge).
    println!("\n== Reorder columns {{0, 1}} after position 4 ==");
    let mut events = Vec::new();
    grid.do_command(
        &Command::Reorder {
            axis: Axis::Column,
            from_positions: vec![0, 1],
            to_position: 4,
            edge: Edge::Trailing,
        },
        &mut events,
    );
    print_events(&events);
    print_window(&grid);

    // Hide two of the reordered columns. Positions compact; indexes persist.
    println!("\n== Hide positions {{1, 2}} ==");
    events.clear();
    grid.do_command(
        &Command::Hide {
            axis: Axis::Column,
            positions: vec![1, 2],
        },
        &mut events,
    );
    print_events(&events);
    print_window(&grid);

    // Scroll right by one and a half columns; partial columns stay visible.
    println!("\n== Scroll right by 90px ==");
    events.clear();
    grid.do_command(
        &Command::ScrollBy {
            axis: Axis::Column,
            pixels: 90.0,
        },
        &mut events,
    );
    print_events(&events);
    println!("  visible range: {:?}", grid.visible_range(Axis::Column));
    print_window(&grid);

    // Turn the viewport off to expose the full (still hidden-compacted)
    // column sequence, as an auto-resize pass would.
    println!("\n== Viewport off ==");
    events.clear();
    grid.do_command(&Command::TurnViewportOff, &mut events);
    print_window(&grid);

    println!("\n== Viewport on again ==");
    events.clear();
    grid.do_command(&Command::TurnViewportOn, &mut events);
    print_window(&grid);

    // Restore every hidden column; one show event describes the insertions.
    println!("\n== Show all ==");
    events.clear();
    grid.do_command(&Command::ShowAll { axis: Axis::Column }, &mut events);
    print_events(&events);
    print_window(&grid);
}
