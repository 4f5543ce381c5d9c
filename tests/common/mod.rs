//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use hexgrid::grid::{GridLayout, HexEditorState, Nibble, Point};
use hexgrid::messages::{LayoutMsg, Msg};
use hexgrid::model::HexModel;
use hexgrid::update::update;

/// Cell metrics used throughout the integration tests
pub const CELL_WIDTH: f64 = 10.0;
pub const CELL_HEIGHT: f64 = 20.0;

/// 16 bytes per line, 10x20 pixel cells
///
/// Bands: address `[0, 90)`, hex `[90, 580)`, char `[580, 760)`.
pub fn test_layout() -> GridLayout {
    GridLayout::new(16, CELL_WIDTH, CELL_HEIGHT)
}

/// `len` bytes counting up from 0 (wrapping)
pub fn counting_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// Editor state over counting bytes with the test layout
pub fn test_state(len: usize) -> HexEditorState {
    HexEditorState::new(counting_bytes(len), test_layout())
}

/// Full model over counting bytes with the test metrics applied
pub fn test_model(len: usize) -> HexModel {
    let mut model = HexModel::new(counting_bytes(len));
    update(
        &mut model,
        Msg::Layout(LayoutMsg::SetMetrics {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
        }),
    );
    model
}

/// Point on a hex digit of a byte (its anchor)
pub fn hex_point(layout: &GridLayout, offset: usize, nibble: Nibble) -> Point {
    layout.hex_anchor(layout.offset_to_cell(offset), nibble)
}

/// Point in the middle of the separator cell after a byte
pub fn separator_point(layout: &GridLayout, offset: usize) -> Point {
    let cell = layout.offset_to_cell(offset);
    let x = layout.hex_cell_left(cell.col) + 2.5 * layout.cell_width();
    Point::new(x, layout.row_baseline(cell.row))
}

/// Point in the middle of a byte's char cell
pub fn char_point(layout: &GridLayout, offset: usize) -> Point {
    let anchor = layout.char_anchor(layout.offset_to_cell(offset));
    Point::new(anchor.x + layout.cell_width() / 2.0, anchor.y)
}

/// Point on the address text of a row
pub fn address_point(layout: &GridLayout, row: usize) -> Point {
    layout.address_anchor(row)
}
