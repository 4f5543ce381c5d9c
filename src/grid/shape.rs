//! Selection geometry for the hex band.
//!
//! A block selection is filled as one or two axis-aligned polygons. Which
//! shape is used depends on how the selection spans lines:
//!
//! ```text
//! SameLine           NotchedTwoLine        General
//!    ┌────┐                  ┌──────┐          ┌──────┐
//!    └────┘          ┌───┐   └──────┘    ┌─────┘      │
//!                    └───┘               │      ┌─────┘
//!                                        └──────┘
//! ```
//!
//! The char band does not use these shapes; it is shaded per cell.

use serde::Serialize;

use super::geometry::{GridLayout, Point};

/// A closed polygon, vertices in drawing order starting at the top-left
pub type Polygon = Vec<Point>;

/// Fill shape of a selection `[start, end]` in the hex band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectionShape {
    /// Start and end on one line: a single rectangle
    SameLine(Polygon),
    /// Two adjacent lines where the end column is left of the start column:
    /// the first line's tail and the second line's head as separate rectangles
    NotchedTwoLine(Polygon, Polygon),
    /// Any other multi-line span: one 8-vertex polygon covering the ragged
    /// first line, the full middle lines and the ragged last line
    General(Polygon),
}

impl SelectionShape {
    /// Compute the shape covering the inclusive byte range `[start, end]`.
    /// The bounds are swapped if given in reverse order.
    pub fn compute(layout: &GridLayout, start: usize, end: usize) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        let start_cell = layout.offset_to_cell(start);
        let end_cell = layout.offset_to_cell(end);

        let ch = layout.cell_height();
        let band_left = layout.hex_x();
        let band_right = layout.hex_cell_left(layout.bytes_per_line());

        let sx = layout.hex_cell_left(start_cell.col);
        let sy = layout.row_top(start_cell.row);
        let ex = layout.hex_cell_left(end_cell.col) + layout.byte_cell_width();
        let ey = layout.row_top(end_cell.row);

        if start_cell.row == end_cell.row {
            SelectionShape::SameLine(rectangle(sx, sy, ex, sy + ch))
        } else if end_cell.row - start_cell.row == 1 && start_cell.col > end_cell.col {
            SelectionShape::NotchedTwoLine(
                rectangle(sx, sy, band_right, sy + ch),
                rectangle(band_left, ey, ex, ey + ch),
            )
        } else {
            SelectionShape::General(vec![
                Point::new(sx, sy),
                Point::new(band_right, sy),
                Point::new(band_right, ey),
                Point::new(ex, ey),
                Point::new(ex, ey + ch),
                Point::new(band_left, ey + ch),
                Point::new(band_left, sy + ch),
                Point::new(sx, sy + ch),
            ])
        }
    }

    /// The polygons to fill, in drawing order
    pub fn polygons(&self) -> Vec<&Polygon> {
        match self {
            SelectionShape::SameLine(p) | SelectionShape::General(p) => vec![p],
            SelectionShape::NotchedTwoLine(first, second) => vec![first, second],
        }
    }

    /// Consume into owned polygons
    pub fn into_polygons(self) -> Vec<Polygon> {
        match self {
            SelectionShape::SameLine(p) | SelectionShape::General(p) => vec![p],
            SelectionShape::NotchedTwoLine(first, second) => vec![first, second],
        }
    }
}

fn rectangle(left: f64, top: f64, right: f64, bottom: f64) -> Polygon {
    vec![
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ]
}
