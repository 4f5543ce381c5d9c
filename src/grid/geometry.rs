//! Grid geometry: byte offset ↔ cell ↔ pixel conversions
//!
//! The widget is laid out as three contiguous horizontal bands:
//!
//! ```text
//! | address | hex                                   | char             |
//! 0         addr_width                              char_x             widget_width
//! ```
//!
//! Each byte occupies three cells in the hex band (high nibble, low nibble,
//! separator) and one cell in the char band. The hex band carries one extra
//! trailing cell, the char band one leading and one trailing cell.
//!
//! Rows are baseline-aligned: row `r` owns the vertical span
//! `(r * cell_height, (r + 1) * cell_height]`, and glyphs are drawn with their
//! baseline at the bottom of that span. The pixel anchors returned here
//! therefore hit-test back to the row they were computed from.
//!
//! All functions are pure and take the buffer length explicitly, so they can be
//! tested without a rendering surface.

use serde::Serialize;

/// Number of hex digits in the address column
pub const ADDRESS_DIGITS: usize = 8;

/// Cells per byte in the hex band (two digits and a separator)
pub const HEX_CELLS_PER_BYTE: usize = 3;

/// Relative distance from a cell boundary treated as lying on it
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Snap a coordinate measured in cells onto the nearest boundary when it is
/// within rounding error of it. Anchors sit exactly on boundaries, and
/// fractional metrics would otherwise push them into the neighbouring cell.
fn snap_to_boundary(cells: f64) -> f64 {
    let nearest = cells.round();
    if (cells - nearest).abs() <= BOUNDARY_EPSILON * nearest.abs().max(1.0) {
        nearest
    } else {
        cells
    }
}

/// A point in widget coordinates (pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in widget coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside (half-open on the right and bottom edges)
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// One of the three horizontal regions of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    Address,
    Hex,
    Char,
}

/// Which hex digit of a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Nibble {
    /// First digit, bits 7-4
    High,
    /// Second digit, bits 3-0
    Low,
}

impl Nibble {
    /// Nibble addressed by a nibble index (even → high, odd → low)
    pub const fn of_index(nibble_index: usize) -> Self {
        if nibble_index % 2 == 1 {
            Nibble::Low
        } else {
            Nibble::High
        }
    }

    /// Offset of this digit within its byte, in cells
    pub const fn cell(self) -> usize {
        match self {
            Nibble::High => 0,
            Nibble::Low => 1,
        }
    }
}

/// Grid position of a byte (column within the line, line number)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

impl CellPos {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Layout parameters of the grid: bytes per line, cell metrics, and the band
/// boundaries derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLayout {
    bytes_per_line: usize,
    cell_width: f64,
    cell_height: f64,
    addr_x: f64,
    addr_width: f64,
    hex_x: f64,
    hex_width: f64,
    char_x: f64,
    char_width: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(16, 8.0, 16.0)
    }
}

impl GridLayout {
    /// Create a layout. `bytes_per_line` is clamped to at least 1, cell
    /// metrics to at least one pixel.
    pub fn new(bytes_per_line: usize, cell_width: f64, cell_height: f64) -> Self {
        let mut layout = Self {
            bytes_per_line: 1,
            cell_width: 1.0,
            cell_height: 1.0,
            addr_x: 0.0,
            addr_width: 0.0,
            hex_x: 0.0,
            hex_width: 0.0,
            char_x: 0.0,
            char_width: 0.0,
        };
        layout.bytes_per_line = bytes_per_line.max(1);
        layout.set_metrics(cell_width, cell_height);
        layout
    }

    /// Update cell metrics (after a font change) and re-derive the bands
    pub fn set_metrics(&mut self, cell_width: f64, cell_height: f64) {
        self.cell_width = if cell_width.is_finite() { cell_width.max(1.0) } else { 1.0 };
        self.cell_height = if cell_height.is_finite() { cell_height.max(1.0) } else { 1.0 };
        self.update_dimensions();
    }

    /// Change the number of bytes per line and re-derive the bands
    pub fn set_bytes_per_line(&mut self, bytes_per_line: usize) {
        self.bytes_per_line = bytes_per_line.max(1);
        self.update_dimensions();
    }

    fn update_dimensions(&mut self) {
        let cw = self.cell_width;
        let bpl = self.bytes_per_line as f64;
        self.addr_x = 0.0;
        self.addr_width = (ADDRESS_DIGITS as f64 + 1.0) * cw;
        self.hex_x = self.addr_x + self.addr_width;
        self.hex_width = (bpl * HEX_CELLS_PER_BYTE as f64 + 1.0) * cw;
        self.char_x = self.hex_x + self.hex_width;
        self.char_width = (bpl + 2.0) * cw;
    }

    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Horizontal extent `(x, width)` of a band
    pub fn band_extent(&self, band: Band) -> (f64, f64) {
        match band {
            Band::Address => (self.addr_x, self.addr_width),
            Band::Hex => (self.hex_x, self.hex_width),
            Band::Char => (self.char_x, self.char_width),
        }
    }

    pub fn hex_x(&self) -> f64 {
        self.hex_x
    }

    pub fn char_x(&self) -> f64 {
        self.char_x
    }

    /// Total width of the three bands
    pub fn widget_width(&self) -> f64 {
        self.char_x + self.char_width
    }

    /// Width of one byte group in the hex band
    #[inline]
    pub fn byte_cell_width(&self) -> f64 {
        HEX_CELLS_PER_BYTE as f64 * self.cell_width
    }

    /// Band containing the x coordinate (bands are half-open `[x, x + width)`)
    pub fn band_at(&self, x: f64) -> Option<Band> {
        [Band::Address, Band::Hex, Band::Char]
            .into_iter()
            .find(|&band| {
                let (start, width) = self.band_extent(band);
                x >= start && x < start + width
            })
    }

    // ------------------------------------------------------------------------
    // Offset ↔ cell
    // ------------------------------------------------------------------------

    #[inline]
    pub fn offset_to_cell(&self, offset: usize) -> CellPos {
        CellPos::new(offset % self.bytes_per_line, offset / self.bytes_per_line)
    }

    #[inline]
    pub fn cell_to_offset(&self, cell: CellPos) -> usize {
        cell.row
            .saturating_mul(self.bytes_per_line)
            .saturating_add(cell.col)
    }

    /// Line number containing the offset
    #[inline]
    pub fn line_of(&self, offset: usize) -> usize {
        offset / self.bytes_per_line
    }

    /// First offset of the line containing `offset`
    #[inline]
    pub fn line_start(&self, offset: usize) -> usize {
        self.line_of(offset) * self.bytes_per_line
    }

    /// Last valid offset of the line containing `offset`, clamped to the buffer
    pub fn line_end(&self, offset: usize, len: usize) -> usize {
        let end = self.line_start(offset).saturating_add(self.bytes_per_line - 1);
        end.min(len.saturating_sub(1))
    }

    // ------------------------------------------------------------------------
    // Cell → pixel
    // ------------------------------------------------------------------------

    /// Y coordinate of the text baseline of a row
    #[inline]
    pub fn row_baseline(&self, row: usize) -> f64 {
        row as f64 * self.cell_height + self.cell_height
    }

    /// Y coordinate of the top edge of a row
    #[inline]
    pub fn row_top(&self, row: usize) -> f64 {
        row as f64 * self.cell_height
    }

    /// Left edge of a byte group in the hex band
    #[inline]
    pub fn hex_cell_left(&self, col: usize) -> f64 {
        self.hex_x + col as f64 * self.byte_cell_width()
    }

    /// Anchor of one hex digit: horizontally centred in its cell, on the baseline
    pub fn hex_anchor(&self, cell: CellPos, nibble: Nibble) -> Point {
        let x = self.hex_cell_left(cell.col)
            + nibble.cell() as f64 * self.cell_width
            + self.cell_width / 2.0;
        Point::new(x, self.row_baseline(cell.row))
    }

    /// Anchor of a byte's glyph in the char band (left edge of the cell, on the baseline)
    pub fn char_anchor(&self, cell: CellPos) -> Point {
        let x = self.char_x + self.cell_width + cell.col as f64 * self.cell_width;
        Point::new(x, self.row_baseline(cell.row))
    }

    /// Anchor of the address text of a row
    pub fn address_anchor(&self, row: usize) -> Point {
        Point::new(self.addr_x + self.cell_width / 2.0, self.row_baseline(row))
    }

    /// Anchor of a nibble index (cursor position) in the hex band
    pub fn nibble_anchor(&self, nibble_index: usize) -> Point {
        let cell = self.offset_to_cell(nibble_index / 2);
        self.hex_anchor(cell, Nibble::of_index(nibble_index))
    }

    // ------------------------------------------------------------------------
    // Pixel → cell
    // ------------------------------------------------------------------------

    /// Row owning a y coordinate. Rows own `(top, top + cell_height]`.
    pub fn row_at(&self, y: f64) -> usize {
        if !(y > 0.0) {
            return 0;
        }
        let row = snap_to_boundary(y / self.cell_height).ceil() - 1.0;
        if row.is_finite() {
            row.max(0.0) as usize
        } else {
            0
        }
    }

    /// Cell column within a band, None if left of the band or not finite
    fn band_cell(&self, x: f64, band: Band) -> Option<usize> {
        let (start, width) = self.band_extent(band);
        if !(x >= start && x < start + width) {
            return None;
        }
        Some(snap_to_boundary((x - start) / self.cell_width).floor() as usize)
    }

    /// Nibble index under a point in the hex band, unclamped.
    ///
    /// A hit on the separator cell resolves to the low nibble of the same byte.
    /// The trailing pad cell of the band is not a hit.
    pub fn pixel_to_nibble_index(&self, p: Point) -> Option<usize> {
        let cell = self.band_cell(p.x, Band::Hex)?;
        let col = cell / HEX_CELLS_PER_BYTE;
        if col >= self.bytes_per_line {
            return None;
        }
        let nibble = (cell % HEX_CELLS_PER_BYTE).min(1);
        let offset = self.cell_to_offset(CellPos::new(col, self.row_at(p.y)));
        Some(offset.saturating_mul(2).saturating_add(nibble))
    }

    /// Byte offset under a point in the hex or char band, clamped to
    /// `[0, len - 1]`. None when the point is outside both data areas or the
    /// buffer is empty.
    pub fn pixel_to_byte_offset(&self, p: Point, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let col = match self.band_at(p.x)? {
            Band::Hex => self.pixel_to_nibble_index(p)? / 2 % self.bytes_per_line,
            Band::Char => {
                let cell = self.band_cell(p.x, Band::Char)?;
                // Leading and trailing pad cells are not data
                let col = cell.checked_sub(1)?;
                if col >= self.bytes_per_line {
                    return None;
                }
                col
            }
            Band::Address => return None,
        };
        let offset = self.cell_to_offset(CellPos::new(col, self.row_at(p.y)));
        Some(offset.min(len - 1))
    }

    /// First offset of the line under a point in the address band.
    ///
    /// A point below the last line maps to the start of the last line.
    pub fn pixel_to_line_start(&self, p: Point, len: usize) -> Option<usize> {
        if len == 0 || self.band_at(p.x)? != Band::Address {
            return None;
        }
        let start = self.row_at(p.y).saturating_mul(self.bytes_per_line);
        Some(start.min(self.line_start(len - 1)))
    }

    // ------------------------------------------------------------------------
    // Sizing
    // ------------------------------------------------------------------------

    /// Minimum widget height needed to show every line of a buffer.
    ///
    /// An empty buffer has no lines and only keeps the half-line bottom margin.
    pub fn content_height(&self, len: usize) -> f64 {
        let margin = (self.cell_height / 2.0).floor();
        if len == 0 {
            return margin;
        }
        let last_row = (len - 1) / self.bytes_per_line;
        last_row as f64 * self.cell_height + self.cell_height + margin
    }

    /// Byte range `[first, last)` to paint for a damaged vertical span.
    ///
    /// The span is padded by `cell_height` rows on both sides so glyphs
    /// straddling the damage edges are redrawn.
    pub fn visible_range(&self, top: f64, bottom: f64, len: usize) -> (usize, usize) {
        let slack = self.cell_height;
        let first_row = (top / self.cell_height).floor() - slack;
        let last_row = (bottom / self.cell_height).floor() + slack;
        let first = if first_row > 0.0 {
            (first_row as usize).saturating_mul(self.bytes_per_line)
        } else {
            0
        };
        let last = if last_row > 0.0 {
            (last_row as usize).saturating_mul(self.bytes_per_line)
        } else {
            0
        };
        (first.min(len), last.min(len))
    }

    /// Rectangle covering a byte's cell in the char band
    pub fn char_cell_rect(&self, offset: usize) -> Rect {
        let cell = self.offset_to_cell(offset);
        let anchor = self.char_anchor(cell);
        Rect::new(
            anchor.x,
            self.row_top(cell.row),
            self.cell_width,
            self.cell_height,
        )
    }

    /// Narrow rectangle repainted when the cursor blinks
    pub fn cursor_rect(&self, nibble_index: usize) -> Rect {
        let anchor = self.nibble_anchor(nibble_index);
        Rect::new(
            anchor.x - self.cell_width / 2.0,
            anchor.y - self.cell_height,
            self.cell_width,
            self.cell_height + 2.0,
        )
    }
}

/// Address column text for a line start (8 lowercase hex digits)
pub fn format_address(offset: usize) -> String {
    format!("{:08x}", offset)
}
