//! HexEditorState - buffer, layout, cursor, selection and the edit engine.

use crate::export::CopyFormat;

use super::buffer::{BufferError, ByteBuffer};
use super::cursor::{Direction, HexCursor};
use super::geometry::{Band, GridLayout, Nibble, Point, Rect};
use super::selection::{Granularity, Selection, SelectionEvent};
use super::shape::{Polygon, SelectionShape};
use super::tracker::{EditedRanges, RangeTracker};

/// Editor state for one hex grid.
///
/// Generic over the byte storage `B` and the edited-range sink `T`. All input
/// handlers clamp instead of failing and report whether anything changed.
#[derive(Debug, Clone)]
pub struct HexEditorState<B: ByteBuffer = Vec<u8>, T: RangeTracker = EditedRanges> {
    buffer: B,
    layout: GridLayout,
    cursor: HexCursor,
    selection: Selection,
    tracker: T,
}

impl<B: ByteBuffer> HexEditorState<B, EditedRanges> {
    /// Create a state that records edited ranges in an [`EditedRanges`]
    pub fn new(buffer: B, layout: GridLayout) -> Self {
        Self::with_tracker(buffer, layout, EditedRanges::new())
    }
}

impl<T: RangeTracker> HexEditorState<Vec<u8>, T> {
    /// Current bytes
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }
}

impl<B: ByteBuffer, T: RangeTracker> HexEditorState<B, T> {
    pub fn with_tracker(buffer: B, layout: GridLayout, tracker: T) -> Self {
        Self {
            buffer,
            layout,
            cursor: HexCursor::new(),
            selection: Selection::default(),
            tracker,
        }
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn cursor(&self) -> &HexCursor {
        &self.cursor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    /// Change bytes per line. Offsets are unaffected, only their cells move.
    pub fn set_bytes_per_line(&mut self, bytes_per_line: usize) {
        self.layout.set_bytes_per_line(bytes_per_line);
    }

    /// Update cell metrics after a font change
    pub fn set_metrics(&mut self, cell_width: f64, cell_height: f64) {
        self.layout.set_metrics(cell_width, cell_height);
    }

    // ------------------------------------------------------------------------
    // Data
    // ------------------------------------------------------------------------

    /// Replace the whole buffer and reset cursor and selection to offset 0
    pub fn set_data(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        let len = self.buffer.len();
        self.buffer.remove(0, len)?;
        self.buffer.insert(0, bytes)?;
        self.cursor = HexCursor::new();
        self.selection = Selection::default();
        tracing::debug!(target: "edit", len = bytes.len(), "data replaced");
        Ok(())
    }

    /// Insert bytes before `offset` and record the inserted span
    pub fn insert(&mut self, offset: usize, bytes: &[u8]) -> Result<(), BufferError> {
        if let Err(e) = self.buffer.insert(offset, bytes) {
            tracing::warn!(target: "edit", "insert skipped: {}", e);
            return Err(e);
        }
        if !bytes.is_empty() {
            self.tracker.record(offset, bytes.len());
        }
        self.revalidate();
        tracing::debug!(target: "edit", offset, count = bytes.len(), "bytes inserted");
        Ok(())
    }

    /// Raw bytes of the selected block, None when no block is selected
    pub fn selected_bytes(&self) -> Option<Vec<u8>> {
        if !self.selection.is_block() {
            return None;
        }
        Some(self.buffer.copy_range(self.selection.start, self.selection.end))
    }

    /// Selected block formatted for the clipboard
    pub fn copy_selection(&self, format: CopyFormat) -> Option<String> {
        self.selected_bytes().map(|bytes| format.format(&bytes))
    }

    // ------------------------------------------------------------------------
    // Cursor and selection
    // ------------------------------------------------------------------------

    /// Put the cursor on the high nibble of `offset` and collapse the selection there
    pub fn set_cursor_position(&mut self, offset: usize) {
        let len = self.len();
        self.cursor.set_byte_index(offset, len);
        self.apply_selection_event(SelectionEvent::Start(self.cursor.byte_index()), Granularity::Byte);
    }

    /// Apply a selection event from any input source (click, drag, keyboard)
    pub fn apply_selection_event(&mut self, event: SelectionEvent, granularity: Granularity) {
        let len = self.len();
        self.selection.apply(event, granularity, &self.layout, len);
    }

    /// Select `[start, end]` in either order; the cursor goes to the lower end
    pub fn select_range(&mut self, start: usize, end: usize) -> bool {
        let len = self.len();
        if len == 0 {
            return false;
        }
        self.apply_selection_event(SelectionEvent::Start(start), Granularity::Byte);
        self.apply_selection_event(SelectionEvent::Extend(end), Granularity::Byte);
        self.cursor.set_byte_index(self.selection.start, len);
        true
    }

    /// Arrow key. With `extend` the selection grows from its pivot to the new
    /// cursor byte, otherwise it collapses onto it. Returns whether the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction, extend: bool) -> bool {
        let len = self.len();
        if len == 0 {
            return false;
        }
        let moved = self
            .cursor
            .move_by(direction, len, self.layout.bytes_per_line());
        let offset = self.cursor.byte_index();
        self.apply_selection_event(selection_event(offset, extend), Granularity::Byte);
        moved
    }

    /// Mouse press. Hex band places the cursor on the hit nibble, char band on
    /// the hit byte, address band selects the whole line. With `extend` the
    /// selection grows from its pivot instead of restarting.
    pub fn press(&mut self, p: Point, extend: bool) -> bool {
        let len = self.len();
        if len == 0 {
            return false;
        }

        let hit = match self.layout.band_at(p.x) {
            Some(Band::Hex) => self.layout.pixel_to_nibble_index(p).map(|nibble_index| {
                self.cursor.set_nibble_index(nibble_index, len);
                (self.cursor.byte_index(), Granularity::Byte)
            }),
            Some(Band::Char) => self.layout.pixel_to_byte_offset(p, len).map(|offset| {
                self.cursor.set_byte_index(offset, len);
                (offset, Granularity::Byte)
            }),
            Some(Band::Address) => self.layout.pixel_to_line_start(p, len).map(|line_start| {
                self.cursor.set_byte_index(line_start, len);
                (line_start, Granularity::Line)
            }),
            None => None,
        };

        let Some((offset, granularity)) = hit else {
            tracing::trace!(target: "selection", x = p.x, y = p.y, "press outside data ignored");
            return false;
        };
        self.apply_selection_event(selection_event(offset, extend), granularity);
        true
    }

    /// Mouse drag with the button held: extend from the pivot to the byte or
    /// line under the pointer. The cursor follows the selection start.
    pub fn drag(&mut self, p: Point) -> bool {
        let len = self.len();
        let (offset, granularity) = if let Some(offset) = self.layout.pixel_to_byte_offset(p, len) {
            (offset, Granularity::Byte)
        } else if let Some(line_start) = self.layout.pixel_to_line_start(p, len) {
            (line_start, Granularity::Line)
        } else {
            return false;
        };

        self.apply_selection_event(SelectionEvent::Extend(offset), granularity);
        self.cursor.set_byte_index(self.selection.start, len);
        true
    }

    // ------------------------------------------------------------------------
    // Edit engine
    // ------------------------------------------------------------------------

    /// Type a hex digit at the cursor.
    ///
    /// With a block selected, the block is first zero-filled and the cursor
    /// collapses to its start. The digit then replaces the nibble under the
    /// cursor and the cursor advances one nibble. Non-hex input is ignored.
    pub fn write_nibble(&mut self, digit: char) -> bool {
        let Some(value) = digit.to_digit(16) else {
            tracing::trace!(target: "edit", ?digit, "non-hex input ignored");
            return false;
        };
        let len = self.len();
        if len == 0 {
            return false;
        }

        if self.selection.is_block() {
            let start = self.selection.start;
            let count = self.selection.len();
            if let Err(e) = self.buffer.replace_range(start, count, 0) {
                tracing::warn!(target: "edit", "block overwrite skipped: {}", e);
                return false;
            }
            self.tracker.record(start, count);
            self.cursor.set_byte_index(start, len);
            self.selection.reset(start);
        } else {
            self.tracker.record(self.cursor.byte_index(), 1);
        }

        let offset = self.cursor.byte_index();
        let Some(old) = self.buffer.get(offset) else {
            return false;
        };
        let new = merge_nibble(old, self.cursor.nibble(), value as u8);
        self.buffer.set(offset, new);
        self.cursor.advance_one_nibble(len);
        self.selection.reset(self.cursor.byte_index());

        tracing::debug!(
            target: "edit",
            offset,
            old = format_args!("{:02x}", old),
            new = format_args!("{:02x}", new),
            "nibble written"
        );
        true
    }

    /// Delete the selected block, or the byte under the cursor when no block
    /// is selected. Cursor and selection are re-clamped to the shorter buffer.
    pub fn delete(&mut self) -> bool {
        let len = self.len();
        if len == 0 {
            return false;
        }

        let (start, count) = if self.selection.is_block() {
            (self.selection.start, self.selection.len())
        } else {
            (self.cursor.byte_index(), 1)
        };

        if let Err(e) = self.buffer.remove(start, count) {
            tracing::warn!(target: "edit", "delete skipped: {}", e);
            return false;
        }
        self.tracker.record(start, count);

        let new_len = self.len();
        self.cursor.set_byte_index(start, new_len);
        self.selection.reset(self.cursor.byte_index());
        self.selection.clamp(new_len);

        tracing::debug!(target: "edit", start, count, new_len, "bytes deleted");
        true
    }

    /// Clamp cursor and selection after an external length change
    pub fn revalidate(&mut self) {
        let len = self.len();
        self.cursor.clamp(len);
        self.selection.clamp(len);
    }

    // ------------------------------------------------------------------------
    // Rendering queries
    // ------------------------------------------------------------------------

    /// Pixel anchor of the cursor's hex digit
    pub fn cursor_anchor(&self) -> Point {
        self.layout.nibble_anchor(self.cursor.nibble_index())
    }

    /// Area to repaint when the cursor blinks
    pub fn cursor_rect(&self) -> Rect {
        self.layout.cursor_rect(self.cursor.nibble_index())
    }

    /// Fill shape of the selected block, None when no block is selected
    pub fn selection_shape(&self) -> Option<SelectionShape> {
        if !self.selection.is_block() {
            return None;
        }
        Some(SelectionShape::compute(
            &self.layout,
            self.selection.start,
            self.selection.end,
        ))
    }

    /// Polygons to fill in the hex band for the selected block
    pub fn selection_polygons(&self) -> Vec<Polygon> {
        self.selection_shape()
            .map(SelectionShape::into_polygons)
            .unwrap_or_default()
    }

    /// Hex cell is part of the selected block
    pub fn is_hex_selected(&self, offset: usize) -> bool {
        self.selection.is_block() && self.selection.contains(offset)
    }

    /// Char cell is shaded (selection range, including a collapsed one)
    pub fn is_char_highlighted(&self, offset: usize) -> bool {
        !self.is_empty() && self.selection.contains(offset)
    }

    /// Per-row shading rectangles in the char band, one for each line the
    /// selection touches (a collapsed selection shades the cursor byte)
    pub fn char_highlight_rects(&self) -> Vec<Rect> {
        if self.is_empty() {
            return Vec::new();
        }
        let Selection { start, end, .. } = self.selection;
        let first_row = self.layout.line_of(start);
        let last_row = self.layout.line_of(end);
        (first_row..=last_row)
            .map(|row| {
                let row_start = (row * self.layout.bytes_per_line()).max(start);
                let row_end = self.layout.line_end(row_start, end + 1);
                let left = self.layout.char_cell_rect(row_start);
                let right = self.layout.char_cell_rect(row_end);
                Rect::new(left.x, left.y, right.x + right.width - left.x, left.height)
            })
            .collect()
    }

    /// Offset is on the cursor's line
    pub fn is_cursor_row(&self, offset: usize) -> bool {
        !self.is_empty() && self.layout.line_of(offset) == self.layout.line_of(self.cursor.byte_index())
    }

    /// Address of the line starting at `line_start` is shaded: the line
    /// contains either selection end, or lies inside the selection
    pub fn is_address_highlighted(&self, line_start: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let line_end = line_start.saturating_add(self.layout.bytes_per_line());
        let Selection { start, end, .. } = self.selection;
        (line_start..line_end).contains(&start)
            || (line_start..line_end).contains(&end)
            || (start..end).contains(&line_start)
    }

    /// Byte range `[first, last)` to paint for a damaged vertical span
    pub fn visible_range(&self, top: f64, bottom: f64) -> (usize, usize) {
        self.layout.visible_range(top, bottom, self.len())
    }

    /// Minimum widget height for the current buffer
    pub fn content_height(&self) -> f64 {
        self.layout.content_height(self.len())
    }

    /// Check cursor/selection invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let len = self.len();
        let Selection { click, start, end } = self.selection;
        if len == 0 {
            debug_assert_eq!(self.cursor.nibble_index(), 0, "[{}] cursor on empty buffer", context);
            debug_assert_eq!((click, start, end), (0, 0, 0), "[{}] selection on empty buffer", context);
            return;
        }
        debug_assert!(
            self.cursor.byte_index() < len,
            "[{}] cursor byte {} out of range (len {})",
            context,
            self.cursor.byte_index(),
            len
        );
        debug_assert!(
            start <= end && end < len && click < len,
            "[{}] selection {:?} out of range (len {})",
            context,
            self.selection,
            len
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}

fn selection_event(offset: usize, extend: bool) -> SelectionEvent {
    if extend {
        SelectionEvent::Extend(offset)
    } else {
        SelectionEvent::Start(offset)
    }
}

/// Replace one nibble of a byte with a 4-bit value
pub fn merge_nibble(byte: u8, nibble: Nibble, value: u8) -> u8 {
    let value = value & 0x0F;
    match nibble {
        Nibble::High => (byte & 0x0F) | (value << 4),
        Nibble::Low => (byte & 0xF0) | value,
    }
}
