//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::export::CopyFormat;

pub use crate::grid::Direction;

/// Cursor and selection messages
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    /// Move cursor one byte or one line (arrow key), collapsing the selection
    MoveCursor(Direction),
    /// Move cursor and extend the selection from its pivot (Shift+Arrow)
    MoveCursorWithSelection(Direction),
    /// Mouse press at a widget position; `extend` when Shift is held
    Press { x: f64, y: f64, extend: bool },
    /// Mouse moved with the button held
    Drag { x: f64, y: f64 },
    /// Put the cursor on a byte offset and collapse the selection there
    SetCursorPosition(usize),
    /// Select `[start, end]` (inclusive, either order)
    SelectRange { start: usize, end: usize },
}

/// Buffer-mutating messages
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentMsg {
    /// Type a hex digit at the cursor
    HexDigit(char),
    /// Delete the selected block or the byte under the cursor
    Delete,
    /// Insert bytes before an offset
    Insert { offset: usize, bytes: Vec<u8> },
    /// Replace all data
    SetData(Vec<u8>),
    /// Copy the selected block to the clipboard
    Copy(CopyFormat),
}

/// Layout messages (font metrics, bytes per line)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    SetBytesPerLine(usize),
    SetMetrics { cell_width: f64, cell_height: f64 },
    /// Visible line count of the viewport (used for scroll margins)
    SetNumberOfLines(usize),
}

/// UI messages
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Periodic cursor blink tick
    BlinkCursor,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
    Layout(LayoutMsg),
    Ui(UiMsg),
}
