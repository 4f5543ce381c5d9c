//! Headless renderings of the grid
//!
//! `render_text` prints the three bands the way the widget paints them;
//! `StateDump` serializes cursor, selection and geometry to JSON for
//! scripting and debugging.

use serde::Serialize;

use crate::export::{display_char, display_hex};
use crate::grid::{
    format_address, ByteBuffer, HexEditorState, Nibble, RangeTracker, SelectionShape,
};
use crate::model::HexModel;

/// Render every line as `address  hex cells  |char cells|`
///
/// A selected block is bracketed in the hex band.
pub fn render_text<B: ByteBuffer, T: RangeTracker>(editor: &HexEditorState<B, T>) -> String {
    let bpl = editor.layout().bytes_per_line();
    let len = editor.len();
    let mut out = String::new();

    for line_start in (0..len).step_by(bpl) {
        let line_end = (line_start + bpl).min(len);
        let selected = |slot: usize| slot < bpl && editor.is_hex_selected(line_start + slot);

        out.push_str(&format_address(line_start));
        out.push(' ');
        for slot in 0..=bpl {
            let prev = slot > 0 && selected(slot - 1);
            let cur = selected(slot);
            out.push(match (prev, cur) {
                (false, true) => '[',
                (true, false) => ']',
                _ => ' ',
            });
            if slot == bpl {
                break;
            }
            match editor.buffer().get(line_start + slot) {
                Some(byte) if line_start + slot < line_end => out.push_str(&display_hex(byte)),
                _ => out.push_str("  "),
            }
        }

        out.push_str(" |");
        for offset in line_start..line_end {
            if let Some(byte) = editor.buffer().get(offset) {
                out.push(display_char(byte));
            }
        }
        out.push_str("|\n");
    }
    out
}

/// JSON snapshot of the grid state
#[derive(Debug, Serialize)]
pub struct StateDump {
    pub len: usize,
    pub bytes_per_line: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub widget_width: f64,
    pub content_height: f64,
    pub cursor: CursorDump,
    pub selection: SelectionDump,
    pub selection_shape: Option<SelectionShape>,
    pub edited_ranges: Vec<(usize, usize)>,
    pub cursor_visible: bool,
}

#[derive(Debug, Serialize)]
pub struct CursorDump {
    pub nibble_index: usize,
    pub byte_index: usize,
    pub nibble: Nibble,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct SelectionDump {
    pub click: usize,
    pub start: usize,
    pub end: usize,
    pub is_block: bool,
}

impl StateDump {
    pub fn from_model(model: &HexModel) -> Self {
        let editor = &model.editor;
        let layout = editor.layout();
        let cursor = editor.cursor();
        let selection = editor.selection();
        Self {
            len: editor.len(),
            bytes_per_line: layout.bytes_per_line(),
            cell_width: layout.cell_width(),
            cell_height: layout.cell_height(),
            widget_width: layout.widget_width(),
            content_height: editor.content_height(),
            cursor: CursorDump {
                nibble_index: cursor.nibble_index(),
                byte_index: cursor.byte_index(),
                nibble: cursor.nibble(),
                address: format_address(cursor.byte_index()),
            },
            selection: SelectionDump {
                click: selection.click,
                start: selection.start,
                end: selection.end,
                is_block: selection.is_block(),
            },
            selection_shape: editor.selection_shape(),
            edited_ranges: editor
                .tracker()
                .ranges()
                .iter()
                .map(|r| (r.start, r.end))
                .collect(),
            cursor_visible: model.ui.cursor_visible,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
