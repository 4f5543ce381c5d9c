//! Cursor and selection message handlers

use crate::commands::Cmd;
use crate::grid::{Direction, Point};
use crate::messages::EditorMsg;
use crate::model::HexModel;

/// Horizontal scroll margin used when revealing the cursor
pub const ENSURE_VISIBLE_MARGIN_X: f64 = 50.0;

/// Handle editor messages (cursor movement, mouse, selection)
pub fn update_editor(model: &mut HexModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => move_cursor(model, direction, false),

        EditorMsg::MoveCursorWithSelection(direction) => move_cursor(model, direction, true),

        EditorMsg::Press { x, y, extend } => {
            if !model.editor.press(Point::new(x, y), extend) {
                return None;
            }
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        EditorMsg::Drag { x, y } => {
            let before = *model.editor.selection();
            if !model.editor.drag(Point::new(x, y)) || *model.editor.selection() == before {
                return None;
            }
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        EditorMsg::SetCursorPosition(offset) => {
            model.editor.set_cursor_position(offset);
            model.reset_cursor_blink();
            Some(Cmd::Batch(vec![Cmd::Redraw, ensure_cursor_visible(model)]))
        }

        EditorMsg::SelectRange { start, end } => {
            if !model.editor.select_range(start, end) {
                return None;
            }
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }
    }
}

fn move_cursor(model: &mut HexModel, direction: Direction, extend: bool) -> Option<Cmd> {
    let before = *model.editor.selection();
    let moved = model.editor.move_cursor(direction, extend);
    if !moved && *model.editor.selection() == before {
        return None;
    }
    model.reset_cursor_blink();
    Some(Cmd::Redraw)
}

/// Ask the host to scroll the cursor into view, keeping half a viewport of
/// context above and below
pub fn ensure_cursor_visible(model: &HexModel) -> Cmd {
    let anchor = model.editor.cursor_anchor();
    let cell_height = model.editor.layout().cell_height();
    Cmd::EnsureVisible {
        x: anchor.x,
        y: anchor.y,
        margin_x: ENSURE_VISIBLE_MARGIN_X,
        margin_y: model.number_of_lines as f64 * cell_height / 2.0,
    }
}
