//! UI message handlers (cursor blink)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::HexModel;

/// Handle UI messages
pub fn update_ui(model: &mut HexModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::BlinkCursor => {
            if model.ui.update_cursor_blink() {
                Some(Cmd::RedrawRect(model.editor.cursor_rect()))
            } else {
                None
            }
        }
    }
}
