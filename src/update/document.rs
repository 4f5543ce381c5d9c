//! Document update functions: nibble writes, deletion, insertion, copy

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::HexModel;

/// Handle document messages (buffer edits and clipboard)
pub fn update_document(model: &mut HexModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::HexDigit(digit) => {
            if !model.editor.write_nibble(digit) {
                return None;
            }
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        DocumentMsg::Delete => {
            if !model.editor.delete() {
                return None;
            }
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        DocumentMsg::Insert { offset, bytes } => {
            match model.editor.insert(offset, &bytes) {
                Ok(()) => Some(Cmd::Redraw),
                Err(e) => {
                    tracing::warn!("Insert rejected: {}", e);
                    None
                }
            }
        }

        DocumentMsg::SetData(bytes) => match model.editor.set_data(&bytes) {
            Ok(()) => {
                model.reset_cursor_blink();
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::warn!("SetData rejected: {}", e);
                None
            }
        },

        DocumentMsg::Copy(format) => {
            let text = model.editor.copy_selection(format)?;
            tracing::debug!(target: "edit", ?format, chars = text.len(), "copy");
            Some(Cmd::CopyToClipboard(text))
        }
    }
}
