//! Layout message handlers (font metrics, bytes per line, viewport)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::HexModel;

/// Handle layout messages
pub fn update_layout(model: &mut HexModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::SetBytesPerLine(bytes_per_line) => {
            if model.editor.layout().bytes_per_line() == bytes_per_line.max(1) {
                return None;
            }
            model.editor.set_bytes_per_line(bytes_per_line);
            tracing::debug!(bytes_per_line, "bytes per line changed");
            Some(Cmd::Redraw)
        }

        LayoutMsg::SetMetrics {
            cell_width,
            cell_height,
        } => {
            model.editor.set_metrics(cell_width, cell_height);
            tracing::debug!(cell_width, cell_height, "cell metrics changed");
            Some(Cmd::Redraw)
        }

        LayoutMsg::SetNumberOfLines(lines) => {
            model.number_of_lines = lines.max(1);
            None
        }
    }
}
