//! Application model - the hex grid state plus the UI concerns around it

pub mod ui;

use std::time::Duration;

use crate::config::HexConfig;
use crate::grid::{GridLayout, HexEditorState};

pub use ui::{UiState, DEFAULT_BLINK_INTERVAL};

/// Everything `update` works on
#[derive(Debug, Clone)]
pub struct HexModel {
    /// Buffer, layout, cursor and selection
    pub editor: HexEditorState,
    /// Cursor blink
    pub ui: UiState,
    /// Visible line count, used for scroll-into-view margins
    pub number_of_lines: usize,
}

impl HexModel {
    /// Create a model over `data` with default settings
    pub fn new(data: Vec<u8>) -> Self {
        Self::with_config(data, &HexConfig::default())
    }

    /// Create a model over `data` using persisted settings
    pub fn with_config(data: Vec<u8>, config: &HexConfig) -> Self {
        let (cell_width, cell_height) = config.cell_metrics();
        let layout = GridLayout::new(config.bytes_per_line, cell_width, cell_height);
        Self {
            editor: HexEditorState::new(data, layout),
            ui: UiState::with_blink_interval(Duration::from_millis(config.cursor_blink_ms)),
            number_of_lines: config.number_of_lines.max(1),
        }
    }

    /// Current bytes
    pub fn data(&self) -> &[u8] {
        self.editor.data()
    }

    /// Reset cursor blink timer
    pub fn reset_cursor_blink(&mut self) {
        self.ui.reset_cursor_blink();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_config_applies_settings() {
        let config = HexConfig {
            bytes_per_line: 8,
            number_of_lines: 0,
            cursor_blink_ms: 250,
            ..HexConfig::default()
        };
        let model = HexModel::with_config(vec![0; 4], &config);
        assert_eq!(model.editor.layout().bytes_per_line(), 8);
        assert_eq!(model.number_of_lines, 1);
        assert_eq!(model.ui.blink_interval, Duration::from_millis(250));
    }
}
