//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/hexgrid/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Smallest accepted font size
pub const MIN_FONT_SIZE: u32 = 8;
/// Largest accepted font size
pub const MAX_FONT_SIZE: u32 = 72;

/// Grid configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexConfig {
    /// Bytes shown per line
    #[serde(default = "default_bytes_per_line")]
    pub bytes_per_line: usize,

    /// Lines visible in the viewport (scroll margins)
    #[serde(default = "default_number_of_lines")]
    pub number_of_lines: usize,

    /// Font size in points, clamped to [`MIN_FONT_SIZE`, `MAX_FONT_SIZE`].
    /// Determines the cell metrics until a renderer measures the real font.
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Cursor blink interval in milliseconds
    #[serde(default = "default_cursor_blink_ms")]
    pub cursor_blink_ms: u64,
}

fn default_bytes_per_line() -> usize {
    16
}

fn default_number_of_lines() -> usize {
    15
}

fn default_font_size() -> u32 {
    12
}

fn default_cursor_blink_ms() -> u64 {
    500
}

impl Default for HexConfig {
    fn default() -> Self {
        Self {
            bytes_per_line: default_bytes_per_line(),
            number_of_lines: default_number_of_lines(),
            font_size: default_font_size(),
            cursor_blink_ms: default_cursor_blink_ms(),
        }
    }
}

impl HexConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<HexConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.normalized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Set the font size, clamped to the supported range
    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Cell `(width, height)` in pixels for the font size: 96 dpi, half-width
    /// monospace glyphs. 12pt gives 8x16 cells.
    pub fn cell_metrics(&self) -> (f64, f64) {
        let height = self.font_size as f64 * 96.0 / 72.0;
        (height / 2.0, height)
    }

    /// Clamp values a hand-edited file may have put out of range
    pub fn normalized(mut self) -> Self {
        self.bytes_per_line = self.bytes_per_line.max(1);
        self.number_of_lines = self.number_of_lines.max(1);
        self.set_font_size(self.font_size);
        self
    }
}
