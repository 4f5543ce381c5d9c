//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! cursor, selection and edit transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=trace,selection=debug,edit=debug` - scoped filtering
//! - `RUST_LOG=hexgrid::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/hexgrid/logs/hexgrid.log` with daily rotation.
//! File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::grid::{ByteBuffer, HexEditorState, RangeTracker, Selection};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so dumps on stdout stay clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "hexgrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor/selection state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub nibble_index: usize,
    pub click: usize,
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl CursorSnapshot {
    pub fn from_editor<B: ByteBuffer, T: RangeTracker>(editor: &HexEditorState<B, T>) -> Self {
        let Selection { click, start, end } = *editor.selection();
        Self {
            nibble_index: editor.cursor().nibble_index(),
            click,
            start,
            end,
            len: editor.len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if self.nibble_index != other.nibble_index {
            changes.push(format!(
                "cursor: {} → {}",
                self.nibble_index, other.nibble_index
            ));
        }
        if (self.start, self.end) != (other.start, other.end) {
            changes.push(format!(
                "selection: [{},{}] → [{},{}]",
                self.start, self.end, other.start, other.end
            ));
        }
        if self.click != other.click {
            changes.push(format!("pivot: {} → {}", self.click, other.click));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
