//! UI state - cursor blink

use std::time::{Duration, Instant};

/// Default cursor blink interval
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// UI state that never touches buffer or selection
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the cursor is currently visible (for blinking)
    pub cursor_visible: bool,
    /// Timestamp of last cursor blink state change
    pub last_cursor_blink: Instant,
    /// Interval between blink toggles
    pub blink_interval: Duration,
}

impl UiState {
    pub fn new() -> Self {
        Self::with_blink_interval(DEFAULT_BLINK_INTERVAL)
    }

    pub fn with_blink_interval(blink_interval: Duration) -> Self {
        Self {
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
            blink_interval,
        }
    }

    /// Reset cursor blink timer (call after user input)
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.last_cursor_blink = Instant::now();
    }

    /// Toggle cursor visibility unconditionally (timer fired)
    pub fn toggle_cursor(&mut self) {
        self.cursor_visible = !self.cursor_visible;
        self.last_cursor_blink = Instant::now();
    }

    /// Update cursor blink state based on elapsed time
    /// Returns true if the state changed (needs redraw)
    pub fn update_cursor_blink(&mut self) -> bool {
        if self.last_cursor_blink.elapsed() >= self.blink_interval {
            self.toggle_cursor();
            true
        } else {
            false
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
