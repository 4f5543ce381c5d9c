//! Edited-range reporting.
//!
//! Every mutating edit reports the span it touched. The grid does not decide
//! what happens to those spans (undo, change markers, dirty tracking); it only
//! emits them through [`RangeTracker`].

use std::ops::Range;

/// Receives the span of every mutating edit
pub trait RangeTracker {
    /// Record that `len` bytes starting at `start` were edited
    fn record(&mut self, start: usize, len: usize);
}

/// Default tracker: keeps every reported span in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditedRanges {
    ranges: Vec<Range<usize>>,
}

impl EditedRanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reported spans, oldest first
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Most recently reported span
    pub fn last(&self) -> Option<&Range<usize>> {
        self.ranges.last()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }
}

impl RangeTracker for EditedRanges {
    fn record(&mut self, start: usize, len: usize) {
        self.ranges.push(start..start + len);
    }
}

/// Tracker that drops every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracker;

impl RangeTracker for NoopTracker {
    fn record(&mut self, _start: usize, _len: usize) {}
}
