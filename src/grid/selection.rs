//! Selection model: a pivot (`click`) plus a normalized inclusive `[start, end]`.

use std::ops::RangeInclusive;

use serde::Serialize;

use super::geometry::GridLayout;

/// What a selection event does to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionEvent {
    /// Plain click or plain arrow key: collapse onto the offset and make it the pivot
    Start(usize),
    /// Shift-click, shift-arrow or drag: span from the pivot to the offset
    Extend(usize),
}

impl SelectionEvent {
    pub fn offset(&self) -> usize {
        match *self {
            SelectionEvent::Start(offset) | SelectionEvent::Extend(offset) => offset,
        }
    }
}

/// Unit a selection event snaps to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Granularity {
    /// Individual bytes (hex and char bands)
    #[default]
    Byte,
    /// Whole lines (address band)
    Line,
}

/// A byte selection.
///
/// `start <= end < len` always holds (or all zero on an empty buffer).
/// `start == end` means no block is selected; single-byte operations then act
/// on the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Where the current drag/extension began
    pub click: usize,
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Collapsed selection at an offset
    pub const fn collapsed(offset: usize) -> Self {
        Self {
            click: offset,
            start: offset,
            end: offset,
        }
    }

    /// Check if a block (more than the pivot) is selected
    #[inline]
    pub fn is_block(&self) -> bool {
        self.start != self.end
    }

    /// Number of bytes spanned, counting both ends
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Inclusive byte range
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Check if an offset is within `[start, end]`
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }

    /// Collapse onto an offset
    pub fn reset(&mut self, offset: usize) {
        *self = Self::collapsed(offset);
    }

    /// Apply a selection event. The single entry point for clicks, drags and
    /// keyboard selection.
    ///
    /// Extension is recomputed from the pivot every time, so repeated
    /// `Extend` calls always yield `[min(click, offset), max(click, offset)]`
    /// (widened to whole lines for [`Granularity::Line`]).
    pub fn apply(
        &mut self,
        event: SelectionEvent,
        granularity: Granularity,
        layout: &GridLayout,
        len: usize,
    ) {
        if len == 0 {
            *self = Self::default();
            return;
        }
        let offset = event.offset().min(len - 1);

        match (event, granularity) {
            (SelectionEvent::Start(_), Granularity::Byte) => self.reset(offset),
            (SelectionEvent::Start(_), Granularity::Line) => {
                let line_start = layout.line_start(offset);
                self.click = line_start;
                self.start = line_start;
                self.end = layout.line_end(line_start, len);
            }
            (SelectionEvent::Extend(_), Granularity::Byte) => {
                let click = self.click.min(len - 1);
                self.click = click;
                self.start = click.min(offset);
                self.end = click.max(offset);
            }
            (SelectionEvent::Extend(_), Granularity::Line) => {
                let click = self.click.min(len - 1);
                self.click = click;
                let first = click.min(offset);
                let last = click.max(offset);
                self.start = layout.line_start(first);
                self.end = layout.line_end(last, len);
            }
        }

        tracing::trace!(
            target: "selection",
            ?event,
            ?granularity,
            click = self.click,
            start = self.start,
            end = self.end,
            "applied"
        );
    }

    /// Re-validate against a buffer whose length changed
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            *self = Self::default();
            return;
        }
        let last = len - 1;
        self.click = self.click.min(last);
        self.start = self.start.min(last);
        self.end = self.end.min(last);
    }
}
