//! Nibble-granular edit cursor.

use serde::Serialize;

use super::geometry::Nibble;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The edit cursor. Addresses a single hex digit: nibble index `n` is the
/// high nibble of byte `n / 2` when even, the low nibble when odd.
///
/// Every mutator takes the buffer length and clamps instead of failing, so
/// `byte_index() < len` holds whenever the buffer is non-empty and the cursor
/// sits at 0 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HexCursor {
    nibble_index: usize,
}

impl HexCursor {
    pub const fn new() -> Self {
        Self { nibble_index: 0 }
    }

    #[inline]
    pub const fn nibble_index(&self) -> usize {
        self.nibble_index
    }

    #[inline]
    pub const fn byte_index(&self) -> usize {
        self.nibble_index / 2
    }

    #[inline]
    pub const fn nibble(&self) -> Nibble {
        Nibble::of_index(self.nibble_index)
    }

    /// Set the nibble index. Indices at or past the end of the buffer land on
    /// the high nibble of the last byte.
    pub fn set_nibble_index(&mut self, nibble_index: usize, len: usize) {
        self.nibble_index = if len == 0 {
            0
        } else if nibble_index >= len * 2 {
            len * 2 - 2
        } else {
            nibble_index
        };
    }

    /// Move to the high nibble of a byte
    pub fn set_byte_index(&mut self, byte_index: usize, len: usize) {
        self.set_nibble_index(byte_index.saturating_mul(2), len);
    }

    /// Move one byte (left/right) or one line (up/down).
    ///
    /// Moves that would leave the buffer are refused. After a successful move
    /// the cursor sits on the high nibble. Returns whether the cursor moved.
    pub fn move_by(&mut self, direction: Direction, len: usize, bytes_per_line: usize) -> bool {
        let byte = self.byte_index();
        let target = match direction {
            Direction::Left => byte.checked_sub(1),
            Direction::Right => byte.checked_add(1),
            Direction::Up => byte.checked_sub(bytes_per_line),
            Direction::Down => byte.checked_add(bytes_per_line),
        };

        match target {
            Some(target) if target < len => {
                self.nibble_index = target * 2;
                tracing::trace!(target: "cursor", ?direction, byte = target, "moved");
                true
            }
            _ => {
                tracing::trace!(target: "cursor", ?direction, byte, len, "move refused");
                false
            }
        }
    }

    /// Advance one hex digit after a committed write: high → low within the
    /// byte, then to the next byte's high nibble. No-op on the last digit.
    pub fn advance_one_nibble(&mut self, len: usize) -> bool {
        if self.nibble_index + 1 < len * 2 {
            self.nibble_index += 1;
            true
        } else {
            false
        }
    }

    /// Re-validate against a buffer whose length changed
    pub fn clamp(&mut self, len: usize) {
        self.set_nibble_index(self.nibble_index, len);
    }
}
