//! Byte buffer trait and the `Vec<u8>` implementation used by the hex grid.
//!
//! The grid never owns a storage strategy of its own: everything goes through
//! [`ByteBuffer`], so a caller can plug in a memory-mapped file, a piece table,
//! or a plain vector.

use std::fmt;

/// Error returned by bulk buffer operations whose range does not fit the buffer.
///
/// This is the only condition the grid surfaces to callers. Everything else
/// (clicks outside a band, navigation past the end, non-hex keys) is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The requested `offset..offset + count` span is outside `0..=len`
    InvalidArgument {
        operation: &'static str,
        offset: usize,
        count: usize,
        len: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                operation,
                offset,
                count,
                len,
            } => write!(
                f,
                "invalid argument for {}: offset {} count {} exceeds buffer length {}",
                operation, offset, count, len
            ),
        }
    }
}

impl std::error::Error for BufferError {}

/// Index-addressable, resizable sequence of bytes.
pub trait ByteBuffer {
    /// Number of bytes in the buffer
    fn len(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte at offset, None if out of bounds
    fn get(&self, offset: usize) -> Option<u8>;

    /// Overwrite a single byte. Out-of-range offsets are ignored.
    fn set(&mut self, offset: usize, value: u8);

    /// Insert bytes before `offset` (`offset == len` appends)
    fn insert(&mut self, offset: usize, bytes: &[u8]) -> Result<(), BufferError>;

    /// Remove `count` bytes starting at `offset`
    fn remove(&mut self, offset: usize, count: usize) -> Result<(), BufferError>;

    /// Fill `count` bytes starting at `offset` with `value`
    fn replace_range(&mut self, offset: usize, count: usize, value: u8)
        -> Result<(), BufferError>;

    /// Copy of the inclusive range `start..=end`, clamped to the buffer
    fn copy_range(&self, start: usize, end: usize) -> Vec<u8> {
        if self.is_empty() || start > end {
            return Vec::new();
        }
        let end = end.min(self.len() - 1);
        (start..=end).filter_map(|i| self.get(i)).collect()
    }
}

fn check_span(
    operation: &'static str,
    offset: usize,
    count: usize,
    len: usize,
) -> Result<(), BufferError> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(BufferError::InvalidArgument {
            operation,
            offset,
            count,
            len,
        }),
    }
}

impl ByteBuffer for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, offset: usize) -> Option<u8> {
        self.as_slice().get(offset).copied()
    }

    fn set(&mut self, offset: usize, value: u8) {
        if let Some(byte) = self.get_mut(offset) {
            *byte = value;
        }
    }

    fn insert(&mut self, offset: usize, bytes: &[u8]) -> Result<(), BufferError> {
        check_span("insert", offset, 0, Vec::len(self))?;
        self.splice(offset..offset, bytes.iter().copied());
        Ok(())
    }

    fn remove(&mut self, offset: usize, count: usize) -> Result<(), BufferError> {
        check_span("remove", offset, count, Vec::len(self))?;
        self.drain(offset..offset + count);
        Ok(())
    }

    fn replace_range(
        &mut self,
        offset: usize,
        count: usize,
        value: u8,
    ) -> Result<(), BufferError> {
        check_span("replace_range", offset, count, Vec::len(self))?;
        self[offset..offset + count].fill(value);
        Ok(())
    }

    fn copy_range(&self, start: usize, end: usize) -> Vec<u8> {
        if self.is_empty() || start > end || start >= Vec::len(self) {
            return Vec::new();
        }
        let end = end.min(Vec::len(self) - 1);
        self[start..=end].to_vec()
    }
}

/// Lets the grid edit a buffer it does not own.
impl<T: ByteBuffer + ?Sized> ByteBuffer for &mut T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, offset: usize) -> Option<u8> {
        (**self).get(offset)
    }

    fn set(&mut self, offset: usize, value: u8) {
        (**self).set(offset, value)
    }

    fn insert(&mut self, offset: usize, bytes: &[u8]) -> Result<(), BufferError> {
        (**self).insert(offset, bytes)
    }

    fn remove(&mut self, offset: usize, count: usize) -> Result<(), BufferError> {
        (**self).remove(offset, count)
    }

    fn replace_range(
        &mut self,
        offset: usize,
        count: usize,
        value: u8,
    ) -> Result<(), BufferError> {
        (**self).replace_range(offset, count, value)
    }

    fn copy_range(&self, start: usize, end: usize) -> Vec<u8> {
        (**self).copy_range(start, end)
    }
}
