//! Addressing, cursor and selection engine of the hex grid.
//!
//! The grid presents a byte buffer as three synchronized bands (address, hex,
//! char). This module owns everything that is not painting:
//!
//! - [`GridLayout`]: byte offset ↔ cell ↔ pixel conversions and hit-testing
//! - [`HexCursor`]: the nibble-granular edit cursor
//! - [`Selection`]: pivot-based selection driven by [`SelectionEvent`]s
//! - [`SelectionShape`]: the polygons that fill a selection in the hex band
//! - [`HexEditorState`]: the edit engine tying them to a [`ByteBuffer`] and
//!   reporting edited spans to a [`RangeTracker`]
//!
//! # Example
//!
//! ```
//! use hexgrid::grid::{GridLayout, HexEditorState};
//!
//! let mut state = HexEditorState::new(vec![0x3F, 0x00], GridLayout::default());
//! state.write_nibble('a');
//! assert_eq!(state.data(), &[0xAF, 0x00]);
//! assert_eq!(state.cursor().nibble_index(), 1);
//! ```

mod buffer;
mod cursor;
mod geometry;
mod selection;
mod shape;
mod state;
mod tracker;

pub use buffer::{BufferError, ByteBuffer};
pub use cursor::{Direction, HexCursor};
pub use geometry::{
    format_address, Band, CellPos, GridLayout, Nibble, Point, Rect, ADDRESS_DIGITS,
    HEX_CELLS_PER_BYTE,
};
pub use selection::{Granularity, Selection, SelectionEvent};
pub use shape::{Polygon, SelectionShape};
pub use state::{merge_nibble, HexEditorState};
pub use tracker::{EditedRanges, NoopTracker, RangeTracker};
