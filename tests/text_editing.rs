//! Edit engine tests - nibble writes, block overwrite, delete, insert, copy

mod common;

use common::{hex_point, test_layout, test_model, test_state};
use hexgrid::commands::Cmd;
use hexgrid::export::CopyFormat;
use hexgrid::grid::{
    merge_nibble, BufferError, HexEditorState, Nibble, NoopTracker, Selection,
};
use hexgrid::messages::{DocumentMsg, EditorMsg, Msg};
use hexgrid::update::update;

fn digit(ch: char) -> Msg {
    Msg::Document(DocumentMsg::HexDigit(ch))
}

// ========================================================================
// Nibble writes
// ========================================================================

#[test]
fn test_write_high_then_low_nibble() {
    let mut state = HexEditorState::new(vec![0x3F, 0x00], test_layout());
    assert!(state.write_nibble('a'));
    assert_eq!(state.data(), &[0xAF, 0x00]);
    assert_eq!(state.cursor().nibble_index(), 1);

    assert!(state.write_nibble('b'));
    assert_eq!(state.data(), &[0xAB, 0x00]);
    assert_eq!(state.cursor().nibble_index(), 2);
    assert_eq!(*state.selection(), Selection::collapsed(1));
}

#[test]
fn test_write_low_nibble_after_click() {
    let mut state = HexEditorState::new(vec![0x3F, 0x00], test_layout());
    let p = hex_point(state.layout(), 0, Nibble::Low);
    assert!(state.press(p, false));
    assert!(state.write_nibble('a'));
    assert_eq!(state.data(), &[0x3A, 0x00]);
    assert_eq!(state.cursor().nibble_index(), 2);
}

#[test]
fn test_uppercase_digits_are_accepted() {
    let mut state = HexEditorState::new(vec![0x00], test_layout());
    state.write_nibble('C');
    state.write_nibble('d');
    assert_eq!(state.data(), &[0xCD]);
}

#[test]
fn test_non_hex_input_is_ignored() {
    let mut model = test_model(4);
    for ch in ['g', 'x', ' ', 'é', '\n'] {
        assert_eq!(update(&mut model, digit(ch)), None);
    }
    assert_eq!(model.data(), &[0, 1, 2, 3]);
    assert!(model.editor.tracker().is_empty());
}

#[test]
fn test_last_nibble_is_overwritten_in_place() {
    let mut model = test_model(2);
    let p = hex_point(model.editor.layout(), 1, Nibble::Low);
    update(
        &mut model,
        Msg::Editor(EditorMsg::Press {
            x: p.x,
            y: p.y,
            extend: false,
        }),
    );
    assert_eq!(model.editor.cursor().nibble_index(), 3);

    update(&mut model, digit('7'));
    assert_eq!(model.data(), &[0x00, 0x07]);
    assert_eq!(model.editor.cursor().nibble_index(), 3);

    update(&mut model, digit('9'));
    assert_eq!(model.data(), &[0x00, 0x09]);
}

#[test]
fn test_write_on_empty_buffer_is_ignored() {
    let mut model = test_model(0);
    assert_eq!(update(&mut model, digit('a')), None);
    assert!(model.data().is_empty());
}

#[test]
fn test_typing_runs_across_bytes() {
    let mut model = test_model(4);
    for ch in "deadbeef".chars() {
        update(&mut model, digit(ch));
    }
    assert_eq!(model.data(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(model.editor.cursor().nibble_index(), 7);
}

#[test]
fn test_single_write_records_cursor_byte() {
    let mut state = test_state(10);
    state.set_cursor_position(4);
    state.write_nibble('f');
    assert_eq!(state.tracker().ranges(), &[4..5]);
}

#[test]
fn test_merge_nibble() {
    assert_eq!(merge_nibble(0x3F, Nibble::High, 0xA), 0xAF);
    assert_eq!(merge_nibble(0x3F, Nibble::Low, 0x1), 0x31);
    assert_eq!(merge_nibble(0x00, Nibble::High, 0xFF), 0xF0);
}

// ========================================================================
// Block overwrite
// ========================================================================

#[test]
fn test_typing_over_block_zero_fills_then_writes() {
    let mut state = test_state(10);
    state.select_range(2, 5);
    assert!(state.write_nibble('f'));

    assert_eq!(state.data(), &[0, 1, 0xF0, 0, 0, 0, 6, 7, 8, 9]);
    assert_eq!(state.cursor().nibble_index(), 5);
    assert_eq!(*state.selection(), Selection::collapsed(2));
    assert_eq!(state.tracker().ranges(), &[2..6]);
}

#[test]
fn test_block_overwrite_with_reversed_selection() {
    let mut state = test_state(10);
    state.select_range(7, 3);
    state.write_nibble('1');
    assert_eq!(state.data(), &[0, 1, 2, 0x10, 0, 0, 0, 0, 8, 9]);
    assert_eq!(state.cursor().byte_index(), 3);
}

// ========================================================================
// Delete
// ========================================================================

#[test]
fn test_delete_byte_under_cursor() {
    let mut model = test_model(10);
    update(&mut model, Msg::Editor(EditorMsg::SetCursorPosition(3)));
    assert_eq!(
        update(&mut model, Msg::Document(DocumentMsg::Delete)),
        Some(Cmd::Redraw)
    );
    assert_eq!(model.data(), &[0, 1, 2, 4, 5, 6, 7, 8, 9]);
    assert_eq!(model.editor.cursor().nibble_index(), 6);
    assert_eq!(*model.editor.selection(), Selection::collapsed(3));
    assert_eq!(model.editor.tracker().last(), Some(&(3..4)));
}

#[test]
fn test_delete_block() {
    let mut state = test_state(10);
    state.select_range(2, 5);
    assert!(state.delete());
    assert_eq!(state.data(), &[0, 1, 6, 7, 8, 9]);
    assert_eq!(state.cursor().byte_index(), 2);
    assert_eq!(*state.selection(), Selection::collapsed(2));
    assert_eq!(state.tracker().ranges(), &[2..6]);
}

#[test]
fn test_delete_last_byte_reclamps_cursor() {
    let mut state = test_state(10);
    state.set_cursor_position(9);
    state.delete();
    assert_eq!(state.len(), 9);
    assert_eq!(state.cursor().byte_index(), 8);
    assert_eq!(*state.selection(), Selection::collapsed(8));
}

#[test]
fn test_delete_everything() {
    let mut state = test_state(10);
    state.select_range(0, 9);
    state.delete();
    assert!(state.is_empty());
    assert_eq!(state.cursor().nibble_index(), 0);
    assert_eq!(*state.selection(), Selection::default());
    assert!(!state.delete());
}

// ========================================================================
// Insert and set_data
// ========================================================================

#[test]
fn test_insert_records_span() {
    let mut model = test_model(4);
    let cmd = update(
        &mut model,
        Msg::Document(DocumentMsg::Insert {
            offset: 2,
            bytes: vec![0xAA, 0xBB],
        }),
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.data(), &[0, 1, 0xAA, 0xBB, 2, 3]);
    assert_eq!(model.editor.tracker().last(), Some(&(2..4)));
}

#[test]
fn test_insert_past_end_is_rejected() {
    let mut state = test_state(4);
    assert_eq!(
        state.insert(5, &[1]),
        Err(BufferError::InvalidArgument {
            operation: "insert",
            offset: 5,
            count: 0,
            len: 4,
        })
    );
    assert_eq!(state.data(), &[0, 1, 2, 3]);
    assert!(state.tracker().is_empty());

    let mut model = test_model(4);
    let msg = Msg::Document(DocumentMsg::Insert {
        offset: 9,
        bytes: vec![1],
    });
    assert_eq!(update(&mut model, msg), None);
}

#[test]
fn test_set_data_resets_cursor() {
    let mut model = test_model(40);
    update(&mut model, Msg::Editor(EditorMsg::SelectRange { start: 10, end: 30 }));
    update(&mut model, Msg::Document(DocumentMsg::SetData(vec![9, 8, 7])));
    assert_eq!(model.data(), &[9, 8, 7]);
    assert_eq!(model.editor.cursor().nibble_index(), 0);
    assert_eq!(*model.editor.selection(), Selection::default());
}

// ========================================================================
// Copy
// ========================================================================

#[test]
fn test_copy_requires_a_block() {
    let mut model = test_model(10);
    assert_eq!(
        update(&mut model, Msg::Document(DocumentMsg::Copy(CopyFormat::Hex))),
        None
    );
}

#[test]
fn test_copy_formats() {
    let mut model = test_model(0);
    update(
        &mut model,
        Msg::Document(DocumentMsg::SetData(b"Hi!\x00\xFF".to_vec())),
    );
    update(&mut model, Msg::Editor(EditorMsg::SelectRange { start: 0, end: 4 }));

    assert_eq!(
        update(&mut model, Msg::Document(DocumentMsg::Copy(CopyFormat::Hex))),
        Some(Cmd::CopyToClipboard("48 69 21 00 FF".to_string()))
    );
    assert_eq!(
        update(&mut model, Msg::Document(DocumentMsg::Copy(CopyFormat::Text))),
        Some(Cmd::CopyToClipboard("Hi!..".to_string()))
    );
    // Copy never touches the buffer
    assert_eq!(model.data(), b"Hi!\x00\xFF");
}

// ========================================================================
// Pluggable storage and trackers
// ========================================================================

#[test]
fn test_noop_tracker_edits_normally() {
    let mut state = HexEditorState::with_tracker(vec![0u8; 4], test_layout(), NoopTracker);
    state.write_nibble('e');
    state.set_cursor_position(3);
    state.delete();
    assert_eq!(state.data(), &[0xE0, 0, 0]);
}

#[test]
fn test_borrowed_buffer_is_edited_in_place() {
    let mut bytes = vec![0x00, 0x11, 0x22];
    {
        let mut state = HexEditorState::new(&mut bytes, test_layout());
        state.set_cursor_position(1);
        state.write_nibble('9');
        state.write_nibble('9');
    }
    assert_eq!(bytes, vec![0x00, 0x99, 0x22]);
}
