//! Input adapter: translates winit keyboard and mouse events into messages
//!
//! The grid itself is toolkit-agnostic. A host window forwards its winit
//! events here and feeds the resulting [`Msg`] to [`update`].

use winit::event::{ElementState, MouseButton};
use winit::keyboard::{Key, ModifiersState, NamedKey};

use crate::commands::Cmd;
use crate::export::CopyFormat;
use crate::messages::{Direction, DocumentMsg, EditorMsg, Msg};
use crate::model::HexModel;
use crate::update::update;

/// Map a key press to a message
pub fn key_to_msg(key: &Key, modifiers: ModifiersState) -> Option<Msg> {
    let shift = modifiers.shift_key();
    // Cmd on macOS, Ctrl elsewhere
    let command = modifiers.control_key() || modifiers.super_key();

    match key {
        Key::Named(named) => {
            let direction = match named {
                NamedKey::ArrowUp => Direction::Up,
                NamedKey::ArrowDown => Direction::Down,
                NamedKey::ArrowLeft => Direction::Left,
                NamedKey::ArrowRight => Direction::Right,
                NamedKey::Delete => return Some(Msg::Document(DocumentMsg::Delete)),
                _ => return None,
            };
            let msg = if shift {
                EditorMsg::MoveCursorWithSelection(direction)
            } else {
                EditorMsg::MoveCursor(direction)
            };
            Some(Msg::Editor(msg))
        }

        Key::Character(s) if command => match s.as_str() {
            "c" | "C" => Some(Msg::Document(DocumentMsg::Copy(CopyFormat::Hex))),
            _ => None,
        },

        Key::Character(s) => {
            let mut chars = s.chars();
            let ch = chars.next()?;
            if chars.next().is_some() || !ch.is_ascii_hexdigit() {
                return None;
            }
            Some(Msg::Document(DocumentMsg::HexDigit(ch)))
        }

        _ => None,
    }
}

/// Map a mouse button event at a widget position to a message
///
/// Only the left button acts on the grid.
pub fn mouse_button_to_msg(
    button: MouseButton,
    state: ElementState,
    x: f64,
    y: f64,
    modifiers: ModifiersState,
) -> Option<Msg> {
    if button != MouseButton::Left || state != ElementState::Pressed {
        return None;
    }
    Some(Msg::Editor(EditorMsg::Press {
        x,
        y,
        extend: modifiers.shift_key(),
    }))
}

/// Map pointer motion to a drag message while the left button is held
pub fn cursor_moved_to_msg(x: f64, y: f64, left_button_held: bool) -> Option<Msg> {
    left_button_held.then_some(Msg::Editor(EditorMsg::Drag { x, y }))
}

/// Translate a key press and run it through `update`
pub fn handle_key(model: &mut HexModel, key: &Key, modifiers: ModifiersState) -> Option<Cmd> {
    let msg = key_to_msg(key, modifiers)?;
    update(model, msg)
}
