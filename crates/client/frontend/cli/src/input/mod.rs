//! Input processing for the CLI client.
//!
//! This module owns the raw-event-to-input mapping so the rest of the
//! application can remain agnostic about the specifics of `crossterm`
//! events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

pub mod bindings;

/// A terminal event the input modes understand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key(KeyCode),
    /// The pointer moved over the given screen cell.
    MouseMotion { column: u16, row: u16 },
    /// The terminal was resized; only a redraw is needed.
    Resize,
    /// Process-level quit signal. Bypasses every input mode.
    Quit,
}

impl InputEvent {
    /// Converts a raw crossterm event, dropping the ones no mode reacts to.
    ///
    /// Raw mode swallows SIGINT, so Ctrl+C is surfaced as [`InputEvent::Quit`].
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Mouse(mouse) => Self::from_mouse(mouse),
            Event::Resize(_, _) => Some(Self::Resize),
            _ => None,
        }
    }

    fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return Some(Self::Quit);
        }
        Some(Self::Key(key.code))
    }

    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Self::MouseMotion {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        }
    }
}
