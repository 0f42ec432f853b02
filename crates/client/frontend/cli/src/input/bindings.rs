//! Key tables for each input mode.

use crossterm::event::KeyCode;
use game_core::Direction;

/// Opens the message history from the main game.
pub const HISTORY_KEY: KeyCode = KeyCode::Char('v');

/// Movement keys: arrows, Home/End/PageUp/PageDown diagonals, numeric-pad
/// digits and the vi letters.
pub fn movement_direction(code: KeyCode) -> Option<Direction> {
    let direction = match code {
        KeyCode::Up | KeyCode::Char('8') | KeyCode::Char('k') => Direction::Up,
        KeyCode::Down | KeyCode::Char('2') | KeyCode::Char('j') => Direction::Down,
        KeyCode::Left | KeyCode::Char('4') | KeyCode::Char('h') => Direction::Left,
        KeyCode::Right | KeyCode::Char('6') | KeyCode::Char('l') => Direction::Right,
        KeyCode::Home | KeyCode::Char('7') | KeyCode::Char('y') => Direction::UpLeft,
        KeyCode::PageUp | KeyCode::Char('9') | KeyCode::Char('u') => Direction::UpRight,
        KeyCode::End | KeyCode::Char('1') | KeyCode::Char('b') => Direction::DownLeft,
        KeyCode::PageDown | KeyCode::Char('3') | KeyCode::Char('n') => Direction::DownRight,
        _ => return None,
    };
    Some(direction)
}

pub fn is_wait_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char('.') | KeyCode::Char('5') | KeyCode::KeypadBegin
    )
}

/// Cursor movement inside the message history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryNav {
    /// Relative move; positive values go towards newer messages.
    By(i32),
    Start,
    End,
}

pub fn history_nav(code: KeyCode) -> Option<HistoryNav> {
    let nav = match code {
        KeyCode::Up | KeyCode::Char('8') => HistoryNav::By(1),
        KeyCode::Down | KeyCode::Char('2') => HistoryNav::By(-1),
        KeyCode::PageUp => HistoryNav::By(10),
        KeyCode::PageDown => HistoryNav::By(-10),
        KeyCode::Home => HistoryNav::Start,
        KeyCode::End => HistoryNav::End,
        _ => return None,
    };
    Some(nav)
}
