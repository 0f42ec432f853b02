//! Input modes and the pure transition function between them.
//!
//! Exactly one [`InputMode`] is active at a time. [`InputMode::transition`]
//! consumes the current mode and an event and yields the next mode plus an
//! optional [`Action`] for the session to execute. Entering a mode always
//! builds a fresh value, so nothing survives a mode switch except what is
//! re-derived on entry.

use crossterm::event::KeyCode;
use game_core::Action;

use crate::input::{
    InputEvent,
    bindings::{self, HistoryNav},
};

/// Current input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Normal play.
    #[default]
    MainGame,
    /// The player is dead; only Escape does anything.
    GameOver,
    /// Full-screen message history browser.
    HistoryViewer { cursor: usize, log_length: usize },
}

/// What a mode needs to know about the world to decide a transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionContext {
    pub log_length: usize,
}

/// Result of feeding one event into a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub mode: InputMode,
    pub action: Option<Action>,
}

impl Transition {
    fn stay(mode: InputMode) -> Self {
        Self { mode, action: None }
    }

    fn act(mode: InputMode, action: Action) -> Self {
        Self {
            mode,
            action: Some(action),
        }
    }
}

impl InputMode {
    /// History viewer positioned on the newest message.
    pub fn history(log_length: usize) -> Self {
        Self::HistoryViewer {
            cursor: log_length.saturating_sub(1),
            log_length,
        }
    }

    /// True for the mode that runs the enemy pass and FOV after an action.
    pub fn advances_world(&self) -> bool {
        matches!(self, Self::MainGame)
    }

    /// Decide the next mode for `event`.
    ///
    /// Only key events are interpreted here. Pointer motion, resizes and the
    /// quit signal are handled by the session regardless of mode.
    pub fn transition(self, event: &InputEvent, ctx: &TransitionContext) -> Transition {
        let InputEvent::Key(code) = *event else {
            return Transition::stay(self);
        };

        match self {
            Self::MainGame => main_game_key(code, ctx),
            Self::GameOver => match code {
                KeyCode::Esc => Transition::act(self, Action::Escape),
                _ => Transition::stay(self),
            },
            Self::HistoryViewer { cursor, log_length } => match bindings::history_nav(code) {
                Some(nav) => Transition::stay(Self::HistoryViewer {
                    cursor: navigate(cursor, nav, log_length),
                    log_length,
                }),
                None => Transition::stay(Self::MainGame),
            },
        }
    }
}

fn main_game_key(code: KeyCode, ctx: &TransitionContext) -> Transition {
    let mode = InputMode::MainGame;
    if let Some(direction) = bindings::movement_direction(code) {
        return Transition::act(mode, Action::bump(direction));
    }
    if bindings::is_wait_key(code) {
        return Transition::act(mode, Action::Wait);
    }
    match code {
        KeyCode::Esc => Transition::act(mode, Action::Escape),
        code if code == bindings::HISTORY_KEY => {
            Transition::stay(InputMode::history(ctx.log_length))
        }
        _ => Transition::stay(mode),
    }
}

fn navigate(cursor: usize, nav: HistoryNav, log_length: usize) -> usize {
    if log_length == 0 {
        return cursor;
    }
    let last = log_length - 1;
    match nav {
        HistoryNav::Start => 0,
        HistoryNav::End => last,
        HistoryNav::By(delta) => adjust_cursor(cursor, delta, last),
    }
}

/// Wraps only when already sitting on an edge; clamps otherwise.
fn adjust_cursor(cursor: usize, delta: i32, last: usize) -> usize {
    if delta < 0 && cursor == 0 {
        last
    } else if delta > 0 && cursor == last {
        0
    } else {
        let moved = cursor as i64 + i64::from(delta);
        moved.clamp(0, last as i64) as usize
    }
}
