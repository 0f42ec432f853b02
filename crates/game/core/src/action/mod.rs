//! Commands produced by input modes and executed against the engine.
//!
//! An [`Action`] is an opaque unit of world mutation with a single
//! [`perform`](Action::perform) step. Rule violations come back as
//! [`ActionError`] and leave the world untouched.

mod direction;
mod error;
mod movement;

pub use direction::Direction;
pub use error::ActionError;

use crate::engine::Engine;
use crate::state::{EntityId, Position};

/// A player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Escape,
    /// Pass the turn.
    Wait,
    /// Move in a direction, or attack whatever living thing stands there.
    Bump { dx: i32, dy: i32 },
}

/// What a successfully performed action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The session should end.
    Quit,
    Waited,
    Moved { to: Position },
    Attacked { target: EntityId, name: String },
}

impl Action {
    pub fn bump(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::Bump { dx, dy }
    }

    /// Applies the action to the player of `engine`.
    pub fn perform(&self, engine: &mut Engine) -> Result<ActionOutcome, ActionError> {
        match *self {
            Self::Escape => Ok(ActionOutcome::Quit),
            Self::Wait => Ok(ActionOutcome::Waited),
            Self::Bump { dx, dy } => movement::bump(engine, dx, dy),
        }
    }

    /// True for actions that spend the player's turn when they succeed.
    pub fn advances_turn(&self) -> bool {
        !matches!(self, Self::Escape)
    }
}
