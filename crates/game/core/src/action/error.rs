//! Rule violations raised while performing an action.
//!
//! The `Display` text of each variant is the message shown to the player.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors that can occur while performing an [`Action`](super::Action).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Destination is outside the map.
    #[error("That way leads off the map.")]
    OutOfBounds { destination: Position },

    /// Destination is not walkable terrain.
    #[error("That way is blocked.")]
    Blocked { destination: Position },

    /// Destination is occupied by something that blocks movement.
    #[error("The {name} is in the way.")]
    BlockedByEntity {
        destination: Position,
        entity: EntityId,
        name: String,
    },

    /// The acting entity is not on the active map.
    #[error("Actor {actor} is not on the map.")]
    ActorMissing { actor: EntityId },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds { .. } | Self::Blocked { .. } | Self::BlockedByEntity { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::ActorMissing { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "ACTION_OUT_OF_BOUNDS",
            Self::Blocked { .. } => "ACTION_BLOCKED",
            Self::BlockedByEntity { .. } => "ACTION_BLOCKED_BY_ENTITY",
            Self::ActorMissing { .. } => "ACTION_ACTOR_MISSING",
        }
    }
}
