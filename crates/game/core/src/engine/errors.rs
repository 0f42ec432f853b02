//! Error types for engine construction and player lookup.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, MapId};

/// Errors surfaced by the [`Engine`](super::Engine).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("player {player} is not registered in {map}")]
    PlayerNotInMap { player: EntityId, map: MapId },

    #[error("player {player} is not an actor")]
    PlayerNotActor { player: EntityId },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PlayerNotInMap { .. } => ErrorSeverity::Fatal,
            Self::PlayerNotActor { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerNotInMap { .. } => "ENGINE_PLAYER_NOT_IN_MAP",
            Self::PlayerNotActor { .. } => "ENGINE_PLAYER_NOT_ACTOR",
        }
    }
}
