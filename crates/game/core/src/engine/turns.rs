//! Enemy turn pass.

use super::Engine;
use crate::state::{EntityId, Position};

/// Record of one non-player actor using its turn opportunity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyTurn {
    pub actor: EntityId,
    pub name: String,
    /// Where the player stood when this actor acted.
    pub player_position: Option<Position>,
}

impl Engine {
    /// Gives every living actor other than the player exactly one turn.
    ///
    /// Actors act in map insertion order. Dead actors and plain objects are
    /// skipped.
    pub fn handle_enemy_turns(&mut self) -> Vec<EnemyTurn> {
        let player = self.player;
        let player_position = self.player_position();

        let turns: Vec<EnemyTurn> = self
            .map
            .entities()
            .filter(|entity| entity.id() != player)
            .filter_map(|entity| {
                let actor = entity.as_actor()?;
                if !actor.is_alive() {
                    return None;
                }
                tracing::debug!(
                    actor = %entity.id(),
                    name = %entity.name,
                    ai = %actor.ai,
                    "enemy turn"
                );
                Some(EnemyTurn {
                    actor: entity.id(),
                    name: entity.name.clone(),
                    player_position,
                })
            })
            .collect();

        self.turn += 1;
        turns
    }
}
