use super::{ActionError, ActionOutcome};
use crate::engine::Engine;
use crate::state::Position;

/// Attacks a living blocker on the destination, otherwise moves there.
pub(super) fn bump(engine: &mut Engine, dx: i32, dy: i32) -> Result<ActionOutcome, ActionError> {
    let destination = destination(engine, dx, dy)?;

    if let Some(target) = engine
        .map()
        .blocking_entity_at(destination.x, destination.y)
        .filter(|entity| entity.is_alive())
    {
        return Ok(ActionOutcome::Attacked {
            target: target.id(),
            name: target.name.clone(),
        });
    }

    step(engine, dx, dy)
}

/// Moves the player by `(dx, dy)` if the destination is free floor.
pub(super) fn step(engine: &mut Engine, dx: i32, dy: i32) -> Result<ActionOutcome, ActionError> {
    let destination = destination(engine, dx, dy)?;
    let map = engine.map();

    if !map.in_bounds(destination.x, destination.y) {
        return Err(ActionError::OutOfBounds { destination });
    }
    if !map.is_walkable(destination.x, destination.y) {
        return Err(ActionError::Blocked { destination });
    }
    if let Some(blocker) = map.blocking_entity_at(destination.x, destination.y) {
        return Err(ActionError::BlockedByEntity {
            destination,
            entity: blocker.id(),
            name: blocker.name.clone(),
        });
    }

    let actor = engine.player_id();
    engine
        .player_mut()
        .ok_or(ActionError::ActorMissing { actor })?
        .move_by(dx, dy);
    Ok(ActionOutcome::Moved { to: destination })
}

fn destination(engine: &Engine, dx: i32, dy: i32) -> Result<Position, ActionError> {
    engine
        .player_position()
        .map(|origin| origin.offset(dx, dy))
        .ok_or(ActionError::ActorMissing {
            actor: engine.player_id(),
        })
}
