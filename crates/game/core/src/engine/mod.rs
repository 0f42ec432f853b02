//! Session state and turn scheduling.
//!
//! The [`Engine`] holds the active map and knows which of its entities is
//! the player. After every player action the frontend asks it for one
//! enemy turn pass followed by one field-of-view refresh.

mod errors;
mod fov;
mod turns;

pub use errors::EngineError;
pub use fov::compute_fov;
pub use turns::EnemyTurn;

use crate::config::GameConfig;
use crate::entity::Entity;
use crate::map::GameMap;
use crate::state::{EntityId, Position};

/// Process-wide game session.
#[derive(Debug)]
pub struct Engine {
    player: EntityId,
    map: GameMap,
    config: GameConfig,
    mouse_location: Option<Position>,
    fov_origin: Option<Position>,
    turn: u64,
}

impl Engine {
    /// Creates an engine around `map`, whose entity collection must hold `player`.
    ///
    /// Visibility is computed once so the first frame is not blank.
    pub fn new(map: GameMap, player: EntityId, config: GameConfig) -> Result<Self, EngineError> {
        let Some(entity) = map.get(player) else {
            return Err(EngineError::PlayerNotInMap {
                player,
                map: map.id(),
            });
        };
        if entity.as_actor().is_none() {
            return Err(EngineError::PlayerNotActor { player });
        }

        let mut engine = Self {
            player,
            map,
            config,
            mouse_location: None,
            fov_origin: None,
            turn: 0,
        };
        engine.update_fov();
        tracing::info!(
            player = %player,
            map = %engine.map.id(),
            fov_radius = engine.config.fov_radius,
            "engine ready"
        );
        Ok(engine)
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    /// The player entity, if it is still on the active map.
    pub fn player(&self) -> Option<&Entity> {
        self.map.get(self.player)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.map.get_mut(self.player)
    }

    pub fn player_position(&self) -> Option<Position> {
        self.player().map(|player| player.position)
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut GameMap {
        &mut self.map
    }

    pub fn fov_radius(&self) -> u32 {
        self.config.fov_radius
    }

    /// Number of completed enemy turn passes.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Last tile the pointer hovered inside the map.
    pub fn mouse_location(&self) -> Option<Position> {
        self.mouse_location
    }

    /// Caches the hovered tile. Returns false, leaving the cache untouched,
    /// when the tile lies outside the map.
    pub fn set_mouse_location(&mut self, x: i32, y: i32) -> bool {
        if !self.map.in_bounds(x, y) {
            return false;
        }
        self.mouse_location = Some(Position::new(x, y));
        true
    }

    /// Position the visible grid was last computed from.
    pub fn fov_origin(&self) -> Option<Position> {
        self.fov_origin
    }

    /// Recomputes the visible area from the player's point of view and adds
    /// it to the explored area.
    pub fn update_fov(&mut self) {
        let Some(origin) = self.player_position() else {
            tracing::warn!(
                player = %self.player,
                "player missing from map, visibility not refreshed"
            );
            return;
        };

        let map = &mut self.map;
        compute_fov(&map.tiles, origin, self.config.fov_radius, &mut map.visible);
        map.explored.union_with(&map.visible);
        self.fov_origin = Some(origin);

        tracing::debug!(
            origin = %origin,
            visible = map.visible.count(),
            explored = map.explored.count(),
            "fov updated"
        );
    }
}
