//! Entities placed on a map and their lifecycle.
//!
//! A registered entity is stored by value inside exactly one
//! [`GameMap`], so the "one owner at a time" rule is enforced by ownership.
//! An entity under construction is a free-standing value with no map.
mod actor;

pub use actor::{Actor, Ai, Fighter, HostileAi};

use crate::map::{GameMap, MapError};
use crate::state::{EntityId, MapId, Position, Rgb};

/// What an entity is, beyond its placement and appearance.
#[derive(Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// Inert object such as an item or a decoration.
    Object,
    Actor(Actor),
}

/// A generic object to represent players, enemies, items, etc.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    pub position: Position,
    pub glyph: char,
    pub color: Rgb,
    pub name: String,
    pub blocks_movement: bool,
    map: Option<MapId>,
    pub kind: EntityKind,
}

impl Entity {
    /// Creates an unregistered object.
    pub fn new(
        glyph: char,
        color: Rgb,
        name: impl Into<String>,
        blocks_movement: bool,
    ) -> Self {
        Self {
            id: EntityId::next(),
            position: Position::ORIGIN,
            glyph,
            color,
            name: name.into(),
            blocks_movement,
            map: None,
            kind: EntityKind::Object,
        }
    }

    /// Creates an unregistered actor. Actors always block movement.
    pub fn actor(
        glyph: char,
        color: Rgb,
        name: impl Into<String>,
        ai: Ai,
        mut fighter: Fighter,
    ) -> Self {
        let mut entity = Self::new(glyph, color, name, true);
        fighter.bind(entity.id);
        entity.kind = EntityKind::Actor(Actor::new(ai, fighter));
        entity
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Map currently holding this entity, if any.
    pub fn map(&self) -> Option<MapId> {
        self.map
    }

    pub fn as_actor(&self) -> Option<&Actor> {
        match &self.kind {
            EntityKind::Actor(actor) => Some(actor),
            EntityKind::Object => None,
        }
    }

    pub fn as_actor_mut(&mut self) -> Option<&mut Actor> {
        match &mut self.kind {
            EntityKind::Actor(actor) => Some(actor),
            EntityKind::Object => None,
        }
    }

    /// False for objects and for actors whose behaviour was cleared.
    pub fn is_alive(&self) -> bool {
        self.as_actor().is_some_and(Actor::is_alive)
    }

    /// Independent copy with a fresh identity and no map.
    ///
    /// Behaviour and stats are cloned field by field; the copy's stats are
    /// rebound to the new identity.
    pub fn duplicate(&self) -> Self {
        let id = EntityId::next();
        let kind = match &self.kind {
            EntityKind::Object => EntityKind::Object,
            EntityKind::Actor(actor) => {
                let mut fighter = actor.fighter.clone();
                fighter.bind(id);
                EntityKind::Actor(Actor::new(actor.ai.clone(), fighter))
            }
        };

        Self {
            id,
            position: self.position,
            glyph: self.glyph,
            color: self.color,
            name: self.name.clone(),
            blocks_movement: self.blocks_movement,
            map: None,
            kind,
        }
    }

    /// Spawns a copy of this template at `(x, y)` on `map`.
    pub fn spawn(&self, map: &mut GameMap, x: i32, y: i32) -> EntityId {
        let mut clone = self.duplicate();
        clone.place(x, y);
        map.insert(clone)
    }

    /// Updates the position without touching map registration.
    pub fn place(&mut self, x: i32, y: i32) {
        self.position = Position::new(x, y);
    }

    /// Places an unregistered entity at `(x, y)` and registers it in `map`.
    pub fn place_into(mut self, x: i32, y: i32, map: &mut GameMap) -> EntityId {
        self.place(x, y);
        map.insert(self)
    }

    /// Translates the position. Collision and bounds are the caller's concern.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }

    pub(crate) fn attach(&mut self, map: MapId) {
        self.map = Some(map);
    }

    pub(crate) fn detach(&mut self) {
        self.map = None;
    }
}

/// Places entity `id` of `from` at `(x, y)`, transferring it into `to` when given.
///
/// The position is always updated and must lie inside the destination map.
/// When `to` is a different map, the entity leaves `from` and joins `to` in a
/// single step; when it names the same map only the position changes.
pub fn place(
    from: &mut GameMap,
    id: EntityId,
    x: i32,
    y: i32,
    to: Option<&mut GameMap>,
) -> Result<(), MapError> {
    let source = from.id();
    let not_found = || MapError::EntityNotFound {
        entity: id,
        map: source,
    };

    if !from.contains(id) {
        return Err(not_found());
    }

    match to {
        Some(to) if to.id() != source => {
            to.ensure_in_bounds(x, y)?;
            let mut entity = from.remove(id).ok_or_else(not_found)?;
            entity.place(x, y);
            let target = to.id();
            to.insert(entity);
            tracing::debug!(entity = %id, from = %source, to = %target, "entity changed map");
        }
        _ => {
            from.ensure_in_bounds(x, y)?;
            from.get_mut(id).ok_or_else(not_found)?.place(x, y);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orc() -> Entity {
        Entity::actor(
            'o',
            Rgb(63, 127, 63),
            "Orc",
            Ai::hostile(),
            Fighter::new(10, 0, 3),
        )
    }

    fn room(id: u32) -> GameMap {
        GameMap::from_layout(MapId(id), &["......", "......", "......"]).unwrap()
    }

    #[test]
    fn actor_constructor_blocks_and_binds_stats() {
        let orc = orc();
        assert!(orc.blocks_movement);
        assert!(orc.is_alive());
        assert_eq!(orc.as_actor().unwrap().fighter.owner(), Some(orc.id()));
        assert_eq!(orc.map(), None);
    }

    #[test]
    fn objects_are_never_alive() {
        let potion = Entity::new('!', Rgb(127, 0, 255), "Potion", false);
        assert!(!potion.is_alive());
        assert!(potion.as_actor().is_none());
    }

    #[test]
    fn spawn_registers_clone_at_position() {
        let template = orc();
        let mut map = room(1);

        let id = template.spawn(&mut map, 2, 1);

        assert_ne!(id, template.id());
        let clone = map.get(id).unwrap();
        assert_eq!(clone.position, Position::new(2, 1));
        assert_eq!(clone.map(), Some(MapId(1)));
        assert_eq!(clone.as_actor().unwrap().fighter.owner(), Some(id));
        assert!(template.map().is_none());
    }

    #[test]
    fn spawned_stats_are_independent_of_template() {
        let template = orc();
        let mut map = room(1);
        let id = template.spawn(&mut map, 0, 0);

        let clone = map.get_mut(id).unwrap().as_actor_mut().unwrap();
        clone.fighter.set_hp(1);
        clone.fighter.power = 42;
        clone.die();

        let original = template.as_actor().unwrap();
        assert_eq!(original.fighter.hp(), 10);
        assert_eq!(original.fighter.power, 3);
        assert!(original.is_alive());
    }

    #[test]
    fn place_into_other_map_transfers_registration() {
        let mut first = room(1);
        let mut second = room(2);
        let id = orc().place_into(1, 1, &mut first);

        place(&mut first, id, 4, 2, Some(&mut second)).unwrap();

        assert!(!first.contains(id));
        let moved = second.get(id).unwrap();
        assert_eq!(moved.position, Position::new(4, 2));
        assert_eq!(moved.map(), Some(MapId(2)));
    }

    #[test]
    fn place_without_map_only_moves() {
        let mut map = room(1);
        let id = orc().place_into(1, 1, &mut map);

        place(&mut map, id, 3, 0, None).unwrap();

        assert_eq!(map.get(id).unwrap().position, Position::new(3, 0));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn place_into_same_map_id_only_moves() {
        let mut map = room(1);
        let mut twin = room(1);
        let id = orc().place_into(1, 1, &mut map);

        place(&mut map, id, 2, 2, Some(&mut twin)).unwrap();

        assert!(map.contains(id));
        assert!(twin.is_empty());
        assert_eq!(map.get(id).unwrap().position, Position::new(2, 2));
    }

    #[test]
    fn place_unknown_entity_fails() {
        let mut map = room(1);
        let stray = EntityId::next();
        let err = place(&mut map, stray, 0, 0, None).unwrap_err();
        assert!(matches!(err, MapError::EntityNotFound { entity, .. } if entity == stray));
    }

    #[test]
    fn place_outside_the_map_is_rejected() {
        let mut map = room(1);
        let id = orc().place_into(1, 1, &mut map);

        let err = place(&mut map, id, 6, 0, None).unwrap_err();

        assert!(matches!(
            err,
            MapError::OutOfBounds { position, map: MapId(1) } if position == Position::new(6, 0)
        ));
        assert_eq!(map.get(id).unwrap().position, Position::new(1, 1));
    }

    #[test]
    fn transfer_outside_the_target_keeps_the_entity_home() {
        let mut first = room(1);
        let mut second = GameMap::from_layout(MapId(2), &["..", ".."]).unwrap();
        let id = orc().place_into(1, 1, &mut first);

        let err = place(&mut first, id, 4, 2, Some(&mut second)).unwrap_err();

        assert!(matches!(err, MapError::OutOfBounds { map: MapId(2), .. }));
        assert!(first.contains(id));
        assert!(second.is_empty());
    }

    #[test]
    fn move_by_is_pure_translation() {
        let mut orc = orc();
        orc.place(0, 0);
        orc.move_by(-3, 7);
        assert_eq!(orc.position, Position::new(-3, 7));
    }
}
