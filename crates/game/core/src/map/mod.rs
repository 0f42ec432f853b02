//! Map registry: tiles, visibility grids and the entities placed on the map.
mod grid;
mod tile;

pub use grid::Grid;
pub use tile::TileFlags;

use crate::entity::Entity;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, MapId, Position};

/// Errors raised by map registry operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("entity {entity} is not registered in {map}")]
    EntityNotFound { entity: EntityId, map: MapId },

    #[error("position {position} is outside {map}")]
    OutOfBounds { position: Position, map: MapId },
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EntityNotFound { .. } => ErrorSeverity::Internal,
            Self::OutOfBounds { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EntityNotFound { .. } => "MAP_ENTITY_NOT_FOUND",
            Self::OutOfBounds { .. } => "MAP_OUT_OF_BOUNDS",
        }
    }
}

/// Errors raised while building a map from an ASCII layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseMapError {
    #[error("layout has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
}

impl GameError for ParseMapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

/// A single level: terrain, field-of-view state and placed entities.
///
/// Entities are kept in insertion order, which is also the order enemies
/// take their turns in.
#[derive(Debug)]
pub struct GameMap {
    id: MapId,
    pub(crate) tiles: Grid<TileFlags>,
    /// Cells in the player's field of view this turn.
    pub(crate) visible: Grid<bool>,
    /// Every cell that has ever been visible. Never shrinks.
    pub(crate) explored: Grid<bool>,
    entities: Vec<Entity>,
}

impl GameMap {
    /// Creates a map filled with wall.
    pub fn new(id: MapId, width: u32, height: u32) -> Self {
        Self {
            id,
            tiles: Grid::filled(width, height, TileFlags::WALL),
            visible: Grid::filled(width, height, false),
            explored: Grid::filled(width, height, false),
            entities: Vec::new(),
        }
    }

    /// Builds a map from rows of `#` (wall) and `.` (floor).
    pub fn from_layout<S: AsRef<str>>(id: MapId, rows: &[S]) -> Result<Self, ParseMapError> {
        let first = rows.first().ok_or(ParseMapError::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(ParseMapError::Empty);
        }

        let mut map = Self::new(id, width as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            let found = row.as_ref().chars().count();
            if found != width {
                return Err(ParseMapError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.as_ref().chars().enumerate() {
                let tile = match glyph {
                    '#' => TileFlags::WALL,
                    '.' => TileFlags::FLOOR,
                    _ => return Err(ParseMapError::UnknownGlyph { glyph, x, y }),
                };
                map.set_tile(x as i32, y as i32, tile);
            }
        }
        Ok(map)
    }

    pub fn id(&self) -> MapId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.tiles.width()
    }

    pub fn height(&self) -> u32 {
        self.tiles.height()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.tiles.contains(x, y)
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<TileFlags> {
        self.tiles.get(x, y).copied()
    }

    /// Overwrites a tile; out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileFlags) {
        if let Some(cell) = self.tiles.get_mut(x, y) {
            *cell = tile;
        }
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(TileFlags::is_walkable)
    }

    pub fn is_transparent(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(TileFlags::is_transparent)
    }

    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        self.visible.get(x, y).copied().unwrap_or(false)
    }

    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        self.explored.get(x, y).copied().unwrap_or(false)
    }

    pub fn visible(&self) -> &Grid<bool> {
        &self.visible
    }

    pub fn explored(&self) -> &Grid<bool> {
        &self.explored
    }

    /// Registers an entity and returns its identifier.
    pub fn insert(&mut self, mut entity: Entity) -> EntityId {
        let id = entity.id();
        entity.attach(self.id);
        self.entities.push(entity);
        id
    }

    /// Unregisters an entity, handing ownership back to the caller.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|entity| entity.id() == id)?;
        let mut entity = self.entities.remove(index);
        entity.detach();
        Some(entity)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.iter().any(|entity| entity.id() == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }

    /// Entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// First movement-blocking entity standing on `(x, y)`.
    pub fn blocking_entity_at(&self, x: i32, y: i32) -> Option<&Entity> {
        let position = Position::new(x, y);
        self.entities
            .iter()
            .find(|entity| entity.blocks_movement && entity.position == position)
    }

    /// Checks that `(x, y)` lies inside the map.
    pub fn ensure_in_bounds(&self, x: i32, y: i32) -> Result<(), MapError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(MapError::OutOfBounds {
                position: Position::new(x, y),
                map: self.id,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Rgb;

    #[test]
    fn layout_parses_walls_and_floor() {
        let map = GameMap::from_layout(MapId(0), &["###", "#.#", "###"]).unwrap();
        assert_eq!((map.width(), map.height()), (3, 3));
        assert!(map.is_walkable(1, 1));
        assert!(map.is_transparent(1, 1));
        assert!(!map.is_walkable(0, 0));
        assert!(!map.is_transparent(2, 1));
    }

    #[test]
    fn layout_rejects_ragged_rows_and_unknown_glyphs() {
        assert_eq!(
            GameMap::from_layout(MapId(0), &["...", ".."]).unwrap_err(),
            ParseMapError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert!(matches!(
            GameMap::from_layout(MapId(0), &[".x."]).unwrap_err(),
            ParseMapError::UnknownGlyph {
                glyph: 'x',
                x: 1,
                y: 0
            }
        ));
        assert_eq!(
            GameMap::from_layout::<&str>(MapId(0), &[]).unwrap_err(),
            ParseMapError::Empty
        );
    }

    #[test]
    fn bounds_cover_exactly_the_grid() {
        let map = GameMap::new(MapId(0), 4, 2);
        assert!(map.in_bounds(0, 0));
        assert!(map.in_bounds(3, 1));
        assert!(!map.in_bounds(4, 1));
        assert!(!map.in_bounds(-1, 0));
        assert!(map.ensure_in_bounds(9, 9).is_err());
    }

    #[test]
    fn insert_and_remove_keep_order() {
        let mut map = GameMap::new(MapId(3), 5, 5);
        let a = map.insert(Entity::new('a', Rgb::WHITE, "A", false));
        let b = map.insert(Entity::new('b', Rgb::WHITE, "B", false));
        let c = map.insert(Entity::new('c', Rgb::WHITE, "C", false));

        let removed = map.remove(b).unwrap();
        assert_eq!(removed.map(), None);

        let order: Vec<_> = map.entities().map(Entity::id).collect();
        assert_eq!(order, vec![a, c]);
        assert_eq!(map.get(a).unwrap().map(), Some(MapId(3)));
        assert!(map.remove(b).is_none());
    }

    #[test]
    fn blocking_lookup_ignores_passable_entities() {
        let mut map = GameMap::from_layout(MapId(0), &["...."]).unwrap();
        Entity::new('!', Rgb::WHITE, "Potion", false).place_into(1, 0, &mut map);
        assert!(map.blocking_entity_at(1, 0).is_none());

        let wall = Entity::new('X', Rgb::WHITE, "Statue", true).place_into(2, 0, &mut map);
        assert_eq!(map.blocking_entity_at(2, 0).map(Entity::id), Some(wall));
    }
}
