//! Actor templates. Live actors are spawned as copies of these.
use game_core::{Ai, Entity, Fighter, Rgb};

pub fn player() -> Entity {
    Entity::actor(
        '@',
        Rgb(255, 255, 255),
        "Player",
        Ai::hostile(),
        Fighter::new(30, 2, 5),
    )
}

pub fn orc() -> Entity {
    Entity::actor(
        'o',
        Rgb(63, 127, 63),
        "Orc",
        Ai::hostile(),
        Fighter::new(10, 0, 3),
    )
}

pub fn troll() -> Entity {
    Entity::actor(
        'T',
        Rgb(0, 127, 0),
        "Troll",
        Ai::hostile(),
        Fighter::new(16, 1, 4),
    )
}

/// Template matching a layout marker glyph.
pub fn for_marker(marker: char) -> Option<Entity> {
    match marker {
        'o' => Some(orc()),
        'T' => Some(troll()),
        _ => None,
    }
}
