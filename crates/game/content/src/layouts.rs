//! Built-in map layouts and the scenario builder that populates them.
use game_core::{EntityId, GameMap, MapId, ParseMapError};

use crate::factories;

/// Two rooms joined by a corridor. `@` marks the player start, `o` orcs, `T` a troll.
pub const DEMO: &[&str] = &[
    "##############################################",
    "#...........##################################",
    "#...........#####################..........###",
    "#.....@.....#####################..........###",
    "#...........#####################....T.....###",
    "#...........#####################..........###",
    "#..........................................###",
    "#...........#####################......o...###",
    "#####.###########################............#",
    "#####.######################################.#",
    "#####.......o................................#",
    "##############################################",
];

/// Errors raised while turning a layout into a populated map.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid layout: {0}")]
    Layout(#[from] ParseMapError),

    #[error("layout has no player start marker '@'")]
    MissingPlayerStart,
}

/// A populated starting map.
#[derive(Debug)]
pub struct Scenario {
    pub map: GameMap,
    pub player: EntityId,
}

/// Builds a map from `rows`, spawning the player and every marked enemy.
///
/// Marker cells become floor. Enemies are spawned in reading order.
pub fn build_scenario<S: AsRef<str>>(id: MapId, rows: &[S]) -> Result<Scenario, ContentError> {
    let mut terrain = Vec::with_capacity(rows.len());
    let mut player_start = None;
    let mut spawns = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        let mut line = String::with_capacity(row.as_ref().len());
        for (x, glyph) in row.as_ref().chars().enumerate() {
            let (x, y) = (x as i32, y as i32);
            match glyph {
                '@' => {
                    player_start = Some((x, y));
                    line.push('.');
                }
                marker if factories::for_marker(marker).is_some() => {
                    spawns.push((marker, x, y));
                    line.push('.');
                }
                other => line.push(other),
            }
        }
        terrain.push(line);
    }

    let mut map = GameMap::from_layout(id, &terrain)?;
    let (px, py) = player_start.ok_or(ContentError::MissingPlayerStart)?;
    let player = factories::player().spawn(&mut map, px, py);

    for (marker, x, y) in spawns {
        if let Some(template) = factories::for_marker(marker) {
            let spawned = template.spawn(&mut map, x, y);
            tracing::debug!(entity = %spawned, marker = %marker, x, y, "spawned from layout");
        }
    }

    Ok(Scenario { map, player })
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Position;

    #[test]
    fn demo_layout_builds_with_player_and_enemies() {
        let scenario = build_scenario(MapId(1), DEMO).unwrap();
        let player = scenario.map.get(scenario.player).unwrap();
        assert_eq!(player.position, Position::new(6, 3));
        assert!(scenario.map.is_walkable(6, 3));

        let names: Vec<_> = scenario
            .map
            .entities()
            .filter(|entity| entity.id() != scenario.player)
            .map(|entity| entity.name.as_str())
            .collect();
        assert_eq!(names, vec!["Troll", "Orc", "Orc"]);
    }

    #[test]
    fn missing_player_start_is_rejected() {
        let err = build_scenario(MapId(1), &["#o#"]).unwrap_err();
        assert!(matches!(err, ContentError::MissingPlayerStart));
    }

    #[test]
    fn unknown_glyph_surfaces_layout_error() {
        let err = build_scenario(MapId(1), &["@?"]).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Layout(ParseMapError::UnknownGlyph { glyph: '?', .. })
        ));
    }
}
