//! Session bootstrap for the dungeon client.
//!
//! Builds the starting world from built-in content and wraps it in a
//! [`Session`] ready for a frontend to drive.

use anyhow::{Context, Result};
use client_frontend_cli::Session;
use client_frontend_core::{FrontendConfig, MessageLog};
use game_core::{Engine, GameConfig, MapId};

/// Map id of the first level.
pub const START_MAP: MapId = MapId(1);

pub const WELCOME: &str = "Hello and welcome, adventurer, to yet another dungeon!";

/// Demo level, player and enemies spawned, visibility computed.
pub fn build_session(frontend: &FrontendConfig, game: GameConfig) -> Result<Session> {
    let scenario = game_content::build_scenario(START_MAP, game_content::DEMO)
        .context("failed to build the demo scenario")?;
    tracing::info!(
        entities = scenario.map.len(),
        width = scenario.map.width(),
        height = scenario.map.height(),
        "scenario loaded"
    );

    let engine = Engine::new(scenario.map, scenario.player, game)
        .context("failed to start the engine")?;

    let mut log = MessageLog::new(frontend.messages.capacity);
    log.push_text(WELCOME);

    Ok(Session::new(engine, log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_cli::InputMode;

    #[test]
    fn demo_session_starts_in_main_game_with_a_welcome() {
        let session = build_session(&FrontendConfig::default(), GameConfig::default()).unwrap();

        assert_eq!(session.mode(), InputMode::MainGame);
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log().get(0).unwrap().text, WELCOME);
        assert_eq!(session.engine().map().id(), START_MAP);
        assert!(session.engine().map().explored().count() > 0);
    }
}
