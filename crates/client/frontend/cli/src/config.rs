//! CLI-specific configuration for terminal UI.
use std::env;

use game_core::GameConfig;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface, plus the game
/// rules configuration the CLI hands to the engine at start-up.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub game: GameConfig,
    /// Log session directory name. Generated from the clock when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 7)
    /// - `DUNGEON_FOV_RADIUS` - Field of view radius in tiles (default: 10)
    /// - `DUNGEON_SESSION_ID` - Log session name (default: `session_<unix secs>`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        if let Some(radius) = read_env::<u32>("DUNGEON_FOV_RADIUS") {
            config.game = GameConfig::with_fov_radius(radius);
        }

        config.session_id = env::var("DUNGEON_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 7,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
