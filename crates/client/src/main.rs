//! Dungeon game client binary.
//!
//! Composition root: loads configuration, installs logging, builds the
//! starting session and hands it to the terminal frontend.

use anyhow::Result;
use client_frontend_cli::{CliApp, CliConfig, FrontendConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    logging::setup_logging(cli_config.session_id.as_deref())?;
    tracing::info!(
        fov_radius = cli_config.game.fov_radius,
        message_capacity = frontend_config.messages.capacity,
        "configuration loaded"
    );

    let session = dungeon_client::build_session(&frontend_config, cli_config.game.clone())?;
    let session = CliApp::new(session, cli_config.ui).run()?;

    tracing::info!(turns = session.engine().turn(), "session ended");
    Ok(())
}
