//! Glue tying the session and the terminal UI together.
use anyhow::Result;

use crate::config::UiConfig;
use crate::presentation::{
    event_loop::EventLoop,
    terminal::{self, TerminalGuard},
};
use crate::session::Session;

pub struct CliApp {
    session: Session,
    ui: UiConfig,
}

impl CliApp {
    pub fn new(session: Session, ui: UiConfig) -> Self {
        Self { session, ui }
    }

    /// Take over the terminal and play until the player quits.
    pub fn run(self) -> Result<Session> {
        tracing::info!(
            player = %self.session.engine().player_id(),
            map = %self.session.engine().map().id(),
            "CLI client starting"
        );

        let (_guard, mut terminal) = terminal::guarded(TerminalGuard::new(), terminal::init)?;

        EventLoop::new(self.session, self.ui).run(&mut terminal)
    }
}
