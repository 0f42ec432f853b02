//! Blocking input loop: one event is fully handled and drawn before the next.
use anyhow::{Context, Result};
use crossterm::event;
use ratatui::{Terminal, backend::Backend};

use crate::{
    config::UiConfig,
    input::InputEvent,
    presentation::ui,
    session::{Flow, Session},
};

pub struct EventLoop {
    session: Session,
    ui: UiConfig,
}

impl EventLoop {
    pub fn new(session: Session, ui: UiConfig) -> Self {
        Self { session, ui }
    }

    /// Run until Escape or the quit signal. Returns the final session.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<Session> {
        self.redraw(terminal)?;

        loop {
            let raw = event::read().context("failed to read terminal event")?;
            let Some(input) = InputEvent::from_crossterm(raw) else {
                continue;
            };

            if self.step(terminal, input)? == Flow::Quit {
                break;
            }
        }

        tracing::info!(turn = self.session.engine().turn(), "event loop finished");
        Ok(self.session)
    }

    /// Handle one event and redraw.
    pub fn step<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        input: InputEvent,
    ) -> Result<Flow> {
        let step = self.session.handle_event(input);
        if let Some(report) = &step.turn {
            tracing::debug!(phases = report.phases.len(), "turn resolved");
        }
        if step.flow == Flow::Quit {
            return Ok(Flow::Quit);
        }

        self.redraw(terminal)?;
        Ok(Flow::Continue)
    }

    fn redraw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let map_area = ui::render(terminal, &self.session, &self.ui)?;
        self.session.set_map_origin(map_area.x, map_area.y);
        Ok(())
    }
}
