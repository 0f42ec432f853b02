//! Main render entry point composing all widgets into one frame.
use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

use crate::{
    config::UiConfig,
    presentation::{theme::RatatuiTheme, widgets},
    session::Session,
    state::InputMode,
};

/// Draw the session and present it.
///
/// Everything is drawn inside [`Terminal::draw`], which presents the frame
/// and swaps the buffers however the closure ends. A widget failure is held
/// until the frame is on screen and returned afterwards.
///
/// Returns the screen rectangle the map tiles occupy.
pub fn render<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &Session,
    ui: &UiConfig,
) -> Result<Rect> {
    let theme = RatatuiTheme::new();
    let mut outcome = Ok(Rect::default());

    terminal
        .draw(|frame| outcome = draw(frame, session, ui, &theme))
        .context("failed to present frame")?;

    outcome
}

/// Compose one frame. HistoryViewer draws the main game first as background.
pub fn draw(
    frame: &mut Frame,
    session: &Session,
    ui: &UiConfig,
    theme: &RatatuiTheme,
) -> Result<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                          // Map
            Constraint::Length(ui.message_panel_height), // Messages
            Constraint::Length(1),                       // Footer
        ])
        .split(frame.area());

    let mode = session.mode();
    let map_area = widgets::game_area::render(
        frame,
        chunks[0],
        session.engine(),
        map_title(mode),
        theme,
    );

    let recent = session
        .log()
        .recent(usize::from(ui.message_panel_height.saturating_sub(2)));
    let block = Block::default().borders(Borders::ALL).title("Messages");
    widgets::messages::render(chunks[1], frame.buffer_mut(), recent, block, theme);

    widgets::footer::render(frame, chunks[2], session.engine(), mode, theme);

    if let InputMode::HistoryViewer { cursor, .. } = mode {
        widgets::history::render(frame, session.log(), cursor, theme);
    }

    map_area
}

fn map_title(mode: InputMode) -> &'static str {
    match mode {
        InputMode::GameOver => "You died - press Esc",
        _ => "Dungeon",
    }
}
