//! One-line footer: key hints and the names under the pointer.

use game_core::{Engine, Position};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::RatatuiTheme;
use crate::state::InputMode;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    engine: &Engine,
    mode: InputMode,
    theme: &RatatuiTheme,
) {
    let mut spans = vec![Span::styled(hints(mode), theme.hint())];

    let names = engine
        .mouse_location()
        .map(|position| names_at(engine, position))
        .unwrap_or_default();
    if !names.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(names, theme.highlight()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(mode: InputMode) -> &'static str {
    match mode {
        InputMode::MainGame => "hjklyubn move  . wait  v history  Esc quit",
        InputMode::GameOver => "Esc quit",
        InputMode::HistoryViewer { .. } => "↑↓ PgUp PgDn Home End scroll  other keys back",
    }
}

/// Names of entities standing on a visible tile, comma separated.
pub fn names_at(engine: &Engine, position: Position) -> String {
    let map = engine.map();
    if !map.is_visible(position.x, position.y) {
        return String::new();
    }
    map.entities()
        .filter(|entity| entity.position == position)
        .map(|entity| entity.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
