//! Bordered map panel.

use anyhow::{Result, anyhow};
use game_core::Engine;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders},
};

use super::map::MapView;
use crate::presentation::theme::RatatuiTheme;

/// Render the map panel and return the inner rectangle tiles were drawn in.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    engine: &Engine,
    title: &str,
    theme: &RatatuiTheme,
) -> Result<Rect> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_owned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let map = engine.map();
    frame.render_widget(MapView::new(map, theme), inner);

    if engine.player_position().is_none() {
        return Err(anyhow!(
            "player {} is not on the active map {}",
            engine.player_id(),
            map.id()
        ));
    }

    Ok(inner)
}
