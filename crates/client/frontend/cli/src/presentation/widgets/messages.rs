//! Messages widget displaying recent game events.

use client_frontend_core::MessageEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, List, ListDirection, ListItem, Widget},
};

use crate::presentation::theme::RatatuiTheme;

/// Render `entries` (newest first) bottom-up inside `block`, so the newest
/// message sits on the last line.
pub fn render<'a>(
    area: Rect,
    buf: &mut Buffer,
    entries: impl IntoIterator<Item = &'a MessageEntry>,
    block: Block<'_>,
    theme: &RatatuiTheme,
) {
    let items: Vec<ListItem> = entries
        .into_iter()
        .map(|entry| ListItem::new(entry.full_text()).style(theme.message(entry.level)))
        .collect();

    List::new(items)
        .block(block)
        .direction(ListDirection::BottomToTop)
        .render(area, buf);
}
