//! Full-screen message history overlay.

use client_frontend_core::MessageLog;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders},
};

use super::messages;
use crate::presentation::theme::RatatuiTheme;

/// Gap between the overlay box and each screen edge.
pub const MARGIN: u16 = 3;

/// Composite the history box over whatever the frame already holds.
///
/// The box is drawn into its own buffer and merged, so the main game frame
/// stays visible around it. Shows entries up to and including `cursor`.
pub fn render(frame: &mut Frame, log: &MessageLog, cursor: usize, theme: &RatatuiTheme) {
    let Some(area) = overlay_area(frame.area()) else {
        return;
    };

    let mut overlay = Buffer::empty(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from("┤Message history├").centered());
    messages::render(area, &mut overlay, log.up_to(cursor).rev(), block, theme);

    frame.buffer_mut().merge(&overlay);
}

/// Screen minus the margins, or nothing when the screen is too small.
pub fn overlay_area(screen: Rect) -> Option<Rect> {
    let width = screen.width.checked_sub(MARGIN * 2)?;
    let height = screen.height.checked_sub(MARGIN * 2)?;
    if width < 2 || height < 2 {
        return None;
    }
    Some(Rect::new(screen.x + MARGIN, screen.y + MARGIN, width, height))
}
