//! Colours for the terminal UI.

use client_frontend_core::MessageLevel;
use game_core::{Rgb, TileFlags};
use ratatui::style::{Color, Modifier, Style};

/// How much of a tile the player currently knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileLight {
    /// Inside the current field of view.
    Lit,
    /// Explored earlier but not visible now.
    Dark,
    /// Never seen.
    Shroud,
}

/// Consistent colour scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn tile(&self, tile: TileFlags, light: TileLight) -> Style {
        let background = match (light, tile.is_walkable()) {
            (TileLight::Shroud, _) => Color::Black,
            (TileLight::Lit, true) => Color::Rgb(200, 180, 50),
            (TileLight::Lit, false) => Color::Rgb(130, 110, 50),
            (TileLight::Dark, true) => Color::Rgb(50, 50, 150),
            (TileLight::Dark, false) => Color::Rgb(0, 0, 100),
        };
        Style::default().bg(background)
    }

    pub fn entity(&self, color: Rgb) -> Style {
        Style::default()
            .fg(to_color(color))
            .add_modifier(Modifier::BOLD)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }
}

pub fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}
