//! Map widget: tiles by light level, then visible entities on top.

use game_core::{GameMap, Position};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::presentation::theme::{RatatuiTheme, TileLight};

/// Draws `map` with tile (0, 0) at the top-left of the area. Tiles that do
/// not fit are clipped.
pub struct MapView<'a> {
    map: &'a GameMap,
    theme: &'a RatatuiTheme,
}

impl<'a> MapView<'a> {
    pub fn new(map: &'a GameMap, theme: &'a RatatuiTheme) -> Self {
        Self { map, theme }
    }

    fn light(&self, x: i32, y: i32) -> TileLight {
        if self.map.is_visible(x, y) {
            TileLight::Lit
        } else if self.map.is_explored(x, y) {
            TileLight::Dark
        } else {
            TileLight::Shroud
        }
    }
}

impl Widget for MapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(tile_at) = TileCells::new(area, self.map) else {
            return;
        };

        for (x, y) in tile_at.tiles() {
            let Some(tile) = self.map.tile(x, y) else {
                continue;
            };
            let style = self.theme.tile(tile, self.light(x, y));
            if let Some(cell) = buf.cell_mut(tile_at.cell(x, y)) {
                cell.set_char(' ').set_style(style);
            }
        }

        // Entities stack in insertion order; later ones overwrite earlier ones.
        for entity in self.map.entities() {
            let Position { x, y } = entity.position;
            if !self.map.is_visible(x, y) || !tile_at.fits(x, y) {
                continue;
            }
            if let Some(cell) = buf.cell_mut(tile_at.cell(x, y)) {
                cell.set_char(entity.glyph)
                    .set_style(self.theme.entity(entity.color));
            }
        }
    }
}

/// The part of the map that fits inside the drawing area.
struct TileCells {
    area: Rect,
    columns: i32,
    rows: i32,
}

impl TileCells {
    fn new(area: Rect, map: &GameMap) -> Option<Self> {
        let columns = i32::from(area.width).min(map.width() as i32);
        let rows = i32::from(area.height).min(map.height() as i32);
        (columns > 0 && rows > 0).then_some(Self {
            area,
            columns,
            rows,
        })
    }

    fn fits(&self, x: i32, y: i32) -> bool {
        (0..self.columns).contains(&x) && (0..self.rows).contains(&y)
    }

    fn tiles(&self) -> impl Iterator<Item = (i32, i32)> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |y| (0..columns).map(move |x| (x, y)))
    }

    fn cell(&self, x: i32, y: i32) -> (u16, u16) {
        (self.area.x + x as u16, self.area.y + y as u16)
    }
}
