//! Radius-bounded symmetric shadowcasting.
//!
//! Cells are scanned quadrant by quadrant, row by row outward from the
//! origin. Slopes are kept as exact fractions so results never depend on
//! floating point rounding. A floor cell is revealed only when its centre
//! lies inside the unobstructed sector, which makes visibility between two
//! floor cells symmetric. Walls are revealed whenever any part of them is
//! lit. Cells outside the map count as walls.

use crate::map::{Grid, TileFlags};
use crate::state::Position;

/// Recomputes `visible` for a viewer at `origin` over the `tiles` transparency layer.
pub fn compute_fov(
    tiles: &Grid<TileFlags>,
    origin: Position,
    radius: u32,
    visible: &mut Grid<bool>,
) {
    visible.fill(false);
    if !tiles.contains(origin.x, origin.y) {
        return;
    }
    if let Some(cell) = visible.get_mut(origin.x, origin.y) {
        *cell = true;
    }

    let radius = i64::from(radius);
    for quadrant in Quadrant::ALL {
        let mut rows = vec![Row::first()];
        while let Some(row) = rows.pop() {
            scan_row(tiles, origin, radius, quadrant, row, visible, &mut rows);
        }
    }
}

fn scan_row(
    tiles: &Grid<TileFlags>,
    origin: Position,
    radius: i64,
    quadrant: Quadrant,
    mut row: Row,
    visible: &mut Grid<bool>,
    pending: &mut Vec<Row>,
) {
    if row.depth > radius {
        return;
    }

    let mut prev_wall: Option<bool> = None;
    for col in row.min_col()..=row.max_col() {
        let cell = quadrant.transform(origin, row.depth, col);
        let is_wall = !tiles
            .get(cell.x, cell.y)
            .is_some_and(|tile| tile.is_transparent());

        if (is_wall || row.is_symmetric(col))
            && row.depth * row.depth + col * col <= radius * radius
        {
            if let Some(seen) = visible.get_mut(cell.x, cell.y) {
                *seen = true;
            }
        }

        match (prev_wall, is_wall) {
            (Some(true), false) => row.start = Slope::of(row.depth, col),
            (Some(false), true) => {
                let mut next = row.next();
                next.end = Slope::of(row.depth, col);
                pending.push(next);
            }
            _ => {}
        }
        prev_wall = Some(is_wall);
    }

    if prev_wall == Some(false) {
        pending.push(row.next());
    }
}

#[derive(Clone, Copy, Debug)]
enum Quadrant {
    North,
    East,
    South,
    West,
}

impl Quadrant {
    const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    fn transform(self, origin: Position, depth: i64, col: i64) -> Position {
        let (depth, col) = (depth as i32, col as i32);
        match self {
            Self::North => origin.offset(col, -depth),
            Self::South => origin.offset(col, depth),
            Self::East => origin.offset(depth, col),
            Self::West => origin.offset(-depth, col),
        }
    }
}

/// Exact slope `num / den` with `den > 0`.
#[derive(Clone, Copy, Debug)]
struct Slope {
    num: i64,
    den: i64,
}

impl Slope {
    const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Slope through the near edge of the cell at `(depth, col)`.
    fn of(depth: i64, col: i64) -> Self {
        Self::new(2 * col - 1, 2 * depth)
    }
}

#[derive(Clone, Copy, Debug)]
struct Row {
    depth: i64,
    start: Slope,
    end: Slope,
}

impl Row {
    fn first() -> Self {
        Self {
            depth: 1,
            start: Slope::new(-1, 1),
            end: Slope::new(1, 1),
        }
    }

    fn next(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    /// `round_ties_up(depth * start)`.
    fn min_col(&self) -> i64 {
        let Slope { num, den } = self.start;
        (2 * self.depth * num + den).div_euclid(2 * den)
    }

    /// `round_ties_down(depth * end)`.
    fn max_col(&self) -> i64 {
        let Slope { num, den } = self.end;
        -(-(2 * self.depth * num - den)).div_euclid(2 * den)
    }

    fn is_symmetric(&self, col: i64) -> bool {
        col * self.start.den >= self.depth * self.start.num
            && col * self.end.den <= self.depth * self.end.num
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::GameMap;
    use crate::state::MapId;

    fn open_room(size: usize) -> GameMap {
        let row = ".".repeat(size);
        let rows = vec![row; size];
        GameMap::from_layout(MapId(0), &rows).unwrap()
    }

    fn fov(map: &GameMap, origin: Position, radius: u32) -> Grid<bool> {
        let mut visible = Grid::filled(map.width(), map.height(), false);
        compute_fov(&map.tiles, origin, radius, &mut visible);
        visible
    }

    #[test]
    fn open_room_reveals_exactly_the_disc() {
        let map = open_room(25);
        let origin = Position::new(12, 12);
        let radius = 5;
        let visible = fov(&map, origin, radius);

        for (x, y, &seen) in visible.iter() {
            let (dx, dy) = (x - origin.x, y - origin.y);
            let inside = dx * dx + dy * dy <= (radius * radius) as i32;
            assert_eq!(seen, inside, "cell ({x}, {y})");
        }
    }

    #[test]
    fn full_height_wall_blocks_everything_behind_it() {
        let rows: Vec<String> = (0..11).map(|_| ".......#...".to_string()).collect();
        let map = GameMap::from_layout(MapId(0), &rows).unwrap();
        let visible = fov(&map, Position::new(5, 5), 10);

        assert!(visible.get(7, 5).copied().unwrap());
        assert!(visible.get(6, 5).copied().unwrap());
        for (x, y, &seen) in visible.iter() {
            if x > 7 {
                assert!(!seen, "cell ({x}, {y}) is behind the wall");
            }
        }
    }

    #[test]
    fn origin_is_always_visible() {
        let map = GameMap::from_layout(MapId(0), &["###", "#.#", "###"]).unwrap();
        let visible = fov(&map, Position::new(1, 1), 1);
        assert_eq!(visible.get(1, 1), Some(&true));
        assert_eq!(visible.get(1, 0), Some(&true));
        assert_eq!(visible.get(0, 1), Some(&true));
    }

    #[test]
    fn origin_outside_map_sees_nothing() {
        let map = open_room(5);
        let visible = fov(&map, Position::new(-3, 2), 4);
        assert_eq!(visible.count(), 0);
    }
}
