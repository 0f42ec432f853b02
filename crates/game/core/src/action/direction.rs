/// One of the eight compass directions a bump can go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Screen-space offset: y grows downward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (1, -1),
            Self::DownLeft => (-1, 1),
            Self::DownRight => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn deltas_cover_all_eight_neighbours() {
        let deltas: HashSet<_> = Direction::iter().map(Direction::delta).collect();
        assert_eq!(deltas.len(), 8);
        assert!(
            deltas
                .iter()
                .all(|&(dx, dy)| dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0))
        );
    }
}
