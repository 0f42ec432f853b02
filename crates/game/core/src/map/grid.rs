/// Dense row-major grid addressed by signed tile coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }

    /// Resets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        self.index(x, y).map(|idx| &mut self.cells[idx])
    }

    /// Iterates `(x, y, value)` row by row.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, value)| ((idx % width) as i32, (idx / width) as i32, value))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

impl Grid<bool> {
    /// Sets every cell that is `true` in `other`. Cells are never cleared.
    pub fn union_with(&mut self, other: &Grid<bool>) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        for (cell, &set) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell |= set;
        }
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&set| set).count()
    }
}
