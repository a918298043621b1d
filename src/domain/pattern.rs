use super::{Cell, LifeError};

/// A reusable shape that can be stamped onto a board.
/// The grid is dense and row-major; transforms never mutate the
/// receiver, they return a new Pattern.
#[derive(Clone, PartialEq, Debug)]
pub struct Pattern {
    name: &'static str,
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Build a pattern from 0/1 row literals. Any nonzero entry is alive.
    /// All rows must have the same length.
    pub fn from_rows(name: &'static str, rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        debug_assert!(rows.iter().all(|row| row.len() == width));

        let cells = rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|&v| if v != 0 { Cell::Alive } else { Cell::Dead })
            .collect();

        Self { name, height, width, cells }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Pattern dimensions as (height, width)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Get cell at (row, col); None outside the pattern
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[row * self.width + col])
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[row * self.width + col]))
    }

    /// New pattern with the row order reversed
    pub fn flip_vertical(&self) -> Self {
        let cells = (0..self.height)
            .rev()
            .flat_map(|row| {
                self.cells[row * self.width..(row + 1) * self.width]
                    .iter()
                    .copied()
            })
            .collect();

        Self {
            name: self.name,
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// New pattern with the column order reversed
    pub fn flip_horizontal(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|row| {
                (0..self.width)
                    .rev()
                    .map(move |col| self.cells[row * self.width + col])
            })
            .collect();

        Self {
            name: self.name,
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// New pattern with rows and columns transposed.
    /// Non-square input yields swapped dimensions.
    pub fn flip_diagonal(&self) -> Self {
        let cells = (0..self.width)
            .flat_map(|col| (0..self.height).map(move |row| self.cells[row * self.width + col]))
            .collect();

        Self {
            name: self.name,
            height: self.width,
            width: self.height,
            cells,
        }
    }

    /// Rotate the pattern 90 degrees counterclockwise, n times.
    /// Each application is "transpose then flip vertically"; four
    /// applications reproduce the original. Negative n is rejected.
    pub fn rotate(&self, n: i32) -> Result<Self, LifeError> {
        if n < 0 {
            return Err(LifeError::InvalidTransformArgument { count: n });
        }

        let mut rotated = self.clone();
        for _ in 0..n {
            rotated = rotated.flip_diagonal().flip_vertical();
        }
        Ok(rotated)
    }
}
