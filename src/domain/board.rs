use super::{Cell, LifeError, Pattern};

/// Board owns the square simulation grid and advances it one
/// generation per step. Dimensions are fixed at construction.
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new size x size board with all cells dead
    pub fn new(size: usize) -> Result<Self, LifeError> {
        if size == 0 {
            return Err(LifeError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![Cell::Dead; size * size],
        })
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at position, bounds checked
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, LifeError> {
        if row >= self.size || col >= self.size {
            return Err(LifeError::IndexOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Set cell at position, bounds checked
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), LifeError> {
        if row >= self.size || col >= self.size {
            return Err(LifeError::IndexOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count live cells among the 8 neighbors. The boundary is
    /// zero-padded: positions beyond the edge contribute 0, there is
    /// no wraparound.
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let n = self.size as isize;

        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter(|&(dr, dc)| {
                let r = row as isize + dr;
                let c = col as isize + dc;
                r >= 0 && r < n && c >= 0 && c < n && self.cells[(r * n + c) as usize].is_alive()
            })
            .count() as u8
    }

    /// Advance the board one generation under B3/S23. The next grid is
    /// computed entirely from the previous one; no cell's update can
    /// observe another cell's already-updated value.
    pub fn step(&mut self) {
        let next: Vec<Cell> = (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .map(|(row, col)| {
                let neighbors = self.count_live_neighbors(row, col);
                self.cells[self.index(row, col)].evolve(neighbors)
            })
            .collect();

        self.cells = next;
    }

    /// Copy a pattern onto the board, centered on the given (row, col).
    /// The top-left corner is the center minus half the pattern
    /// dimensions, rounded down. The whole pattern must fit on the
    /// board; partial placement is rejected without writing anything.
    pub fn insert(&mut self, pattern: &Pattern, center: (usize, usize)) -> Result<(), LifeError> {
        let (height, width) = pattern.dimensions();
        let (row, col) = center;

        let top = row as isize - (height / 2) as isize;
        let left = col as isize - (width / 2) as isize;

        let fits = top >= 0
            && left >= 0
            && top + height as isize <= self.size as isize
            && left + width as isize <= self.size as isize;
        if !fits {
            return Err(LifeError::PlacementOutOfBounds {
                row,
                col,
                height,
                width,
                size: self.size,
            });
        }

        for (r, c, cell) in pattern.iter_cells() {
            let idx = self.index(top as usize + r, left as usize + c);
            self.cells[idx] = cell;
        }
        Ok(())
    }

    /// Row-major copy of the current grid, for display
    pub fn snapshot(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.size)
            .flat_map(move |row| (0..self.size).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[self.index(row, col)]))
    }

    /// Count of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize the board (~30% chance of alive)
    pub fn randomize(&mut self) {
        use rand::Rng;
        let mut rng = rand::rng();

        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_new_board_is_dead() {
        let board = Board::new(8).unwrap();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0).unwrap_err(), LifeError::InvalidSize);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::new(4).unwrap();
        board.set(3, 3, Cell::Alive).unwrap();
        assert_eq!(board.get(3, 3).unwrap(), Cell::Alive);

        assert_eq!(
            board.set(4, 0, Cell::Alive).unwrap_err(),
            LifeError::IndexOutOfRange { row: 4, col: 0, size: 4 }
        );
        assert_eq!(
            board.get(0, 4).unwrap_err(),
            LifeError::IndexOutOfRange { row: 0, col: 4, size: 4 }
        );
    }

    #[test]
    fn test_stasis() {
        let mut board = Board::new(10).unwrap();
        for _ in 0..5 {
            board.step();
            assert_eq!(board.population(), 0);
        }
    }

    #[test]
    fn test_neighbor_counting_zero_padded() {
        // Two live cells in the top-left corner; the corner cell sees
        // only one neighbor because the edge contributes nothing.
        let mut board = Board::new(5).unwrap();
        board.set(0, 0, Cell::Alive).unwrap();
        board.set(0, 1, Cell::Alive).unwrap();
        assert_eq!(board.count_live_neighbors(0, 0), 1);
        assert_eq!(board.count_live_neighbors(1, 0), 2);
        assert_eq!(board.count_live_neighbors(4, 4), 0);
    }

    #[test]
    fn test_birth_on_exactly_three() {
        let mut board = Board::new(5).unwrap();
        board.set(1, 1, Cell::Alive).unwrap();
        board.set(1, 2, Cell::Alive).unwrap();
        board.set(1, 3, Cell::Alive).unwrap();
        board.step();
        // Cell above and below the center were dead with 3 neighbors
        assert_eq!(board.get(0, 2).unwrap(), Cell::Alive);
        assert_eq!(board.get(2, 2).unwrap(), Cell::Alive);
        // Cells with 2 neighbors stay dead
        assert_eq!(board.get(0, 1).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut board = Board::new(5).unwrap();
        board.set(2, 2, Cell::Alive).unwrap();
        board.step();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut board = Board::new(6).unwrap();
        board.insert(&presets::block(), (2, 2)).unwrap();
        let before = board.snapshot();
        board.step();
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let mut board = Board::new(9).unwrap();
        board.insert(&presets::blinker(), (4, 4)).unwrap();
        let start = board.snapshot();

        board.step();
        assert_ne!(board.snapshot(), start);
        board.step();
        assert_eq!(board.snapshot(), start);
    }

    #[test]
    fn test_glider_translates_by_one_one_after_four_steps() {
        let mut board = Board::new(16).unwrap();
        board.insert(&presets::glider(), (5, 5)).unwrap();

        let mut expected = Board::new(16).unwrap();
        expected.insert(&presets::glider(), (6, 6)).unwrap();

        for _ in 0..4 {
            board.step();
        }
        assert_eq!(board.snapshot(), expected.snapshot());
    }

    #[test]
    fn test_insert_centers_odd_pattern() {
        // The glider's center cell (1, 1) is dead and its bottom row is
        // alive; centering at (5, 5) puts that bottom row at row 6.
        let mut board = Board::new(11).unwrap();
        board.insert(&presets::glider(), (5, 5)).unwrap();

        let glider = presets::glider();
        for (r, c, cell) in glider.iter_cells() {
            assert_eq!(board.get(4 + r, 4 + c).unwrap(), cell);
        }
        assert_eq!(board.get(5, 5).unwrap(), glider.get(1, 1).unwrap());
    }

    #[test]
    fn test_insert_out_of_bounds_rejected() {
        let mut board = Board::new(8).unwrap();

        // Fully outside
        assert!(matches!(
            board.insert(&presets::glider(), (20, 20)),
            Err(LifeError::PlacementOutOfBounds { .. })
        ));
        // Partially outside, hanging off the top-left
        assert!(matches!(
            board.insert(&presets::glider(), (0, 0)),
            Err(LifeError::PlacementOutOfBounds { .. })
        ));
        // Nothing was written either way
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_insert_copies_dead_cells_too() {
        let mut board = Board::new(8).unwrap();
        board.set(2, 4, Cell::Alive).unwrap();
        // (2, 4) falls on a dead cell of the blinker's layout, so the
        // insert overwrites the live cell.
        board.insert(&presets::blinker(), (3, 4)).unwrap();
        assert_eq!(board.get(2, 4).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(8).unwrap();
        board.insert(&presets::glider(), (4, 4)).unwrap();
        board.clear();
        assert_eq!(board.population(), 0);
    }
}
