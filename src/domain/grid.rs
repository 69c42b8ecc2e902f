use super::Cell;
use crate::error::GridError;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Grid is the toroidal Life lattice.
///
/// Cells live in a flat buffer addressed by `x + y * columns`. A second
/// buffer of the same size stages the next generation so that a step only
/// ever reads the previous one.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
    generation: u64,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        let len = cell_count(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
            generation: 0,
        })
    }

    /// Seed a grid from a fixed PRNG seed so runs are reproducible
    pub fn seeded(rows: usize, columns: usize, probability: f64, seed: u64) -> Result<Self, GridError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(rows, columns, probability, &mut rng)
    }

    /// Seed a grid from the caller's PRNG.
    ///
    /// Each cell is alive with the given probability. Exactly one draw is
    /// taken per cell, in row-major (flat index) order.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }
        let mut grid = Self::new(rows, columns)?;
        grid.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random::<f64>() < probability));
        Ok(grid)
    }

    /// Create a grid with only the listed cells alive (coordinates wrap)
    pub fn with_live_cells(rows: usize, columns: usize, live: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, columns)?;
        for &(x, y) in live {
            grid.set(x % columns, y % rows, Cell::Alive);
        }
        Ok(grid)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total cell count, always `rows * columns`
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of generations stepped since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.columns
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.columns && y < self.rows).then(|| self.cells[self.index(x, y)])
    }

    /// Set cell at position, ignoring out-of-range coordinates
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.columns && y < self.rows {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.get(x, y) {
            self.set(x, y, cell.toggle());
        }
    }

    /// Coordinates of the 8 neighbors of `(x, y)`, wrapped toroidally.
    /// Order: left, right, up, down, then the four diagonals.
    pub fn neighbors(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        neighbor_coords(self.columns, self.rows, x, y)
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        count_live_neighbors(&self.cells, self.columns, self.rows, x, y)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Advance every cell by one generation.
    ///
    /// The read pass fills `next` from `cells` only; the commit swaps the
    /// buffers once every next state is known.
    pub fn step(&mut self) {
        let Self { rows, columns, cells, next, .. } = self;
        let (rows, columns) = (*rows, *columns);
        let cells: &[Cell] = cells;
        next.iter_mut().enumerate().for_each(|(idx, slot)| {
            let (x, y) = (idx % columns, idx / columns);
            *slot = cells[idx].evolve(count_live_neighbors(cells, columns, rows, x, y));
        });
        self.commit();
    }

    /// Same as [`Grid::step`], with the read pass split by rows across the
    /// rayon pool. Much faster for grids > 100x100
    pub fn step_parallel(&mut self) {
        let Self { rows, columns, cells, next, .. } = self;
        let (rows, columns) = (*rows, *columns);
        let cells: &[Cell] = cells;
        next.par_chunks_mut(columns).enumerate().for_each(|(y, row)| {
            row.iter_mut().enumerate().for_each(|(x, slot)| {
                let current = cells[x + y * columns];
                *slot = current.evolve(count_live_neighbors(cells, columns, rows, x, y));
            });
        });
        self.commit();
    }

    fn commit(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.columns, idx / self.columns, cell))
    }

    /// Positions of live cells only
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

// Equality is over the visible state; `next` is scratch left over from the last step.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.generation == other.generation
            && self.cells == other.cells
    }
}

/// Number of cells in a `rows x columns` lattice, rejecting empty or
/// unaddressable sizes
pub(crate) fn cell_count(rows: usize, columns: usize) -> Result<usize, GridError> {
    if rows == 0 || columns == 0 {
        return Err(GridError::InvalidDimensions { rows, columns });
    }
    rows.checked_mul(columns)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(GridError::TooManyCells { rows, columns })
}

fn neighbor_coords(columns: usize, rows: usize, x: usize, y: usize) -> [(usize, usize); 8] {
    let left = (x + columns - 1) % columns;
    let right = (x + 1) % columns;
    let up = (y + 1) % rows;
    let down = (y + rows - 1) % rows;
    [
        (left, y),
        (right, y),
        (x, up),
        (x, down),
        (left, up),
        (right, up),
        (left, down),
        (right, down),
    ]
}

fn count_live_neighbors(cells: &[Cell], columns: usize, rows: usize, x: usize, y: usize) -> u8 {
    neighbor_coords(columns, rows, x, y)
        .iter()
        .filter(|&&(nx, ny)| cells[nx + ny * columns].is_alive())
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions { rows: 0, columns: 5 }
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert_eq!(
            Grid::new(usize::MAX, 2).unwrap_err(),
            GridError::TooManyCells { rows: usize::MAX, columns: 2 }
        );
        assert!(Grid::seeded(usize::MAX / 2, 3, 0.5, 1).is_err());
    }

    #[test]
    fn test_equality_ignores_staging_buffer() {
        let mut quiet = Grid::new(3, 3).unwrap();
        quiet.step();
        let mut lonely = Grid::new(3, 3).unwrap();
        lonely.toggle(1, 1);
        lonely.step();
        assert_eq!(lonely.live_count(), 0);
        assert_eq!(quiet, lonely);

        let mut older = Grid::new(3, 3).unwrap();
        older.step();
        older.step();
        assert_ne!(quiet, older);
    }

    #[test]
    fn test_rejects_bad_probability() {
        assert!(matches!(
            Grid::seeded(3, 3, 1.5, 1),
            Err(GridError::InvalidProbability(p)) if p == 1.5
        ));
        assert!(Grid::seeded(3, 3, -0.1, 1).is_err());
        assert!(Grid::seeded(3, 3, f64::NAN, 1).is_err());
    }

    #[test]
    fn test_flat_layout_is_x_plus_y_times_columns() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(2, 1, Cell::Alive);
        assert_eq!(grid.cells[2 + 3], Cell::Alive);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_neighbors_wrap_on_3x3() {
        let grid = Grid::new(3, 3).unwrap();
        let n = grid.neighbors(0, 0);
        assert!(n.contains(&(2, 2)));
        assert!(n.contains(&(2, 0)));
        assert!(n.contains(&(0, 2)));
        assert!(!n.contains(&(0, 0)));
    }

    #[test]
    fn test_neighbors_on_non_square_grid() {
        let grid = Grid::new(4, 6).unwrap();
        let n = grid.neighbors(5, 3);
        assert_eq!(n[0], (4, 3));
        assert_eq!(n[1], (0, 3));
        assert_eq!(n[2], (5, 0));
        assert_eq!(n[3], (5, 2));
    }

    #[test]
    fn test_live_neighbors_across_corner() {
        let grid = Grid::with_live_cells(5, 5, &[(4, 4), (4, 0), (0, 4)]).unwrap();
        assert_eq!(grid.live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_step_reads_previous_generation_only() {
        // Blinker: an in-place update would corrupt the vertical phase
        let mut grid = Grid::with_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();
        grid.step();
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(2, 1), (2, 2), (2, 3)]);
        grid.step();
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = Grid::seeded(40, 30, 0.3, 7).unwrap();
        let mut parallel = serial.clone();
        for _ in 0..10 {
            serial.step();
            parallel.step_parallel();
        }
        assert_eq!(serial.cells, parallel.cells);
        assert_eq!(serial.generation(), parallel.generation());
    }

    #[test]
    fn test_seeding_is_reproducible() {
        let a = Grid::seeded(20, 20, 0.15, 100).unwrap();
        let b = Grid::seeded(20, 20, 0.15, 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clear_and_toggle() {
        let mut grid = Grid::seeded(4, 4, 1.0, 3).unwrap();
        grid.toggle(1, 1);
        assert_eq!(grid.get(1, 1), Some(Cell::Dead));
        grid.clear();
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.len(), 16);
    }
}
