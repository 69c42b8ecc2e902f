/// Cell is one site of the Life lattice.
/// Its coordinates are implied by its slot in the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Flip between alive and dead (used for painting)
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under Conway's rules (B3/S23):
    /// 1. Live cell with fewer than 2 or more than 3 neighbors dies
    /// 2. Live cell with 2-3 neighbors survives
    /// 3. Dead cell with exactly 3 neighbors becomes alive
    /// 4. Any other dead cell stays dead
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
