use thiserror::Error;

/// Errors raised while building a board. Once built, every operation is total.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive (got {rows} rows x {columns} columns)")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("grid of {rows} rows x {columns} columns has too many cells to store")]
    TooManyCells { rows: usize, columns: usize },
    #[error("live probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
}
