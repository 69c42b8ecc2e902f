mod cell;
mod grid;
mod patterns;
pub mod lights_out;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use lights_out::{Board, Star};
