use super::GridRenderer;
use crate::domain::Grid;
use std::fmt::Write;

pub const ALIVE_GLYPH: char = '#';
pub const DEAD_GLYPH: char = '.';

/// Renders the grid as rows of glyphs, top row first.
/// Used by the headless mode and handy in tests.
#[derive(Debug, Default)]
pub struct TextRenderer {
    frame: String,
    frames_drawn: u64,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub const fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl GridRenderer for TextRenderer {
    fn draw_grid(&mut self, grid: &Grid) {
        self.frame.clear();
        for (x, _, cell) in grid.iter_cells() {
            self.frame.push(if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH });
            if x + 1 == grid.columns() {
                self.frame.push('\n');
            }
        }
        let _ = write!(self.frame, "generation {} | live {}", grid.generation(), grid.live_count());
        self.frames_drawn += 1;
    }
}
