use super::grid::cell_count;
use crate::error::GridError;
use crate::physics::Update;
use macroquad::color::Color;
use macroquad::math::Vec2;

/// Number of distinct square colours on the board palette
pub const PALETTE_SIZE: usize = 3;

/// Lights Out board: a square of lamps where pressing one flips it and its
/// orthogonal neighbors. Edges do not wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    side: usize,
    lit: Vec<bool>,
    palette: Vec<usize>,
    moves: u32,
}

impl Board {
    /// Create a board with every square lit
    pub fn new(side: usize) -> Result<Self, GridError> {
        let squares = cell_count(side, side)?;
        Ok(Self {
            side,
            lit: vec![true; squares],
            palette: (0..squares).map(|i| palette_index(side, i)).collect(),
            moves: 0,
        })
    }

    pub const fn side(&self) -> usize {
        self.side
    }

    pub const fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side && self.lit[x + y * self.side]
    }

    /// Palette slot for the square at `(x, y)`
    pub fn palette_at(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.side && y < self.side).then(|| self.palette[x + y * self.side])
    }

    pub fn is_solved(&self) -> bool {
        self.lit.iter().all(|lit| !lit)
    }

    /// Press the square at `(x, y)`.
    ///
    /// Returns `false` without touching the board when the square is out of
    /// range or the puzzle is already solved.
    pub fn press(&mut self, x: usize, y: usize) -> bool {
        if x >= self.side || y >= self.side || self.is_solved() {
            return false;
        }
        self.moves += 1;
        self.flip(x, y);
        if x > 0 {
            self.flip(x - 1, y);
        }
        if x + 1 < self.side {
            self.flip(x + 1, y);
        }
        if y > 0 {
            self.flip(x, y - 1);
        }
        if y + 1 < self.side {
            self.flip(x, y + 1);
        }
        true
    }

    fn flip(&mut self, x: usize, y: usize) {
        let idx = x + y * self.side;
        self.lit[idx] = !self.lit[idx];
    }

    /// Relight every square and reset the move counter
    pub fn reset(&mut self) {
        self.lit.iter_mut().for_each(|lit| *lit = true);
        self.moves = 0;
    }

    /// Map a position in board pixels to the square under it
    pub fn square_at(&self, px: f32, py: f32, square_w: f32, square_h: f32) -> Option<(usize, usize)> {
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let (x, y) = ((px / square_w) as usize, (py / square_h) as usize);
        (x < self.side && y < self.side).then_some((x, y))
    }

    /// Iterate squares as `(x, y, lit, palette)`
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize, bool, usize)> + '_ {
        self.lit
            .iter()
            .zip(&self.palette)
            .enumerate()
            .map(|(i, (&lit, &palette))| (i % self.side, i / self.side, lit, palette))
    }
}

pub const STAR_POINTS: usize = 5;
pub const STAR_DEGREES_PER_SECOND: f32 = 96.0;
pub const STAR_INNER_RADIUS_FACTOR: f32 = 0.5;
/// Full colour cycles per second
pub const STAR_COLOR_SPEED: f32 = 0.5;

/// Spinning star shown once the board is solved
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub rotation_deg: f32,
    pub color: Color,
    color_phase_deg: f32,
}

impl Default for Star {
    fn default() -> Self {
        Self {
            rotation_deg: 0.0,
            color: Color::new(1.0, 1.0, 0.0, 1.0),
            color_phase_deg: 0.0,
        }
    }
}

impl Star {
    /// Triangles making up the star around `center`, rotated by the current angle.
    /// Each point contributes its tip and the wedge back to the centre.
    pub fn triangles(&self, center: Vec2, radius: f32) -> Vec<[Vec2; 3]> {
        let tip_step = 360.0 / STAR_POINTS as f32;
        let half_step = tip_step / 2.0;
        let inner = radius * STAR_INNER_RADIUS_FACTOR;
        let at = |deg: f32, r: f32| {
            let rad = (deg + self.rotation_deg).to_radians();
            center + Vec2::new(rad.cos(), rad.sin()) * r
        };

        (0..STAR_POINTS)
            .flat_map(|point| {
                let deg = point as f32 * tip_step + 90.0;
                let left = at(deg + half_step, inner);
                let tip = at(deg, radius);
                let right = at(deg - half_step, inner);
                [[left, tip, right], [left, center, right]]
            })
            .collect()
    }
}

impl Update for Star {
    fn update(&mut self, dt: f32) {
        self.rotation_deg += STAR_DEGREES_PER_SECOND * dt;
        self.color_phase_deg += STAR_COLOR_SPEED * 360.0 * dt;
        self.color.g = 0.5 + 0.25 * (1.0 + self.color_phase_deg.to_radians().cos());
    }
}

// Odd sides stripe with two colours; even sides need three so columns differ.
fn palette_index(side: usize, index: usize) -> usize {
    let modulus = if side % 2 == 0 { PALETTE_SIZE } else { 2 };
    index % modulus
}
