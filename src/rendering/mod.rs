mod text;

pub use text::TextRenderer;

use crate::domain::{Board, Grid, Star};
use crate::toys::{Explosion, Orchard};
use macroquad::prelude::*;

/// Anything that can show the grid once per frame, after the step completes
pub trait GridRenderer {
    fn draw_grid(&mut self, grid: &Grid);
}

/// Colour of a live cell at normalised position `(u, v)`, shifted over time `t`
pub fn shifted_color(u: f32, v: f32, t: f32) -> Color {
    let (sx, sy, sz) = (t.sin(), t.cos(), t.sin() * t.cos());
    Color::new(
        (u * 2.0) * (0.5 + sx * 0.5),
        (v * 2.0) * (0.5 + sy * 0.5),
        (u + v) * (0.5 + sz * 0.5),
        1.0,
    )
}

/// Draws live cells as rectangles stretched over the whole window
#[derive(Debug, Default)]
pub struct MacroquadRenderer {
    pub color_shift: bool,
}

impl MacroquadRenderer {
    pub fn new(color_shift: bool) -> Self {
        Self { color_shift }
    }
}

impl GridRenderer for MacroquadRenderer {
    fn draw_grid(&mut self, grid: &Grid) {
        let cell_w = screen_width() / grid.columns() as f32;
        let cell_h = screen_height() / grid.rows() as f32;
        let t = get_time() as f32;

        for (x, y) in grid.live_cells() {
            let color = if self.color_shift {
                shifted_color(
                    x as f32 / grid.columns() as f32,
                    y as f32 / grid.rows() as f32,
                    t,
                )
            } else {
                WHITE
            };
            draw_rectangle(x as f32 * cell_w, y as f32 * cell_h, cell_w, cell_h, color);
        }
    }
}

const SQUARE_COLORS: [Color; 3] = [
    Color::new(1.0, 0.1, 0.1, 1.0),
    Color::new(0.3, 0.3, 1.0, 1.0),
    Color::new(0.4, 0.5, 0.2, 1.0),
];

/// Draw the lit squares of a Lights Out board filling the window
pub fn draw_board(board: &Board) {
    let (w, h) = square_size(board);
    for (x, y, lit, palette) in board.squares() {
        if lit {
            let color = SQUARE_COLORS[palette % SQUARE_COLORS.len()];
            draw_rectangle(x as f32 * w, y as f32 * h, w, h, color);
        }
    }
}

/// Size in screen pixels of one board square
pub fn square_size(board: &Board) -> (f32, f32) {
    let side = board.side() as f32;
    (screen_width() / side, screen_height() / side)
}

pub fn draw_star(star: &Star) {
    let center = vec2(screen_width() / 2.0, screen_height() / 2.0);
    let radius = screen_width().min(screen_height()) / 2.0;
    for [a, b, c] in star.triangles(center, radius) {
        draw_triangle(a, b, c, star.color);
    }
}

/// Draw visible particles, with the burst origin at the window centre (world y up)
pub fn draw_explosion(explosion: &Explosion, zoom: f32) {
    let (cx, cy) = (screen_width() / 2.0, screen_height() / 2.0);
    for particle in explosion.visible() {
        let p = particle.physics.position;
        draw_circle(cx + p.x * zoom, cy - p.y * zoom, particle.radius() * zoom, particle.color);
    }
}

/// Draw the orchard scaled to fit the window (world y up)
pub fn draw_orchard(orchard: &Orchard) {
    let bounds = orchard.bounds;
    let scale = (screen_width() / bounds.w).min(screen_height() / bounds.h);
    let to_screen = |p: Vec2| vec2((p.x - bounds.x) * scale, (bounds.bottom() - p.y) * scale);

    for apple in &orchard.apples {
        let s = to_screen(apple.position());
        draw_circle(s.x, s.y, 3.0 * scale, if apple.grower { RED } else { BLUE });
    }
    let s = to_screen(orchard.toon.physics.position);
    draw_circle(s.x, s.y, orchard.toon.size * scale, YELLOW);
}

/// Stack HUD lines in the top-left corner
pub fn draw_hud(lines: &[String]) {
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 20.0 + i as f32 * 18.0, 18.0, GRAY);
    }
}
