use crate::config::{DEFAULT_GENERATIONS_PER_SECOND, LifeConfig};
use crate::domain::{Grid, Pattern};
use crate::error::GridError;

pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 60.0;

/// LifeState orchestrates the simulation.
/// This is the application layer that paces domain steps against frame time.
pub struct LifeState {
    pub grid: Grid,
    pub is_running: bool,
    pub update_timer: f32,
    pub generations_per_second: f32,
    pub parallel: bool,
    pub last_step_time_ms: f32,
    probability: f64,
}

impl LifeState {
    /// Seed a fresh grid from the config
    pub fn new(config: &LifeConfig) -> Result<Self, GridError> {
        let grid = Grid::seeded(config.rows, config.columns, config.probability, config.seed)?;
        tracing::info!(
            rows = config.rows,
            columns = config.columns,
            probability = config.probability,
            seed = config.seed,
            live = grid.live_count(),
            "seeded grid"
        );
        Ok(Self {
            grid,
            is_running: true,
            update_timer: 0.0,
            generations_per_second: bounded_speed(config.generations_per_second),
            parallel: config.parallel,
            last_step_time_ms: 0.0,
            probability: config.probability,
        })
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Replace the grid with a new random one of the same size
    pub fn reseed(mut self, seed: u64) -> Self {
        match Grid::seeded(self.grid.rows(), self.grid.columns(), self.probability, seed) {
            Ok(grid) => {
                tracing::info!(seed, live = grid.live_count(), "reseeded grid");
                self.grid = grid;
                self.update_timer = 0.0;
            }
            Err(e) => tracing::warn!(error = %e, seed, "reseed failed, keeping current grid"),
        }
        self
    }

    /// Kill every cell; the generation count keeps going
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.generations_per_second = (self.generations_per_second + delta).clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Stamp a pattern centred on `(x, y)`
    pub fn stamp(mut self, pattern: &Pattern, x: usize, y: usize) -> Self {
        pattern.place_centered(&mut self.grid, x, y);
        tracing::info!(pattern = pattern.name, x, y, "stamped pattern");
        self
    }

    /// Step the grid once, serial or parallel as configured
    pub fn step(&mut self) {
        let start = std::time::Instant::now();
        if self.parallel {
            self.grid.step_parallel();
        } else {
            self.grid.step();
        }
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        tracing::trace!(
            generation = self.grid.generation(),
            step_ms = self.last_step_time_ms,
            "stepped"
        );
    }

    /// Update simulation by one frame.
    /// At most one generation is stepped per frame.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.generations_per_second;

        if self.update_timer >= update_interval {
            self.step();
            self.update_timer = 0.0;
        }

        self
    }
}

// NaN would survive `clamp` and stall `tick` forever.
fn bounded_speed(generations_per_second: f32) -> f32 {
    if generations_per_second.is_nan() {
        tracing::warn!("generation rate is NaN, using the default");
        return DEFAULT_GENERATIONS_PER_SECOND;
    }
    generations_per_second.clamp(MIN_SPEED, MAX_SPEED)
}
