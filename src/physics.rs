use macroquad::math::Vec2;

/// Anything advanced once per frame by the elapsed time in seconds
pub trait Update {
    fn update(&mut self, dt: f32);
}

/// Point-mass kinematics with per-frame force accumulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Physics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl Physics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(x: f32, y: f32) -> Self {
        Self::with_acceleration(x, y, 0.0, 0.0, 0.0, 0.0)
    }

    pub fn with_velocity(x: f32, y: f32, dx: f32, dy: f32) -> Self {
        Self::with_acceleration(x, y, dx, dy, 0.0, 0.0)
    }

    pub fn with_acceleration(x: f32, y: f32, dx: f32, dy: f32, ddx: f32, ddy: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::new(dx, dy),
            acceleration: Vec2::new(ddx, ddy),
        }
    }

    /// Accumulate a force for the next update
    pub fn force(&mut self, x: f32, y: f32) {
        self.acceleration += Vec2::new(x, y);
    }

    /// Stop all motion in place
    pub fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
    }
}

impl Update for Physics {
    /// Semi-implicit Euler step. Accumulated forces are consumed.
    fn update(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.acceleration = Vec2::ZERO;
    }
}
