use crate::maths::{distance, limit_within_rect, signed_sqrt};
use crate::physics::{Physics, Update};
use macroquad::math::{Rect, Vec2};
use rand::Rng;

pub const MIN_TOON_SIZE: f32 = 3.0;
pub const MAX_TOON_SIZE: f32 = 100.0;
pub const GROWTH_STEP: f32 = 0.5;
pub const APPLE_COUNT: usize = 100;
/// Steering force per held direction key
pub const MOVE_SPEED: f32 = 7500.0;
/// Extra force multiplier (per second) when steering against current motion
pub const BRAKE_BOOST: f32 = 200.0;
/// Apples within this many toon radii drift towards it
pub const ATTRACT_RADII: f32 = 4.0;
const RESPAWN_TRIES: usize = 10;

/// The player's blob
#[derive(Clone, Debug, PartialEq)]
pub struct Toon {
    pub physics: Physics,
    pub size: f32,
}

impl Toon {
    pub fn new(x: f32, y: f32) -> Self {
        Self { physics: Physics::with_position(x, y), size: MIN_TOON_SIZE }
    }

    /// Push the toon; bigger toons respond less
    pub fn steer(&mut self, x: f32, y: f32) {
        self.physics.force(x / self.size * 2.0, y / self.size * 2.0);
    }

    pub fn grow(&mut self) {
        self.size = (self.size + GROWTH_STEP).min(MAX_TOON_SIZE);
    }

    pub fn shrink(&mut self) {
        self.size = (self.size - GROWTH_STEP).max(MIN_TOON_SIZE);
    }

    /// Keep the toon inside `bounds`, killing motion along any axis that hit an edge
    pub fn confine(&mut self, bounds: Rect) {
        let p = &mut self.physics;
        if p.position.x < bounds.left() || p.position.x > bounds.right() {
            p.position.x = p.position.x.clamp(bounds.left(), bounds.right());
            p.velocity.x = 0.0;
            p.acceleration.x = 0.0;
        }
        if p.position.y < bounds.top() || p.position.y > bounds.bottom() {
            p.position.y = p.position.y.clamp(bounds.top(), bounds.bottom());
            p.velocity.y = 0.0;
            p.acceleration.y = 0.0;
        }
    }
}

impl Update for Toon {
    fn update(&mut self, dt: f32) {
        self.physics.update(dt);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Apple {
    pub physics: Physics,
    /// Growers make the toon bigger, the rest make it smaller
    pub grower: bool,
}

impl Apple {
    pub fn new(x: f32, y: f32, grower: bool) -> Self {
        Self { physics: Physics::with_position(x, y), grower }
    }

    pub fn position(&self) -> Vec2 {
        self.physics.position
    }
}

/// Held direction keys for one frame. `up` is +y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Steering {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Steering {
    /// Force for this frame. Pushing against the current motion brakes harder.
    pub fn force(self, velocity: Vec2, dt: f32) -> Vec2 {
        let brake = BRAKE_BOOST * dt * MOVE_SPEED;
        let mut f = Vec2::ZERO;
        if self.up {
            if velocity.y < 0.0 {
                f.y += brake;
            }
            f.y += MOVE_SPEED;
        }
        if self.down {
            if velocity.y > 0.0 {
                f.y -= brake;
            }
            f.y -= MOVE_SPEED;
        }
        if self.left {
            if velocity.x > 0.0 {
                f.x -= brake;
            }
            f.x -= MOVE_SPEED;
        }
        if self.right {
            if velocity.x < 0.0 {
                f.x += brake;
            }
            f.x += MOVE_SPEED;
        }
        f
    }
}

/// The appleseed scene: one toon chasing apples around a bounded field
#[derive(Clone, Debug)]
pub struct Orchard {
    pub toon: Toon,
    pub apples: Vec<Apple>,
    pub bounds: Rect,
    pub score: u32,
}

impl Orchard {
    /// Toon near the origin corner, apples scattered; every fourth apple shrinks
    pub fn new<R: Rng + ?Sized>(bounds: Rect, rng: &mut R) -> Self {
        let apples = (0..APPLE_COUNT)
            .map(|i| {
                let p = random_point(bounds, &mut *rng);
                Apple::new(p.x, p.y, i % 4 != 0)
            })
            .collect();
        Self::with_apples(bounds, Toon::new(bounds.x + 10.0, bounds.y + 10.0), apples)
    }

    pub fn with_apples(bounds: Rect, toon: Toon, apples: Vec<Apple>) -> Self {
        Self { toon, apples, bounds, score: 0 }
    }

    /// Advance one frame
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, steering: Steering, rng: &mut R) {
        let push = steering.force(self.toon.physics.velocity, dt);
        self.toon.steer(dt * push.x, dt * push.y);
        self.toon.update(dt);
        self.toon.confine(self.bounds);

        let bounds = self.bounds;
        let toon = &mut self.toon;
        for apple in &mut self.apples {
            let gap = distance(apple.position(), toon.physics.position);
            if gap <= toon.size {
                self.score += (3.0 * toon.size) as u32;
                if apple.grower {
                    toon.grow();
                } else {
                    toon.shrink();
                }
                if let Some(spot) = (0..RESPAWN_TRIES)
                    .map(|_| random_point(bounds, &mut *rng))
                    .find(|&spot| distance(toon.physics.position, spot) > toon.size)
                {
                    apple.physics.position = spot;
                }
                apple.physics.halt();
            } else if gap <= ATTRACT_RADII * toon.size {
                let pull = (toon.physics.position - apple.position()) * 5.0 * dt;
                apple.physics.force(signed_sqrt(pull.x), signed_sqrt(pull.y));
                apple.physics.update(dt);
                apple.physics.position = limit_within_rect(apple.physics.position, bounds);
            }
        }
    }
}

fn random_point<R: Rng + ?Sized>(bounds: Rect, rng: &mut R) -> Vec2 {
    Vec2::new(
        bounds.x + rng.random::<f32>() * bounds.w,
        bounds.y + rng.random::<f32>() * bounds.h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn field() -> Rect {
        Rect::new(0.0, 0.0, 512.0, 384.0)
    }

    #[test]
    fn test_size_limits() {
        let mut toon = Toon::new(0.0, 0.0);
        toon.shrink();
        assert_eq!(toon.size, MIN_TOON_SIZE);
        toon.size = 99.8;
        toon.grow();
        assert_eq!(toon.size, MAX_TOON_SIZE);
    }

    #[test]
    fn test_confine_zeroes_blocked_axis() {
        let mut toon = Toon::new(-5.0, 50.0);
        toon.physics.velocity = Vec2::new(-3.0, 2.0);
        toon.confine(field());
        assert_eq!(toon.physics.position, Vec2::new(0.0, 50.0));
        assert_eq!(toon.physics.velocity, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_braking_against_motion() {
        let held = Steering { right: true, ..Default::default() };
        let coasting = held.force(Vec2::new(1.0, 0.0), 0.1);
        let braking = held.force(Vec2::new(-1.0, 0.0), 0.1);
        assert_eq!(coasting, Vec2::new(MOVE_SPEED, 0.0));
        assert!(braking.x > coasting.x);
    }

    #[test]
    fn test_new_orchard_layout() {
        let mut rng = StdRng::seed_from_u64(4);
        let orchard = Orchard::new(field(), &mut rng);
        assert_eq!(orchard.apples.len(), APPLE_COUNT);
        assert_eq!(orchard.apples.iter().filter(|a| !a.grower).count(), APPLE_COUNT / 4);
        assert_eq!(orchard.toon.physics.position, Vec2::new(10.0, 10.0));
        assert_eq!(orchard.toon.size, MIN_TOON_SIZE);
    }

    #[test]
    fn test_eating_a_grower() {
        let mut rng = StdRng::seed_from_u64(4);
        let apples = vec![Apple::new(10.0, 10.0, true)];
        let mut orchard = Orchard::with_apples(field(), Toon::new(10.0, 10.0), apples);
        orchard.update(0.0, Steering::default(), &mut rng);
        assert_eq!(orchard.score, 9);
        assert_eq!(orchard.toon.size, MIN_TOON_SIZE + GROWTH_STEP);
        let gap = distance(orchard.apples[0].position(), orchard.toon.physics.position);
        assert!(gap > orchard.toon.size);
    }

    #[test]
    fn test_nearby_apple_drifts_closer() {
        let mut rng = StdRng::seed_from_u64(4);
        let apples = vec![Apple::new(20.0, 10.0, true)];
        let mut orchard = Orchard::with_apples(field(), Toon::new(10.0, 10.0), apples);
        orchard.update(0.1, Steering::default(), &mut rng);
        assert!(orchard.apples[0].position().x < 20.0);
        assert_eq!(orchard.score, 0);
    }

    #[test]
    fn test_far_apple_stays_put() {
        let mut rng = StdRng::seed_from_u64(4);
        let apples = vec![Apple::new(200.0, 200.0, false)];
        let mut orchard = Orchard::with_apples(field(), Toon::new(10.0, 10.0), apples);
        orchard.update(0.1, Steering::default(), &mut rng);
        assert_eq!(orchard.apples[0].position(), Vec2::new(200.0, 200.0));
    }
}
