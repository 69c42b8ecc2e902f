use crate::physics::{Physics, Update};
use macroquad::color::Color;
use rand::Rng;
use std::f32::consts::TAU;

/// Downward pull applied every frame (world space, y up)
pub const GRAVITY: f32 = -250.0;
/// Fraction of alpha lost per second
pub const FADE_RATE: f32 = 0.5;
/// Twinkle phases per second
pub const TWINKLE_RATE: f32 = 12.0;
/// Particles smaller than this are not drawn
pub const MIN_VISIBLE_SIZE: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Twinkle {
    life: f32,
    relight: f32,
    twinkled: bool,
}

impl Twinkle {
    fn update(&mut self, dt: f32) {
        self.life -= TWINKLE_RATE * dt;
        if !self.twinkled && self.life <= -TWINKLE_RATE {
            self.life = self.relight;
            self.twinkled = true;
        }
    }

    // Burned out, or in the dark half of a blink.
    fn hidden(&self) -> bool {
        if self.twinkled && self.life <= 0.0 {
            return true;
        }
        self.life > 0.0 && (self.life as u32) % 2 == 0
    }
}

/// One spark of an explosion
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub physics: Physics,
    pub color: Color,
    pub size: f32,
    shrinkage: f32,
    twinkle: Option<Twinkle>,
}

impl Particle {
    pub fn new(physics: Physics, color: Color, size: f32, shrinkage: f32) -> Self {
        Self { physics, color, size, shrinkage, twinkle: None }
    }

    /// Make the particle blink once its first second has passed.
    /// `relight` is the number of blink phases it gets.
    pub fn with_twinkle(mut self, relight: f32) -> Self {
        self.twinkle = Some(Twinkle { life: 0.0, relight, twinkled: false });
        self
    }

    pub fn is_twinkling(&self) -> bool {
        self.twinkle.is_some()
    }

    pub fn is_visible(&self) -> bool {
        if self.size < MIN_VISIBLE_SIZE {
            return false;
        }
        !self.twinkle.is_some_and(|t| t.hidden())
    }

    /// Draw radius for the current size
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    fn random<R: Rng + ?Sized>(rng: &mut R, twinkle: bool) -> Self {
        let explosive = 600.0 + 200.0 * rng.random::<f32>();
        let force = -(explosive / 2.0) + explosive * rng.random::<f32>();
        let angle = TAU * rng.random::<f32>();
        let physics = Physics::with_velocity(0.0, 0.0, angle.cos() * force, angle.sin() * force);
        let color = fire_color(rng);
        let size = 2.0 + 5.0 * rng.random::<f32>();
        let shrinkage = 0.7 + 0.1 * rng.random::<f32>();

        let particle = Self::new(physics, color, size, shrinkage);
        if twinkle {
            particle.with_twinkle(20.0 + 15.0 * rng.random::<f32>())
        } else {
            particle
        }
    }
}

impl Update for Particle {
    fn update(&mut self, dt: f32) {
        self.physics.force(0.0, GRAVITY);
        self.physics.update(dt);

        self.color.a *= (1.0 - dt * FADE_RATE).max(0.0);
        self.size *= 1.0 - dt * self.shrinkage;

        if let Some(twinkle) = self.twinkle.as_mut() {
            twinkle.update(dt);
        }
    }
}

/// Reddish-orange colour normalised to unit length
pub fn fire_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let r = 0.30 + 0.70 * rng.random::<f32>();
    let g = 0.10 + 0.35 * rng.random::<f32>();
    let b = 0.10 * rng.random::<f32>();
    let magnitude = (r * r + g * g + b * b).sqrt();
    Color::new(r / magnitude, g / magnitude, b / magnitude, 1.0)
}

/// A burst of particles sharing one origin
#[derive(Clone, Debug, Default)]
pub struct Explosion {
    pub particles: Vec<Particle>,
}

impl Explosion {
    /// Between 100 and 2099 particles; roughly three bursts in four twinkle.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let twinkle = rng.random_range(0..100) > 25;
        let count = 100 + rng.random_range(0..2000);
        let particles = (0..count).map(|_| Particle::random(&mut *rng, twinkle)).collect();
        Self { particles }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_visible())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Update for Explosion {
    fn update(&mut self, dt: f32) {
        self.particles.iter_mut().for_each(|p| p.update(dt));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn spark() -> Particle {
        Particle::new(Physics::new(), Color::new(1.0, 0.5, 0.0, 1.0), 4.0, 0.75)
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut p = spark();
        p.update(0.1);
        assert!(p.physics.velocity.y < 0.0);
        assert_eq!(p.physics.velocity.x, 0.0);
    }

    #[test]
    fn test_shrinks_and_fades() {
        let mut p = spark();
        p.update(0.5);
        assert!((p.size - 4.0 * (1.0 - 0.5 * 0.75)).abs() < 1e-5);
        assert!((p.color.a - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_tiny_particle_is_hidden() {
        let mut p = spark();
        p.size = 0.05;
        assert!(!p.is_visible());
    }

    #[test]
    fn test_twinkle_lifecycle() {
        let mut p = spark().with_twinkle(20.5);
        // Counting down from zero: visible
        p.update(0.5);
        assert!(p.is_visible());
        // Past -12: relit with 20.5 phases, floor(20.5) is even so dark
        p.update(0.6);
        assert!(!p.is_visible());
        // 20.5 - 12 * 0.1 = 19.3, odd phase: lit
        p.size = 4.0;
        p.update(0.1);
        p.size = 4.0;
        assert!(p.is_visible());
        // Burn out: twinkled and life below zero
        p.update(2.0);
        p.size = 4.0;
        assert!(!p.is_visible());
    }

    #[test]
    fn test_fire_color_is_unit_length() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let c = fire_color(&mut rng);
            let len = (c.r * c.r + c.g * c.g + c.b * c.b).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
            assert!(c.r > c.b);
        }
    }

    #[test]
    fn test_explosion_size_and_shared_twinkle() {
        let mut rng = StdRng::seed_from_u64(1);
        let burst = Explosion::new(&mut rng);
        assert!((100..2100).contains(&burst.len()));
        let first = burst.particles[0].is_twinkling();
        assert!(burst.particles.iter().all(|p| p.is_twinkling() == first));
    }
}
