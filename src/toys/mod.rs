//! Physics toy scenes: a firework burst and the appleseed chase.

pub mod appleseed;
pub mod particle;

pub use appleseed::{Apple, Orchard, Steering, Toon};
pub use particle::{Explosion, Particle};
