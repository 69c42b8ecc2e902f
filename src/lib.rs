// Domain layer - Life grid, patterns, Lights Out board
pub mod domain;
pub mod error;

// Toy kinematics and the scenes built on them
pub mod maths;
pub mod physics;
pub mod toys;

// Application layer - pacing and coordination
pub mod application;
pub mod config;
pub mod telemetry;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use error::GridError;
pub use application::{FrameLimiter, LifeState};
pub use rendering::GridRenderer;
