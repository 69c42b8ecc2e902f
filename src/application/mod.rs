mod frame_limiter;
mod life_state;

pub use frame_limiter::FrameLimiter;
pub use life_state::LifeState;
