use std::time::{Duration, Instant};

/// Caps a render loop at a maximum frame rate by sleeping off the rest of
/// each frame's budget.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    budget: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(max_fps: u32) -> Self {
        Self {
            budget: budget_for(max_fps),
            frame_start: Instant::now(),
        }
    }

    /// Mark the beginning of a frame
    pub fn start_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time left in the current frame's budget (zero once overrun)
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.frame_start.elapsed())
    }

    /// Sleep until the frame budget is spent. Returns immediately when the
    /// frame already overran.
    pub fn wait_for_next_frame(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }

    /// Change the cap; 0 is treated as 1 fps
    pub fn set_limit(&mut self, max_fps: u32) {
        self.budget = budget_for(max_fps);
    }

    pub const fn frame_budget(&self) -> Duration {
        self.budget
    }

    /// Rate implied by the time spent in the current frame so far
    pub fn current_fps(&self) -> f32 {
        let elapsed = self.frame_start.elapsed().as_secs_f32();
        if elapsed > 0.0 { 1.0 / elapsed } else { f32::INFINITY }
    }
}

fn budget_for(max_fps: u32) -> Duration {
    Duration::from_secs(1) / max_fps.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget() {
        assert_eq!(FrameLimiter::new(50).frame_budget(), Duration::from_millis(20));
        assert_eq!(FrameLimiter::new(0).frame_budget(), Duration::from_secs(1));
    }

    #[test]
    fn test_set_limit() {
        let mut limiter = FrameLimiter::new(60);
        limiter.set_limit(10);
        assert_eq!(limiter.frame_budget(), Duration::from_millis(100));
    }

    #[test]
    fn test_waits_out_the_budget() {
        let mut limiter = FrameLimiter::new(100);
        limiter.start_frame();
        let start = Instant::now();
        limiter.wait_for_next_frame();
        assert!(start.elapsed() >= Duration::from_millis(5));
        assert!(limiter.remaining().is_zero());
    }

    #[test]
    fn test_overrun_does_not_block() {
        let mut limiter = FrameLimiter::new(1000);
        limiter.start_frame();
        std::thread::sleep(Duration::from_millis(5));
        assert!(limiter.remaining().is_zero());
        let start = Instant::now();
        limiter.wait_for_next_frame();
        assert!(start.elapsed() < Duration::from_millis(5));
        assert!(limiter.current_fps() < 1000.0);
    }
}
