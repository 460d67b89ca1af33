use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the main loop at `simulation.fps`. The loop calls [`FrameLimiter::delay`]
/// once per frame, after stepping the grid and before draining input, so the
/// simulation advances at most one generation per target frametime.
pub struct FrameLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FrameLimiter {
    /// `max_fps` comes from a validated config, see `config::MIN_FPS`
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1.0 / max_fps),
            frame_timer: Instant::now(),
            frametime_smoothed: 1.0 / max_fps,
        }
    }

    /// Smoothed measured rate, logged at trace level by the loop
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Block until the current frame has lasted at least the target frametime.
    /// A frame that already overran returns immediately.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_target_rate() {
        let limiter = FrameLimiter::new(10.0);
        assert!((limiter.fps() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_delay_waits_out_the_frame() {
        let mut limiter = FrameLimiter::new(50.0);
        let start = Instant::now();
        limiter.delay();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
