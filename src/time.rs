//! Frame pacing for the animation.
//!
//! The animation does not run at the display refresh rate. Instead each frame
//! is followed by a fixed pause, so the next frame is due one interval after
//! the previous one was presented. [`FrameClock`] tracks that deadline and
//! measures the frame rate actually achieved.
//!
//! All methods take the current [`Instant`] explicitly, which keeps the clock
//! deterministic under test.
//!
//! # Example
//!
//! ```ignore
//! use spintop::time::FrameClock;
//! use std::time::{Duration, Instant};
//!
//! let mut clock = FrameClock::new(Duration::from_millis(50), Instant::now());
//!
//! // In the event loop:
//! if clock.is_due(Instant::now()) {
//!     // ... draw ...
//!     clock.tick(Instant::now());
//! }
//! ```

use std::time::{Duration, Instant};

/// Pause between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Schedules frames a fixed interval apart and measures the achieved rate.
#[derive(Debug)]
pub struct FrameClock {
    /// Pause after each frame.
    interval: Duration,
    /// When the next frame should be drawn.
    next_frame: Instant,
    /// Frames ticked since creation.
    frame_count: u64,
    /// Measured frames per second (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameClock {
    /// Create a clock whose first frame is due at `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_secs(1),
        }
    }

    /// Whether the next frame is due.
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// When the next frame is due.
    #[inline]
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Pause between frames.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Frames ticked so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Measured frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Record a presented frame at `now` and schedule the next one.
    ///
    /// Returns the new frame rate whenever it is recalculated.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frame_count += 1;
        self.next_frame = now + self.interval;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            return Some(self.fps);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_due_immediately() {
        let start = Instant::now();
        let clock = FrameClock::new(FRAME_INTERVAL, start);
        assert!(clock.is_due(start));
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_tick_schedules_after_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::new(FRAME_INTERVAL, start);

        let presented = start + Duration::from_millis(7);
        clock.tick(presented);

        assert_eq!(clock.frame(), 1);
        assert_eq!(clock.next_frame(), presented + FRAME_INTERVAL);
        assert!(!clock.is_due(presented + Duration::from_millis(49)));
        assert!(clock.is_due(presented + Duration::from_millis(50)));
    }

    #[test]
    fn test_fps_measurement() {
        let start = Instant::now();
        let mut clock = FrameClock::new(FRAME_INTERVAL, start);

        let mut reported = None;
        for i in 1..=20u64 {
            reported = clock.tick(start + FRAME_INTERVAL * i as u32).or(reported);
        }

        // 20 frames over exactly one second.
        let fps = reported.expect("fps should be reported after one second");
        assert!((fps - 20.0).abs() < 1e-3);
        assert_eq!(clock.fps(), fps);
    }

    #[test]
    fn test_tick_before_start_does_not_panic() {
        let start = Instant::now() + Duration::from_secs(5);
        let mut clock = FrameClock::new(FRAME_INTERVAL, start);
        assert_eq!(clock.tick(Instant::now()), None);
    }
}
