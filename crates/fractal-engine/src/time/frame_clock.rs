use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the process is paused
/// by the debugger, minimized, or stalls. The clock also keeps an unclamped
/// running average so the loop can report its actual frame rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,

    window_start: Instant,
    window_frames: u64,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self::starting_at(Instant::now(), dt_min, dt_max)
    }

    fn starting_at(start: Instant, dt_min: Duration, dt_max: Duration) -> Self {
        Self {
            last: start,
            frame_index: 0,
            dt_min,
            dt_max,
            window_start: start,
            window_frames: 0,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;
        self.window_frames += 1;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Returns the average frames per second since the last call and restarts
    /// the averaging window.
    ///
    /// Returns `None` if no frame was ticked since the window started.
    pub fn take_average_fps(&mut self) -> Option<f32> {
        if self.window_frames == 0 {
            return None;
        }

        let elapsed = self.last.saturating_duration_since(self.window_start);
        let fps = if elapsed.is_zero() {
            None
        } else {
            Some(self.window_frames as f32 / elapsed.as_secs_f32())
        };

        self.window_start = self.last;
        self.window_frames = 0;
        fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_at(start: Instant) -> FrameClock {
        FrameClock::starting_at(start, Duration::from_micros(100), Duration::from_millis(250))
    }

    #[test]
    fn frame_index_increments() {
        let t0 = Instant::now();
        let mut clock = clock_at(t0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn dt_is_clamped_after_stall() {
        let t0 = Instant::now();
        let mut clock = clock_at(t0);
        let ft = clock.tick_at(t0 + Duration::from_secs(5));
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn dt_has_floor() {
        let t0 = Instant::now();
        let mut clock = clock_at(t0);
        let ft = clock.tick_at(t0);
        assert!(ft.dt > 0.0);
    }

    #[test]
    fn average_fps_over_window() {
        let t0 = Instant::now();
        let mut clock = clock_at(t0);
        for i in 1..=60 {
            clock.tick_at(t0 + Duration::from_millis(i * 10));
        }
        let fps = clock.take_average_fps().unwrap();
        assert!((fps - 100.0).abs() < 0.5, "fps = {fps}");
        assert!(clock.take_average_fps().is_none());
    }
}
