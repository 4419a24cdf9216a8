use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds (clamped).
    pub dt: f32,

    /// Zero-based index of the frame this tick closes.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots and running totals.
///
/// Delta time is clamped so a stall (debugger, minimized window, Android
/// activity in the background) does not skew the mean.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frames: u64,
    total: Duration,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frames: 0,
            total: Duration::ZERO,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline without touching the totals.
    ///
    /// Call after a pause (e.g. surface suspended) so the gap is not counted.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;
        self.total += dt;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frames,
        };

        self.frames = self.frames.wrapping_add(1);
        ft
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mean clamped frame time in seconds, or 0 before the first tick.
    pub fn mean_dt(&self) -> f32 {
        if self.frames == 0 {
            0.0
        } else {
            self.total.as_secs_f32() / self.frames as f32
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
