//! Frame timing handed to layer updates.

use std::time::{Duration, Instant};

/// Timing snapshot for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous frame, clamped.
    pub dt: f32,

    /// Frame counter, starting at 0.
    pub frame_index: u64,
}

impl Default for FrameTime {
    fn default() -> Self {
        Self {
            dt: 0.0,
            frame_index: 0,
        }
    }
}

/// Produces a [`FrameTime`] per tick.
///
/// Delta time is clamped to `[dt_min, dt_max]` so a debugger pause or a
/// minimized window does not hand layers a multi-second step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Restarts delta measurement from now.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
