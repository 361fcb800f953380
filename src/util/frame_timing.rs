use web_time::{Duration, Instant};

/// Time sample handed to every mounted component once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameClock {
    /// Seconds since the frame loop started.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl FrameClock {
    /// Clock sample with explicit elapsed and delta seconds.
    #[must_use]
    pub const fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }
}

/// Frame timing with FPS calculation and optional frame limiting.
///
/// Produces [`FrameClock`] samples either from wall time
/// ([`begin_frame`](Self::begin_frame)) or from a fixed step
/// ([`step`](Self::step)) for headless runs and tests.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Wall time of the first frame
    started: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Seconds accumulated by fixed steps
    stepped: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        let now = Instant::now();

        Self {
            target_fps,
            min_frame_duration,
            started: now,
            last_frame: now,
            stepped: 0.0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Returns true if enough wall time has passed to render another frame.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Sample the wall clock for a new frame.
    pub fn begin_frame(&mut self) -> FrameClock {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.record(delta);
        FrameClock::new(now.duration_since(self.started).as_secs_f32(), delta)
    }

    /// Advance by a fixed step instead of reading the wall clock.
    ///
    /// Negative steps are treated as zero so elapsed time never runs
    /// backwards.
    pub fn step(&mut self, delta: f32) -> FrameClock {
        let delta = delta.max(0.0);
        self.stepped += delta;
        self.record(delta);
        FrameClock::new(self.stepped, delta)
    }

    fn record(&mut self, frame_time: f32) {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Configured FPS target (0 = unlimited).
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
