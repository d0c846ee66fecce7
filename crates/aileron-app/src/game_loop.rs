//! Fixed-timestep simulation loop implementing the "Fix Your Timestep" pattern.
//!
//! Decouples simulation (fixed 60 Hz) from rendering (variable rate) using an
//! accumulator, and adds a time scale that stretches how much simulation time
//! each wall-clock second buys without touching the render cadence.

use std::time::Instant;
use tracing::warn;

/// Fixed simulation timestep: 60 Hz (16.666… ms per tick).
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Maximum frame time clamp to prevent spiral of death.
/// If a frame takes longer than this, we clamp and accept slowdown
/// rather than trying to catch up with dozens of simulation steps.
pub const MAX_FRAME_TIME: f64 = 0.25; // 250ms = 4 FPS minimum

/// Fixed-timestep game loop state.
///
/// Call [`tick`](Self::tick) once per frame to run simulation steps at a
/// fixed rate and render with interpolation, or drive
/// [`tick_with_frame_time`](Self::tick_with_frame_time) directly with
/// synthetic frame times for bit-identical scripted runs.
pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
    time_scale: f64,
}

impl GameLoop {
    /// Creates a new `GameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
            time_scale: 1.0,
        }
    }

    /// Runs one frame against the wall clock.
    ///
    /// See [`tick_with_frame_time`](Self::tick_with_frame_time) for the
    /// callback contract.
    pub fn tick(&mut self, update_fn: impl FnMut(f64, f64), render_fn: impl FnMut(f64, f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;

        self.tick_with_frame_time(frame_time, update_fn, render_fn);
    }

    /// Runs one frame with an explicit frame time in seconds: runs zero or
    /// more fixed-rate simulation steps, then calls the render function once.
    ///
    /// - `update_fn(fixed_dt, total_sim_time)` is called zero or more times
    ///   at the fixed rate; the time scale decides how many steps a frame
    ///   buys.
    /// - `render_fn(alpha, frame_dt)` is called exactly once with the
    ///   interpolation alpha in `[0.0, 1.0)` and the unscaled frame delta.
    ///   Frame-paced smoothing (the follow camera) consumes `frame_dt`, so
    ///   slowing the simulation down does not slow the camera.
    pub fn tick_with_frame_time(
        &mut self,
        frame_time: f64,
        mut update_fn: impl FnMut(f64, f64),
        mut render_fn: impl FnMut(f64, f64),
    ) {
        let mut frame_time = if frame_time.is_finite() {
            frame_time.max(0.0)
        } else {
            0.0
        };

        // Clamp frame time to prevent spiral of death
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time * self.time_scale;

        // Run simulation steps at fixed rate
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }

        // Calculate interpolation alpha for smooth rendering
        let alpha = if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        };

        render_fn(alpha, frame_time);
        self.frame_count += 1;
    }

    /// Returns the current interpolation alpha without running a tick.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    /// Simulation speed multiplier. 1.0 is real time.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Set the simulation speed multiplier.
    ///
    /// Negative values clamp to zero (paused); non-finite values are
    /// ignored. A paused loop keeps rendering with live frame deltas.
    pub fn set_time_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.time_scale = scale.max(0.0);
        }
    }

    /// Returns the total number of frames rendered.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the total number of simulation update steps executed.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Returns the total simulation time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
