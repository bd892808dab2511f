//! Fixed-Step Clock
//!
//! Splits variable frame deltas into whole fixed physics steps. Frame time is
//! multiplied by the host time scale before it is accumulated, so a frozen
//! host (time scale 0) runs no physics at all.
//!
//! Backlog beyond `max_steps_per_frame` is dropped instead of carried, which
//! keeps a long hitch from turning into a burst of catch-up steps.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default fixed step: 50 Hz
pub const DEFAULT_FIXED_DT: f32 = 1.0 / 50.0;

/// Default cap on fixed steps per frame
pub const DEFAULT_MAX_STEPS: u32 = 5;

/// Fixed-step timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedStepConfig {
    /// Length of one physics step in seconds
    pub fixed_dt: f32,
    /// Maximum physics steps run for a single frame
    pub max_steps_per_frame: u32,
}

impl Default for FixedStepConfig {
    fn default() -> Self {
        Self {
            fixed_dt: DEFAULT_FIXED_DT,
            max_steps_per_frame: DEFAULT_MAX_STEPS,
        }
    }
}

/// Result of planning one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepPlan {
    /// Fixed steps to run this frame
    pub steps: u32,
    /// Scaled time discarded because of the per-frame cap (seconds)
    pub dropped: f32,
}

/// Accumulates scaled frame time and hands out fixed steps.
#[derive(Debug, Clone, Default)]
pub struct FixedStepClock {
    config: FixedStepConfig,
    accumulator: f32,
}

impl FixedStepClock {
    pub fn new(config: FixedStepConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
        }
    }

    /// Length of one fixed step in seconds.
    #[inline]
    pub fn fixed_dt(&self) -> f32 {
        self.config.fixed_dt
    }

    /// Scaled time carried over to the next frame.
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Plan the fixed steps for a frame of `frame_dt` seconds.
    ///
    /// A non-finite frame (infinite delta or time scale) plans nothing and
    /// leaves the accumulator untouched.
    pub fn plan(&mut self, frame_dt: f32, time_scale: f32) -> StepPlan {
        let fixed_dt = self.config.fixed_dt;
        if !(fixed_dt > 0.0) {
            return StepPlan::default();
        }

        let scaled = frame_dt.max(0.0) * time_scale.max(0.0);
        if !scaled.is_finite() {
            debug!(frame_dt, time_scale, "non-finite frame time ignored");
            return StepPlan::default();
        }
        self.accumulator += scaled;

        let mut steps = 0;
        while self.accumulator >= fixed_dt && steps < self.config.max_steps_per_frame {
            self.accumulator -= fixed_dt;
            steps += 1;
        }

        let mut dropped = 0.0;
        if self.accumulator >= fixed_dt {
            dropped = self.accumulator - self.accumulator % fixed_dt;
            self.accumulator %= fixed_dt;
            debug!(dropped, steps, "fixed-step backlog dropped");
        }

        StepPlan { steps, dropped }
    }
}
