//! Diagnostics sinks.
//!
//! The controller can publish the body speed after every fixed step. Nothing
//! in the controller depends on a sink being attached.

use tracing::debug;

/// Receives controller telemetry.
pub trait DiagnosticsSink {
    /// Body speed (m/s) after a fixed step.
    fn publish_speed(&mut self, speed: f32);
}

/// Keeps the latest speed for an on-screen readout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeedReadout {
    speed: f32,
}

impl SpeedReadout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Readout text, rounded to two decimals.
    pub fn text(&self) -> String {
        format!("Velocity: {:.2}", self.speed)
    }
}

impl DiagnosticsSink for SpeedReadout {
    fn publish_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}

/// Logs the speed at `debug` level every `interval` samples.
#[derive(Debug, Clone)]
pub struct TracingDiagnostics {
    interval: u32,
    samples: u32,
}

impl TracingDiagnostics {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            samples: 0,
        }
    }
}

impl DiagnosticsSink for TracingDiagnostics {
    fn publish_speed(&mut self, speed: f32) {
        if self.samples % self.interval == 0 {
            debug!(speed, "body speed");
        }
        self.samples = self.samples.wrapping_add(1);
    }
}

/// Sinks can be shared with the host through `Rc<RefCell<_>>`.
impl<S: DiagnosticsSink> DiagnosticsSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn publish_speed(&mut self, speed: f32) {
        self.borrow_mut().publish_speed(speed);
    }
}
