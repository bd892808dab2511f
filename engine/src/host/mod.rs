//! Host Environment Module
//!
//! Global engine state the controller has to touch: the simulation time scale
//! and the cursor. Treating it as a port keeps the controller testable without
//! a window.
//!
//! # Components
//!
//! - [`HostEnvironment`] - Trait over time scale and cursor lock/visibility
//! - [`HeadlessHost`] - In-memory host that counts writes (tests, replay)
//! - [`WindowHost`] - winit-backed host that grabs and hides the real cursor
//! - [`FixedStepClock`] - Turns frame deltas into fixed physics steps

pub mod clock;
pub mod headless;
pub mod window;

pub use clock::{FixedStepClock, FixedStepConfig, StepPlan};
pub use headless::HeadlessHost;
pub use window::WindowHost;

/// How the cursor is constrained by the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorLockMode {
    /// Cursor moves freely
    #[default]
    None,
    /// Cursor is captured and cannot leave the window
    Locked,
}

/// Global state owned by the host engine.
///
/// All writes are expected to be cheap; callers guard them with equality
/// checks so the same state can be re-applied every frame.
pub trait HostEnvironment {
    /// Global simulation time scale (1.0 = real time, 0.0 = frozen).
    fn time_scale(&self) -> f32;

    /// Set the global simulation time scale.
    fn set_time_scale(&mut self, scale: f32);

    /// Current cursor lock mode.
    fn cursor_lock(&self) -> CursorLockMode;

    /// Set the cursor lock mode.
    fn set_cursor_lock(&mut self, mode: CursorLockMode);

    /// Whether the cursor is drawn.
    fn cursor_visible(&self) -> bool;

    /// Show or hide the cursor.
    fn set_cursor_visible(&mut self, visible: bool);

    /// Whether the simulation is currently frozen.
    #[inline]
    fn is_frozen(&self) -> bool {
        self.time_scale() == 0.0
    }
}
