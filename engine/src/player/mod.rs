//! Player Module
//!
//! The first-person controller and the pieces it is built from.
//!
//! # Components
//!
//! - [`PlayerController`] - Composition root with `update`, `fixed_update`,
//!   `late_update` and `set_inversion`
//! - [`PauseStateMachine`] - Running/Paused with cursor and time-scale side effects
//! - [`MotionIntegrator`] - Fixed-step force with a hard speed cap, idle damping
//! - [`MovementConfig`] - Tuning values, loadable from JSON
//! - [`FrameDriver`] - Runs a frame in engine order on top of a fixed-step clock
//! - [`DiagnosticsSink`] - Optional speed telemetry

pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod driver;
pub mod motion;
pub mod pause;

pub use config::{
    MovementConfig,
    DEFAULT_SPEED, DEFAULT_MAX_VELOCITY, DEFAULT_LOOK_SPEED, DEFAULT_DAMPING, DEFAULT_PITCH_LIMIT,
};
pub use controller::{PlayerController, PlayerControllerBuilder, PlayerState};
pub use diagnostics::{DiagnosticsSink, SpeedReadout, TracingDiagnostics};
pub use driver::{FrameDriver, FrameReport};
pub use motion::{MotionIntegrator, MotionStep};
pub use pause::{PauseState, PauseStateMachine, PauseTransition};
