//! First-Person Controller Library
//!
//! A physics-driven first-person character controller: directional input
//! pushes a capsule body, mouse look turns the body and pitches a camera
//! within a clamped range, and a pause state toggles cursor capture and the
//! simulation time scale.
//!
//! The controller never owns an engine. The body, camera, input and global
//! host state are all reached through small traits, so the same controller
//! runs in a winit window, in the headless replay tool, and in tests.
//!
//! # Modules
//!
//! - [`player`] - Controller, pause state machine, motion integrator, config
//! - [`camera`] - Camera rig and the look integrator
//! - [`input`] - Input snapshots and the sources that produce them
//! - [`physics`] - Physics body port and a minimal capsule body
//! - [`host`] - Host environment port, headless/window hosts, fixed-step clock
//!
//! # Example
//!
//! ```ignore
//! use first_person_engine::camera::CameraRig;
//! use first_person_engine::host::HeadlessHost;
//! use first_person_engine::input::InputSnapshot;
//! use first_person_engine::physics::CapsuleBody;
//! use first_person_engine::player::{FrameDriver, MovementConfig, PlayerController};
//! use glam::Vec2;
//!
//! let mut controller = PlayerController::new(
//!     MovementConfig::default(),
//!     CapsuleBody::new(),
//!     CameraRig::new(),
//!     InputSnapshot::moving(Vec2::Y),
//!     HeadlessHost::new(),
//! )?;
//!
//! let mut driver = FrameDriver::default();
//! let report = driver.frame(&mut controller, 1.0 / 60.0);
//! println!("speed {:.2}", report.speed);
//! ```

pub mod camera;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod physics;
pub mod player;

pub use error::{ConfigError, ControllerError};
pub use input::{InputSnapshot, InputSource};
pub use player::{FrameDriver, MovementConfig, PlayerController};
