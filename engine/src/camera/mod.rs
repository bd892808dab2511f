//! Camera Module
//!
//! Camera state and the render-rate look integration. Window-system agnostic:
//! it only deals with rotations.

pub mod look;
pub mod rig;

pub use look::{LookIntegrator, LookStep};
pub use rig::{CameraRig, CameraTransform, DEFAULT_EYE_HEIGHT};
