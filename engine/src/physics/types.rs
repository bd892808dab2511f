//! Math type re-exports from glam
//!
//! The controller, camera and body code all share these types so that
//! host integrations only ever see one math library.

pub use glam::{EulerRot, Quat, Vec2, Vec3};
