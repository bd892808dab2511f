//! Physics module
//!
//! The controller never owns a physics engine. It talks to whatever body the
//! host provides through the [`PhysicsBody`] trait, and this module ships a
//! small [`CapsuleBody`] so the binaries and tests have something to push.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Forces in newtons (kg·m/s²)
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`body`] - The physics body port consumed by the integrators
//! - [`capsule`] - Minimal rigid capsule with gravity and a ground plane

pub mod body;
pub mod capsule;
pub mod types;

pub use body::PhysicsBody;
pub use capsule::{CapsuleBody, CapsuleShape, GRAVITY};
pub use types::{EulerRot, Quat, Vec2, Vec3};
