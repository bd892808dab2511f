//! Physics Body Port
//!
//! The narrow interface through which the motion and look integrators mutate a
//! body owned by a physics engine. Implement it for whatever rigid body type
//! your engine uses.
//!
//! # Coordinate System
//! - +X = right
//! - +Y = up
//! - -Z = forward
//!
//! An identity rotation therefore faces -Z, matching the FPS camera.

use glam::{Quat, Vec3};

/// A physics-driven body the controller can push and turn.
pub trait PhysicsBody {
    /// Current linear velocity in world space (m/s).
    fn velocity(&self) -> Vec3;

    /// Overwrite the linear velocity.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Queue a force (newtons) to be applied on the next integration step.
    fn add_force(&mut self, force: Vec3);

    /// World-space orientation of the body.
    fn rotation(&self) -> Quat;

    /// Overwrite the world-space orientation.
    fn set_rotation(&mut self, rotation: Quat);

    /// Body-local right axis in world space.
    #[inline]
    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Body-local forward axis in world space.
    #[inline]
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Advance the body by one fixed step.
    ///
    /// Bodies simulated by an external engine keep the default no-op; the
    /// engine integrates them on its own tick.
    fn integrate(&mut self, _dt: f32) {}

    /// Magnitude of the linear velocity.
    #[inline]
    fn speed(&self) -> f32 {
        self.velocity().length()
    }
}
