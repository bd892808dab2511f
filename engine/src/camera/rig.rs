//! Camera Rig
//!
//! The first-person camera rides on the player body: the body carries the
//! heading (yaw) and the camera only carries its local rotation, in practice
//! a pitch about its local X axis. [`CameraTransform`] is the port the look
//! integrator writes through; [`CameraRig`] is the stock implementation.
//!
//! # Coordinate System
//! - +X = right
//! - +Y = up
//! - -Z = forward (OpenGL/Vulkan convention)
//!
//! Positive pitch looks up.

use glam::{EulerRot, Quat, Vec3};

/// Eye height above the body center (meters)
pub const DEFAULT_EYE_HEIGHT: f32 = 0.6;

/// A camera transform parented to the player body.
pub trait CameraTransform {
    /// Rotation relative to the parent body.
    fn local_rotation(&self) -> Quat;

    /// Overwrite the rotation relative to the parent body.
    fn set_local_rotation(&mut self, rotation: Quat);

    /// Rotate by `angle` radians about a local-space axis.
    fn rotate(&mut self, axis: Vec3, angle: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let rotation = self.local_rotation() * Quat::from_axis_angle(axis, angle);
        self.set_local_rotation(rotation.normalize());
    }

    /// Current pitch angle in radians (rotation about local X).
    #[inline]
    fn pitch(&self) -> f32 {
        let (_, pitch, _) = self.local_rotation().to_euler(EulerRot::YXZ);
        pitch
    }
}

/// First-person camera mounted at a fixed offset on the body.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = CameraRig::new();
///
/// // After the controller's late update
/// let eye = camera.eye_position(body.position, body.rotation());
/// let forward = camera.forward(body.rotation());
/// ```
#[derive(Clone, Debug)]
pub struct CameraRig {
    /// Rotation relative to the body
    local_rotation: Quat,
    /// Eye offset from the body center, in body space
    pub eye_offset: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            local_rotation: Quat::IDENTITY,
            eye_offset: Vec3::new(0.0, DEFAULT_EYE_HEIGHT, 0.0),
        }
    }
}

impl CameraRig {
    /// Create a level camera at the default eye height.
    pub fn new() -> Self {
        Self::default()
    }

    /// World-space rotation given the parent body's rotation.
    #[inline]
    pub fn world_rotation(&self, body_rotation: Quat) -> Quat {
        body_rotation * self.local_rotation
    }

    /// World-space eye position given the parent body's transform.
    #[inline]
    pub fn eye_position(&self, body_position: Vec3, body_rotation: Quat) -> Vec3 {
        body_position + body_rotation * self.eye_offset
    }

    /// Direction the camera looks in, normalized.
    #[inline]
    pub fn forward(&self, body_rotation: Quat) -> Vec3 {
        (self.world_rotation(body_rotation) * Vec3::NEG_Z).normalize()
    }
}

impl CameraTransform for CameraRig {
    fn local_rotation(&self) -> Quat {
        self.local_rotation
    }

    fn set_local_rotation(&mut self, rotation: Quat) {
        self.local_rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let camera = CameraRig::new();
        assert_eq!(camera.local_rotation(), Quat::IDENTITY);
        assert_eq!(camera.eye_offset, Vec3::new(0.0, DEFAULT_EYE_HEIGHT, 0.0));
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn test_forward_vector_at_identity() {
        let camera = CameraRig::new();
        let forward = camera.forward(Quat::IDENTITY);

        assert!(forward.x.abs() < 0.001);
        assert!(forward.y.abs() < 0.001);
        assert!((forward.z - (-1.0)).abs() < 0.001);
    }

    #[test]
    fn test_rotate_about_x_sets_pitch() {
        let mut camera = CameraRig::new();
        camera.rotate(Vec3::X, 0.3);

        assert!((camera.pitch() - 0.3).abs() < 0.0001);
        // Positive pitch looks up
        assert!(camera.forward(Quat::IDENTITY).y > 0.0);
    }

    #[test]
    fn test_rotate_with_zero_axis_is_noop() {
        let mut camera = CameraRig::new();
        camera.rotate(Vec3::ZERO, 1.0);
        assert_eq!(camera.local_rotation(), Quat::IDENTITY);
    }

    #[test]
    fn test_forward_combines_heading_and_pitch() {
        let mut camera = CameraRig::new();
        camera.rotate(Vec3::X, 0.4);
        // Quarter turn to the right
        let body = Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2);

        let forward = camera.forward(body);

        assert!((forward.length() - 1.0).abs() < 0.001);
        assert!((forward.y - 0.4f32.sin()).abs() < 0.001);
        assert!((forward.x - 0.4f32.cos()).abs() < 0.001);
        assert!(forward.z.abs() < 0.001);
    }

    #[test]
    fn test_eye_position_follows_body_heading() {
        let mut camera = CameraRig::new();
        camera.eye_offset = Vec3::new(0.0, 0.5, -0.2);
        let body_rotation = Quat::from_rotation_y(std::f32::consts::PI);
        let eye = camera.eye_position(Vec3::new(1.0, 1.0, 1.0), body_rotation);

        // Half-turn flips the forward offset
        assert!((eye - Vec3::new(1.0, 1.5, 1.2)).length() < 0.001);
    }
}
