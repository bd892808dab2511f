//! Look Integrator
//!
//! Render-rate mouse look. The horizontal look delta turns the whole body
//! about world Y; the vertical delta pitches only the camera about its local
//! X axis, clamped to a symmetric limit.
//!
//! The clamp works on the pitch *angle* before the rotation is rebuilt, so
//! the camera quaternion is always a valid rotation. Yaw and roll stored in
//! the camera's local rotation are carried through unchanged.
//!
//! Nothing happens while the host time scale is zero.

use glam::{EulerRot, Quat, Vec2};

use super::rig::CameraTransform;
use crate::host::HostEnvironment;
use crate::physics::PhysicsBody;
use crate::player::config::MovementConfig;

/// Outcome of one look step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookStep {
    /// Host is frozen; nothing was rotated
    Skipped,
    /// Rotation applied
    Applied {
        /// Camera pitch after clamping (radians)
        pitch: f32,
        /// Heading change applied to the body (radians, positive = right)
        yaw_delta: f32,
    },
}

/// Applies look input to the body heading and camera pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookIntegrator {
    /// Radians per unit of look input
    look_speed: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` (radians)
    pitch_limit: f32,
}

impl LookIntegrator {
    pub fn new(look_speed: f32, pitch_limit: f32) -> Self {
        Self {
            look_speed,
            pitch_limit: pitch_limit.abs(),
        }
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self::new(config.look_speed, config.pitch_limit)
    }

    /// Run one render step.
    ///
    /// `inversion_sign` is `-1` when vertical look is inverted, `+1` otherwise.
    pub fn step(
        &self,
        look: Vec2,
        inversion_sign: i32,
        body: &mut impl PhysicsBody,
        camera: &mut impl CameraTransform,
        host: &impl HostEnvironment,
    ) -> LookStep {
        if host.is_frozen() {
            return LookStep::Skipped;
        }

        let (yaw, pitch, roll) = camera.local_rotation().to_euler(EulerRot::YXZ);
        let pitch_delta = look.y * self.look_speed * inversion_sign as f32;
        let pitch = (pitch + pitch_delta).clamp(-self.pitch_limit, self.pitch_limit);
        camera.set_local_rotation(Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll));

        // glam is right-handed: a positive Y rotation turns left, so negate to
        // make positive look.x turn right.
        let yaw_delta = look.x * self.look_speed;
        if yaw_delta != 0.0 {
            let heading = Quat::from_rotation_y(-yaw_delta) * body.rotation();
            body.set_rotation(heading.normalize());
        }

        LookStep::Applied { pitch, yaw_delta }
    }
}
