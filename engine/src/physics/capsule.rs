//! Capsule Body
//!
//! A minimal rigid capsule standing on a flat ground plane. It exists so the
//! controller can be driven without a full physics engine: forces queue up
//! between steps, gravity pulls the capsule down, and the ground plane stops
//! it. There is no collision against anything else.
//!
//! # Physics Model
//!
//! - Semi-implicit Euler: velocity first, then position
//! - Queued forces are converted to acceleration with `F / mass` and cleared
//!   after each step (continuous force, not an impulse)
//! - Gravity: 9.81 m/s^2 toward -Y
//! - Rotation is only changed externally (the capsule never tips over)

use glam::{Quat, Vec3};

use super::body::PhysicsBody;

/// Gravity acceleration in meters per second squared
pub const GRAVITY: f32 = 9.81;

/// Collision shape of the capsule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleShape {
    /// Radius of the hemispherical caps (meters)
    pub radius: f32,
    /// Total height including both caps (meters)
    pub height: f32,
}

impl Default for CapsuleShape {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 2.0,
        }
    }
}

impl CapsuleShape {
    /// Distance from the capsule center to its lowest point.
    #[inline]
    pub fn half_height(&self) -> f32 {
        (self.height * 0.5).max(self.radius)
    }
}

/// Rigid capsule body implementing [`PhysicsBody`].
#[derive(Debug, Clone)]
pub struct CapsuleBody {
    /// Center of the capsule in world space
    pub position: Vec3,
    /// Linear velocity (m/s)
    velocity: Vec3,
    /// World orientation (heading only in practice)
    rotation: Quat,
    /// Mass in kilograms
    mass: f32,
    /// Collision shape
    shape: CapsuleShape,
    /// Forces queued since the last step
    pending_force: Vec3,
    /// Height of the ground plane
    ground_height: f32,
    /// Whether gravity is applied
    use_gravity: bool,
    /// Whether the capsule rested on the ground after the last step
    grounded: bool,
}

impl Default for CapsuleBody {
    fn default() -> Self {
        let shape = CapsuleShape::default();
        Self {
            position: Vec3::new(0.0, shape.half_height(), 0.0),
            velocity: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            mass: 1.0,
            shape,
            pending_force: Vec3::ZERO,
            ground_height: 0.0,
            use_gravity: true,
            grounded: true,
        }
    }
}

impl CapsuleBody {
    /// Create a 1 kg capsule standing on the ground at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a capsule standing on the ground at the given XZ position.
    pub fn standing_at(x: f32, z: f32) -> Self {
        let mut body = Self::default();
        body.position = Vec3::new(x, body.ground_height + body.shape.half_height(), z);
        body
    }

    /// Enable or disable gravity.
    pub fn with_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self
    }

    /// Force queued for the next step.
    pub fn pending_force(&self) -> Vec3 {
        self.pending_force
    }

    /// Whether the capsule rested on the ground after the last step.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }
}

impl PhysicsBody for CapsuleBody {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn add_force(&mut self, force: Vec3) {
        self.pending_force += force;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    fn integrate(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        let mut acceleration = self.pending_force / self.mass;
        if self.use_gravity {
            acceleration.y -= GRAVITY;
        }
        self.pending_force = Vec3::ZERO;

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;

        let rest_height = self.ground_height + self.shape.half_height();
        if self.position.y <= rest_height {
            self.position.y = rest_height;
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}
