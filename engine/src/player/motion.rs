//! Motion Integrator
//!
//! Fixed-step movement for a physics-driven body. Movement is relative to the
//! body's own right/forward axes:
//!
//! - With move input, a force of `speed` per unit of input is pushed into the
//!   body, but only while its speed is below `max_velocity`. This is a hard
//!   ceiling: at or above the cap the step adds nothing.
//! - Without move input, horizontal velocity is blended toward zero by
//!   `damping` per step while vertical velocity (gravity, landing) is left
//!   alone.
//!
//! The damping blend is not scaled by the step length, so halving the fixed
//! step doubles how quickly the body stops.

use glam::{Vec2, Vec3};

use super::config::MovementConfig;
use crate::physics::PhysicsBody;

/// Outcome of one fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionStep {
    /// Force applied to the body (newtons, world space)
    Propelled(Vec3),
    /// Move input present but the body is already at the speed cap
    Capped,
    /// No move input; horizontal velocity damped
    Damped,
}

/// Applies movement force and idle damping to a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntegrator {
    speed: f32,
    max_velocity: f32,
    damping: f32,
}

impl MotionIntegrator {
    pub fn new(speed: f32, max_velocity: f32, damping: f32) -> Self {
        Self {
            speed,
            max_velocity,
            damping,
        }
    }

    pub fn from_config(config: &MovementConfig) -> Self {
        Self::new(config.speed, config.max_velocity, config.damping)
    }

    /// World-space force for a move vector given the body's axes.
    pub fn desired_force(&self, move_axis: Vec2, body: &impl PhysicsBody) -> Vec3 {
        body.right().normalize_or_zero() * move_axis.x * self.speed
            + body.forward().normalize_or_zero() * move_axis.y * self.speed
    }

    /// Run one fixed step.
    ///
    /// When `can_move` is false the move vector is treated as zero.
    pub fn step(&self, move_axis: Vec2, can_move: bool, body: &mut impl PhysicsBody) -> MotionStep {
        let move_axis = if can_move { move_axis } else { Vec2::ZERO };

        if move_axis != Vec2::ZERO {
            if body.velocity().length() < self.max_velocity {
                let force = self.desired_force(move_axis, body);
                body.add_force(force);
                MotionStep::Propelled(force)
            } else {
                MotionStep::Capped
            }
        } else {
            let velocity = body.velocity();
            let rest = Vec3::new(0.0, velocity.y, 0.0);
            body.set_velocity(velocity.lerp(rest, self.damping));
            MotionStep::Damped
        }
    }
}
