//! Frame Driver
//!
//! Runs one displayed frame against a [`PlayerController`] in the order a
//! game engine would: per-frame update, the fixed physics steps that fit in
//! the (time-scaled) frame, then the late update.
//!
//! Each fixed step calls the controller's `fixed_update` and then
//! [`PhysicsBody::integrate`] so queued forces take effect before the next
//! step reads the velocity.

use super::controller::PlayerController;
use super::pause::PauseTransition;
use crate::camera::{CameraTransform, LookStep};
use crate::host::{FixedStepClock, FixedStepConfig, HostEnvironment};
use crate::input::InputSource;
use crate::physics::PhysicsBody;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Fixed steps run
    pub steps: u32,
    /// Pause transition taken during the per-frame update
    pub transition: Option<PauseTransition>,
    /// Result of the late update
    pub look: LookStep,
    /// Body speed at the end of the frame (m/s)
    pub speed: f32,
    /// Paused at the end of the frame
    pub paused: bool,
}

/// Drives a controller from wall-clock frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    clock: FixedStepClock,
}

impl FrameDriver {
    pub fn new(config: FixedStepConfig) -> Self {
        Self {
            clock: FixedStepClock::new(config),
        }
    }

    /// Run one frame of `frame_dt` seconds.
    pub fn frame<B, C, I, H>(
        &mut self,
        controller: &mut PlayerController<B, C, I, H>,
        frame_dt: f32,
    ) -> FrameReport
    where
        B: PhysicsBody,
        C: CameraTransform,
        I: InputSource,
        H: HostEnvironment,
    {
        let transition = controller.update();

        // Read the time scale after the pause update so a pause freezes
        // physics on the same frame.
        let plan = self.clock.plan(frame_dt, controller.host().time_scale());
        let fixed_dt = self.clock.fixed_dt();
        for _ in 0..plan.steps {
            controller.fixed_update();
            controller.body_mut().integrate(fixed_dt);
        }

        let look = controller.late_update();

        FrameReport {
            steps: plan.steps,
            transition,
            look,
            speed: controller.body().speed(),
            paused: controller.state().paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::camera::CameraRig;
    use crate::host::HeadlessHost;
    use crate::input::InputSnapshot;
    use crate::physics::CapsuleBody;
    use crate::player::MovementConfig;

    fn controller(
        input: InputSnapshot,
    ) -> PlayerController<CapsuleBody, CameraRig, InputSnapshot, HeadlessHost> {
        PlayerController::new(
            MovementConfig::default(),
            CapsuleBody::new(),
            CameraRig::new(),
            input,
            HeadlessHost::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_moving_frame_accelerates_body() {
        let mut controller = controller(InputSnapshot::moving(Vec2::Y));
        let mut driver = FrameDriver::default();

        let report = driver.frame(&mut controller, 0.105);

        assert_eq!(report.steps, 5);
        assert!(report.speed > 0.0);
        assert!(controller.body().position.z < 0.0);
    }

    #[test]
    fn test_pause_freezes_physics_same_frame() {
        let mut controller = controller(InputSnapshot {
            move_axis: Vec2::Y,
            pause_pressed: true,
            ..Default::default()
        });
        let mut driver = FrameDriver::default();

        let report = driver.frame(&mut controller, 0.1);

        assert_eq!(report.transition, Some(PauseTransition::Paused));
        assert_eq!(report.steps, 0);
        assert_eq!(report.look, LookStep::Skipped);
        assert_eq!(report.speed, 0.0);
        assert!(report.paused);
    }
}
