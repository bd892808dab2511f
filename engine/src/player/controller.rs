//! Player Controller
//!
//! Composition root for the first-person controller. Owns the movement
//! config, the pause state machine and both integrators, plus the injected
//! body, camera, input source and host.
//!
//! # Frame Order
//!
//! The host calls, per displayed frame:
//!
//! 1. [`update`](PlayerController::update) - poll input, refresh the
//!    inversion sign, run the pause state machine
//! 2. [`fixed_update`](PlayerController::fixed_update) - zero or more times,
//!    once per physics tick
//! 3. [`late_update`](PlayerController::late_update) - mouse look, after
//!    physics
//!
//! # Usage
//!
//! ```rust,ignore
//! use first_person_engine::camera::CameraRig;
//! use first_person_engine::host::HeadlessHost;
//! use first_person_engine::input::DeviceInput;
//! use first_person_engine::physics::CapsuleBody;
//! use first_person_engine::player::{MovementConfig, PlayerController};
//!
//! let mut controller = PlayerController::builder()
//!     .config(MovementConfig::default())
//!     .body(CapsuleBody::new())
//!     .camera(CameraRig::new())
//!     .input(DeviceInput::new())
//!     .host(HeadlessHost::new())
//!     .build()?;
//!
//! controller.update();
//! controller.fixed_update();
//! controller.late_update();
//! ```

use tracing::info;

use super::config::MovementConfig;
use super::diagnostics::DiagnosticsSink;
use super::motion::{MotionIntegrator, MotionStep};
use super::pause::{PauseStateMachine, PauseTransition};
use crate::camera::{CameraTransform, LookIntegrator, LookStep};
use crate::error::ControllerError;
use crate::host::HostEnvironment;
use crate::input::{InputSnapshot, InputSource};
use crate::physics::PhysicsBody;

/// Derived per-session player flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub paused: bool,
    /// Always `!paused`
    pub can_move: bool,
    /// `-1` when vertical look is inverted, `+1` otherwise
    pub inversion_sign: i32,
}

/// First-person controller over an injected body, camera, input and host.
pub struct PlayerController<B, C, I, H> {
    config: MovementConfig,
    pause: PauseStateMachine,
    motion: MotionIntegrator,
    look: LookIntegrator,
    inversion_sign: i32,
    /// Input for the current frame, already zeroed when movement is disabled
    snapshot: InputSnapshot,
    body: B,
    camera: C,
    input: I,
    host: H,
    diagnostics: Option<Box<dyn DiagnosticsSink>>,
}

impl<B, C, I, H> PlayerController<B, C, I, H>
where
    B: PhysicsBody,
    C: CameraTransform,
    I: InputSource,
    H: HostEnvironment,
{
    /// Start building a controller.
    pub fn builder() -> PlayerControllerBuilder<B, C, I, H> {
        PlayerControllerBuilder::new()
    }

    /// Build a controller from already-resolved collaborators.
    pub fn new(
        config: MovementConfig,
        body: B,
        camera: C,
        input: I,
        host: H,
    ) -> Result<Self, ControllerError> {
        Self::builder()
            .config(config)
            .body(body)
            .camera(camera)
            .input(input)
            .host(host)
            .build()
    }

    /// Per-frame update: poll input, refresh the inversion sign, and run the
    /// pause state machine.
    pub fn update(&mut self) -> Option<PauseTransition> {
        let polled = self.input.poll();
        self.snapshot = if self.pause.can_move() {
            polled
        } else {
            polled.without_motion()
        };

        self.inversion_sign = self.config.inversion_sign();
        self.pause.update(&self.snapshot, &mut self.host)
    }

    /// Fixed-step update: movement force or idle damping.
    pub fn fixed_update(&mut self) -> MotionStep {
        let step = self
            .motion
            .step(self.snapshot.move_axis, self.pause.can_move(), &mut self.body);

        if let Some(sink) = self.diagnostics.as_mut() {
            sink.publish_speed(self.body.speed());
        }
        step
    }

    /// Render-order update: body yaw and clamped camera pitch.
    pub fn late_update(&mut self) -> LookStep {
        self.look.step(
            self.snapshot.look,
            self.inversion_sign,
            &mut self.body,
            &mut self.camera,
            &self.host,
        )
    }

    /// Invert (or restore) vertical look. Takes effect on the next update.
    pub fn set_inversion(&mut self, invert_y: bool) {
        self.config.invert_y = invert_y;
    }

    /// Attach a diagnostics sink, replacing any previous one.
    pub fn set_diagnostics(&mut self, sink: impl DiagnosticsSink + 'static) {
        self.diagnostics = Some(Box::new(sink));
    }

    pub fn state(&self) -> PlayerState {
        PlayerState {
            paused: self.pause.is_paused(),
            can_move: self.pause.can_move(),
            inversion_sign: self.inversion_sign,
        }
    }

    /// Input as seen by the integrators this frame.
    pub fn snapshot(&self) -> &InputSnapshot {
        &self.snapshot
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

/// Collects the collaborators a [`PlayerController`] needs.
///
/// [`build`](Self::build) fails with a descriptive [`ControllerError`] when a
/// collaborator is missing or the config does not validate.
pub struct PlayerControllerBuilder<B, C, I, H> {
    config: MovementConfig,
    body: Option<B>,
    camera: Option<C>,
    input: Option<I>,
    host: Option<H>,
    diagnostics: Option<Box<dyn DiagnosticsSink>>,
}

impl<B, C, I, H> Default for PlayerControllerBuilder<B, C, I, H> {
    fn default() -> Self {
        Self {
            config: MovementConfig::default(),
            body: None,
            camera: None,
            input: None,
            host: None,
            diagnostics: None,
        }
    }
}

impl<B, C, I, H> PlayerControllerBuilder<B, C, I, H>
where
    B: PhysicsBody,
    C: CameraTransform,
    I: InputSource,
    H: HostEnvironment,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MovementConfig) -> Self {
        self.config = config;
        self
    }

    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn camera(mut self, camera: C) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn input(mut self, input: I) -> Self {
        self.input = Some(input);
        self
    }

    pub fn host(mut self, host: H) -> Self {
        self.host = Some(host);
        self
    }

    pub fn diagnostics(mut self, sink: impl DiagnosticsSink + 'static) -> Self {
        self.diagnostics = Some(Box::new(sink));
        self
    }

    /// Validate and assemble the controller.
    ///
    /// The host is put into the running state (cursor locked and hidden,
    /// time scale 1) before this returns.
    pub fn build(self) -> Result<PlayerController<B, C, I, H>, ControllerError> {
        self.config.validate()?;
        let body = self.body.ok_or(ControllerError::MissingBody)?;
        let camera = self.camera.ok_or(ControllerError::MissingCamera)?;
        let input = self.input.ok_or(ControllerError::MissingInput)?;
        let mut host = self.host.ok_or(ControllerError::MissingHost)?;

        let pause = PauseStateMachine::new();
        pause.apply_side_effects(&mut host);

        info!(
            speed = self.config.speed,
            max_velocity = self.config.max_velocity,
            look_speed = self.config.look_speed,
            invert_y = self.config.invert_y,
            "player controller attached"
        );

        Ok(PlayerController {
            motion: MotionIntegrator::from_config(&self.config),
            look: LookIntegrator::from_config(&self.config),
            inversion_sign: self.config.inversion_sign(),
            config: self.config,
            pause,
            snapshot: InputSnapshot::default(),
            body,
            camera,
            input,
            host,
            diagnostics: self.diagnostics,
        })
    }
}
