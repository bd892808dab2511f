//! Controller Tests - Pause, Movement and Look Scenarios
//!
//! End-to-end scenarios through the public API: a controller built from a
//! capsule body, a camera rig, a scripted or constant input source and a
//! headless host.

use first_person_engine::camera::{CameraRig, CameraTransform, LookStep};
use first_person_engine::host::{CursorLockMode, FixedStepConfig, HeadlessHost, HostEnvironment};
use first_person_engine::input::{InputScript, InputSnapshot, ScriptedInput};
use first_person_engine::physics::{CapsuleBody, PhysicsBody};
use first_person_engine::player::{
    FrameDriver, MotionStep, MovementConfig, PauseTransition, PlayerController,
};
use first_person_engine::ControllerError;
use glam::{Quat, Vec2, Vec3};

type SnapshotController = PlayerController<CapsuleBody, CameraRig, InputSnapshot, HeadlessHost>;

fn floating_body() -> CapsuleBody {
    CapsuleBody::new().with_gravity(false)
}

fn controller_with(config: MovementConfig, input: InputSnapshot) -> SnapshotController {
    PlayerController::new(
        config,
        floating_body(),
        CameraRig::new(),
        input,
        HeadlessHost::new(),
    )
    .unwrap()
}

fn controller(input: InputSnapshot) -> SnapshotController {
    controller_with(MovementConfig::default(), input)
}

// ============================================================================
// Pause Tests
// ============================================================================

#[test]
fn test_pause_sequence() {
    let script = InputScript::from_json_str(
        r#"{ "frames": [ { "pause": true }, { "move": [0, 1] }, { "unpause": true } ] }"#,
    )
    .unwrap();

    let mut controller = PlayerController::new(
        MovementConfig::default(),
        floating_body(),
        CameraRig::new(),
        ScriptedInput::new(&script),
        HeadlessHost::new(),
    )
    .unwrap();

    // Frame 1: pause
    assert_eq!(controller.update(), Some(PauseTransition::Paused));
    let host = controller.host();
    assert!(controller.state().paused);
    assert!(!controller.state().can_move);
    assert_eq!(host.time_scale(), 0.0);
    assert_eq!(host.cursor_lock(), CursorLockMode::None);
    assert!(host.cursor_visible());

    // Frame 2: movement ignored while paused
    assert_eq!(controller.update(), None);
    assert_eq!(controller.fixed_update(), MotionStep::Damped);
    assert_eq!(controller.body().velocity(), Vec3::ZERO);

    // Frame 3: resume
    assert_eq!(controller.update(), Some(PauseTransition::Resumed));
    let host = controller.host();
    assert!(!controller.state().paused);
    assert!(controller.state().can_move);
    assert_eq!(host.time_scale(), 1.0);
    assert_eq!(host.cursor_lock(), CursorLockMode::Locked);
    assert!(!host.cursor_visible());
}

#[test]
fn test_held_pause_key_does_not_toggle() {
    let mut controller = controller(InputSnapshot {
        pause_pressed: true,
        ..Default::default()
    });

    assert_eq!(controller.update(), Some(PauseTransition::Paused));
    for _ in 0..10 {
        assert_eq!(controller.update(), None);
        assert!(controller.state().paused);
    }
}

#[test]
fn test_repeated_updates_write_nothing() {
    let mut controller = controller(InputSnapshot::default());
    controller.host_mut().reset_writes();

    for _ in 0..20 {
        controller.update();
        controller.fixed_update();
        controller.late_update();
    }

    assert_eq!(controller.host().writes(), 0);
}

// ============================================================================
// Movement Tests
// ============================================================================

#[test]
fn test_forward_force_from_rest() {
    let mut controller = controller(InputSnapshot::moving(Vec2::new(0.0, 1.0)));

    controller.update();
    let step = controller.fixed_update();

    let MotionStep::Propelled(force) = step else {
        panic!("expected a force, got {step:?}");
    };
    assert!((force.length() - 5.0).abs() < 0.0001);
    assert!((force - Vec3::new(0.0, 0.0, -5.0)).length() < 0.0001);
}

#[test]
fn test_speed_never_driven_past_cap_by_force() {
    let mut controller = controller(InputSnapshot::moving(Vec2::new(0.0, 1.0)));
    let fixed_dt = 0.02;

    let mut capped = false;
    for _ in 0..500 {
        controller.update();
        if controller.fixed_update() == MotionStep::Capped {
            capped = true;
        }
        controller.body_mut().integrate(fixed_dt);
    }

    // Each accepted step adds speed * dt / mass = 0.1 m/s, so the body can
    // overshoot the cap by at most one step.
    assert!(capped);
    assert!(controller.body().speed() < 10.0 + 0.1 + 0.0001);
}

#[test]
fn test_idle_damping_stops_horizontal_motion() {
    let mut controller = controller(InputSnapshot::default());
    controller
        .body_mut()
        .set_velocity(Vec3::new(6.0, 0.0, -8.0));

    controller.update();
    controller.fixed_update();
    assert!((controller.body().speed() - 9.0).abs() < 0.0001);

    for _ in 0..200 {
        controller.fixed_update();
    }
    assert!(controller.body().speed() < 0.001);
}

#[test]
fn test_frame_driver_walks_forward() {
    let mut controller = controller(InputSnapshot::moving(Vec2::new(0.0, 1.0)));
    let mut driver = FrameDriver::new(FixedStepConfig::default());

    for _ in 0..60 {
        driver.frame(&mut controller, 1.0 / 60.0);
    }

    let position = controller.body().position;
    assert!(position.z < -0.5);
    assert!(position.x.abs() < 0.0001);
}

// ============================================================================
// Look Tests
// ============================================================================

#[test]
fn test_pitch_pins_at_limit() {
    let mut controller = controller(InputSnapshot::looking(Vec2::new(0.0, 1000.0)));

    for _ in 0..10 {
        controller.update();
        controller.late_update();
        assert!(controller.camera().pitch() <= 0.5 + 0.0001);
    }
    assert!((controller.camera().pitch() - 0.5).abs() < 0.0001);

    *controller.input_mut() = InputSnapshot::looking(Vec2::new(0.0, -1000.0));
    for _ in 0..10 {
        controller.update();
        controller.late_update();
        assert!(controller.camera().pitch() >= -0.5 - 0.0001);
    }
    assert!((controller.camera().pitch() + 0.5).abs() < 0.0001);
}

#[test]
fn test_inverted_look_pitches_down() {
    let config = MovementConfig {
        invert_y: true,
        ..MovementConfig::default()
    };
    let mut controller = controller_with(config, InputSnapshot::looking(Vec2::new(0.0, 100.0)));

    controller.update();
    assert_eq!(controller.state().inversion_sign, -1);
    controller.late_update();

    // 100 * 0.002 = 0.2 rad, inverted
    assert!((controller.camera().pitch() + 0.2).abs() < 0.0001);
}

#[test]
fn test_set_inversion_toggles_sign() {
    let mut controller = controller(InputSnapshot::default());
    assert_eq!(controller.state().inversion_sign, 1);

    controller.set_inversion(true);
    controller.update();
    assert_eq!(controller.state().inversion_sign, -1);

    controller.set_inversion(false);
    controller.update();
    assert_eq!(controller.state().inversion_sign, 1);
}

#[test]
fn test_frozen_host_skips_look() {
    let mut controller = controller(InputSnapshot::looking(Vec2::new(300.0, 300.0)));
    controller.update();
    controller.host_mut().set_time_scale(0.0);

    assert_eq!(controller.late_update(), LookStep::Skipped);
    assert_eq!(controller.body().rotation(), Quat::IDENTITY);
    assert_eq!(controller.camera().local_rotation(), Quat::IDENTITY);
}

#[test]
fn test_look_turns_movement_direction() {
    // Quarter turn to the right, then walk forward
    let quarter = std::f32::consts::FRAC_PI_2 / 0.002;
    let mut controller = controller(InputSnapshot::looking(Vec2::new(quarter, 0.0)));
    controller.update();
    controller.late_update();

    *controller.input_mut() = InputSnapshot::moving(Vec2::new(0.0, 1.0));
    controller.update();
    let MotionStep::Propelled(force) = controller.fixed_update() else {
        panic!("expected a force");
    };
    assert!((force - Vec3::new(5.0, 0.0, 0.0)).length() < 0.001);
}

#[test]
fn test_camera_view_follows_look() {
    // Quarter turn to the right with a slight upward pitch
    let quarter = std::f32::consts::FRAC_PI_2 / 0.002;
    let mut controller = controller(InputSnapshot::looking(Vec2::new(quarter, 100.0)));
    controller.body_mut().position = Vec3::new(2.0, 1.0, -3.0);
    controller.update();
    controller.late_update();

    let body = controller.body();
    let camera = controller.camera();

    let facing = camera.forward(body.rotation());
    let expected = Vec3::new(0.2f32.cos(), 0.2f32.sin(), 0.0);
    assert!((facing - expected).length() < 0.001);

    let eye = camera.eye_position(body.position, body.rotation());
    assert!((eye - Vec3::new(2.0, 1.6, -3.0)).length() < 0.0001);
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_builder_reports_missing_host() {
    let result = SnapshotController::builder()
        .body(floating_body())
        .camera(CameraRig::new())
        .input(InputSnapshot::default())
        .build();

    assert!(matches!(result, Err(ControllerError::MissingHost)));
}

#[test]
fn test_builder_reports_missing_input() {
    let result = SnapshotController::builder()
        .body(floating_body())
        .camera(CameraRig::new())
        .host(HeadlessHost::new())
        .build();

    assert!(matches!(result, Err(ControllerError::MissingInput)));
}

#[test]
fn test_config_loaded_from_json() {
    let config = MovementConfig::from_json_str(r#"{ "speed": 8.0, "invert_y": true }"#).unwrap();
    let mut controller = controller_with(config, InputSnapshot::moving(Vec2::new(1.0, 0.0)));

    controller.update();
    assert_eq!(controller.state().inversion_sign, -1);
    assert_eq!(
        controller.fixed_update(),
        MotionStep::Propelled(Vec3::new(8.0, 0.0, 0.0))
    );
}
