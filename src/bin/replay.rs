//! Replay - Headless Controller Runner
//!
//! Run with: `cargo run --bin replay -- <script.json> [config.json]`
//!
//! Feeds a JSON input script through the controller against a capsule body
//! and an in-memory host, one script frame per displayed frame. Per-frame
//! state is logged at `info` (`RUST_LOG=debug` adds per-step speed), and a
//! summary is printed at the end. See `demos/walk_and_pause.json`.

use anyhow::{Context, bail};
use first_person_engine::camera::{CameraRig, CameraTransform};
use first_person_engine::host::{FixedStepConfig, HeadlessHost};
use first_person_engine::input::{InputScript, ScriptedInput};
use first_person_engine::logging;
use first_person_engine::physics::{CapsuleBody, EulerRot, PhysicsBody};
use first_person_engine::player::{
    FrameDriver, MovementConfig, PlayerController, TracingDiagnostics,
};
use tracing::info;

/// Fixed steps between speed samples at `debug`
const SPEED_LOG_INTERVAL: u32 = 25;

fn main() -> anyhow::Result<()> {
    logging::init().context("failed to install logger")?;

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next() else {
        bail!("usage: replay <script.json> [config.json]");
    };

    let script = InputScript::load(&script_path)
        .with_context(|| format!("failed to load input script {script_path}"))?;
    let config = match args.next() {
        Some(path) => MovementConfig::load(&path)
            .with_context(|| format!("failed to load movement config {path}"))?,
        None => MovementConfig::default(),
    };

    let mut controller = PlayerController::builder()
        .config(config)
        .body(CapsuleBody::standing_at(0.0, 0.0))
        .camera(CameraRig::new())
        .input(ScriptedInput::new(&script))
        .host(HeadlessHost::new())
        .diagnostics(TracingDiagnostics::new(SPEED_LOG_INTERVAL))
        .build()
        .context("failed to build player controller")?;

    let mut driver = FrameDriver::new(FixedStepConfig::default());
    let total_frames = script.total_frames();
    let mut fixed_steps = 0u64;
    let mut transitions = 0u32;

    info!(total_frames, frame_dt = script.frame_dt, "replay started");

    for frame in 0..total_frames {
        let report = driver.frame(&mut controller, script.frame_dt);
        fixed_steps += u64::from(report.steps);
        if report.transition.is_some() {
            transitions += 1;
        }

        let (heading, _, _) = controller.body().rotation().to_euler(EulerRot::YXZ);
        info!(
            frame,
            steps = report.steps,
            speed = report.speed,
            pitch = controller.camera().pitch(),
            heading,
            paused = report.paused,
            idle = controller.snapshot().is_idle(),
            grounded = controller.body().is_grounded(),
            "frame"
        );
    }

    let body = controller.body();
    let (heading, _, _) = body.rotation().to_euler(EulerRot::YXZ);
    println!("Frames:      {total_frames}");
    println!("Fixed steps: {fixed_steps}");
    println!("Transitions: {transitions}");
    println!("Paused:      {}", controller.state().paused);
    println!(
        "Position:    ({:.3}, {:.3}, {:.3})",
        body.position.x, body.position.y, body.position.z
    );
    println!("Speed:       {:.2}", body.speed());
    println!("Grounded:    {}", body.is_grounded());
    println!("Heading:     {heading:.3} rad");
    println!("Pitch:       {:.3} rad", controller.camera().pitch());
    let eye = controller.camera().eye_position(body.position, body.rotation());
    let facing = controller.camera().forward(body.rotation());
    println!("Eye:         ({:.3}, {:.3}, {:.3})", eye.x, eye.y, eye.z);
    println!("Facing:      ({:.3}, {:.3}, {:.3})", facing.x, facing.y, facing.z);
    println!("Host writes: {}", controller.host().writes());

    Ok(())
}
