//! First Person - Interactive Controller Sandbox
//!
//! Run with: `cargo run --bin first_person [config.json]`
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around (FPS style)
//! - ESC: Pause (frees the cursor)
//! - Enter / Left click: Resume
//!
//! Nothing is rendered; speed, pitch, eye position, view direction and pause
//! state are shown in the window title. Set `RUST_LOG=debug` to see per-step
//! speed and clock backlog.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use first_person_engine::camera::{CameraRig, CameraTransform};
use first_person_engine::host::{FixedStepConfig, WindowHost};
use first_person_engine::input::{DeviceInput, KeyCode};
use first_person_engine::logging;
use first_person_engine::physics::{CapsuleBody, PhysicsBody};
use first_person_engine::player::{FrameDriver, MovementConfig, PlayerController, SpeedReadout};
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{WindowAttributes, WindowId};

type Controller = PlayerController<CapsuleBody, CameraRig, DeviceInput, WindowHost>;

/// Seconds between window title refreshes
const TITLE_INTERVAL: f32 = 0.1;

/// Map a winit key to the engine's key code.
fn translate_key(key: WinitKey) -> KeyCode {
    match key {
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::ArrowUp => KeyCode::ArrowUp,
        WinitKey::ArrowDown => KeyCode::ArrowDown,
        WinitKey::ArrowLeft => KeyCode::ArrowLeft,
        WinitKey::ArrowRight => KeyCode::ArrowRight,
        WinitKey::Escape => KeyCode::Escape,
        WinitKey::Enter | WinitKey::NumpadEnter => KeyCode::Enter,
        WinitKey::Space => KeyCode::Space,
        WinitKey::KeyP => KeyCode::P,
        _ => KeyCode::Unknown,
    }
}

struct FirstPersonApp {
    config: MovementConfig,
    controller: Option<Controller>,
    driver: FrameDriver,
    readout: Rc<RefCell<SpeedReadout>>,
    last_frame: Instant,
    since_title: f32,
    /// Set when setup fails inside the event loop; returned from `main`
    error: Option<anyhow::Error>,
}

impl FirstPersonApp {
    fn new(config: MovementConfig) -> Self {
        Self {
            config,
            controller: None,
            driver: FrameDriver::new(FixedStepConfig::default()),
            readout: Rc::new(RefCell::new(SpeedReadout::new())),
            last_frame: Instant::now(),
            since_title: 0.0,
            error: None,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attrs = WindowAttributes::default()
            .with_title("First Person")
            .with_inner_size(PhysicalSize::new(1280, 720));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let controller = PlayerController::builder()
            .config(self.config)
            .body(CapsuleBody::standing_at(0.0, 0.0))
            .camera(CameraRig::new())
            .input(DeviceInput::new())
            .host(WindowHost::new(window))
            .diagnostics(Rc::clone(&self.readout))
            .build()
            .context("failed to build player controller")?;

        self.controller = Some(controller);
        self.last_frame = Instant::now();
        info!("window ready");
        Ok(())
    }

    fn frame(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let report = self.driver.frame(controller, delta_time);

        self.since_title += delta_time;
        if self.since_title >= TITLE_INTERVAL || report.transition.is_some() {
            self.since_title = 0.0;
            let body = controller.body();
            let camera = controller.camera();
            let eye = camera.eye_position(body.position, body.rotation());
            let facing = camera.forward(body.rotation());
            controller.host().window().set_title(&format!(
                "First Person | {} | Pitch: {:.2} | Eye: ({:.1}, {:.1}, {:.1}) | Facing: ({:.2}, {:.2}, {:.2}) | {}",
                self.readout.borrow().text(),
                camera.pitch(),
                eye.x,
                eye.y,
                eye.z,
                facing.x,
                facing.y,
                facing.z,
                controller.host().status_message(),
            ));
        }
    }
}

impl ApplicationHandler for FirstPersonApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.controller.is_none()
            && self.error.is_none()
            && let Err(err) = self.initialize(event_loop)
        {
            error!("{err:#}");
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            self.frame();
            return;
        }

        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    controller
                        .input_mut()
                        .handle_key(translate_key(key), event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                controller
                    .input_mut()
                    .handle_left_button(state == ElementState::Pressed);
            }
            WindowEvent::Focused(focused) => {
                controller.input_mut().handle_focus(focused);
                controller.host_mut().handle_focus(focused);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(controller) = &self.controller {
            controller.host().window().request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let (Some(controller), DeviceEvent::MouseMotion { delta }) =
            (self.controller.as_mut(), event)
        {
            controller
                .input_mut()
                .handle_mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init().context("failed to install logger")?;

    let config = match std::env::args().nth(1) {
        Some(path) => MovementConfig::load(&path)
            .with_context(|| format!("failed to load movement config {path}"))?,
        None => MovementConfig::default(),
    };

    println!("===========================================");
    println!("   First Person - Controller Sandbox");
    println!("===========================================");
    println!();
    println!("Controls: WASD Move, Mouse Look");
    println!("ESC: Pause, Enter / Left click: Resume");
    println!();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = FirstPersonApp::new(config);
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
