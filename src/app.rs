use std::sync::Arc;

use anyhow::{Context, Result};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::camera::Camera;
use crate::clock::{Clock, FpsCounter};
use crate::config::ViewerConfig;
use crate::controls::FlightControls;
use crate::input::{Button, Controller, WinitController};
use crate::lorenz::Simulation;
use crate::renderer::{Overlay, RenderError, TrajectoryRenderer};

/// Driving loop: input -> camera/simulation -> renderer, once per frame
pub struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    renderer: Option<TrajectoryRenderer>,
    camera: Camera,
    controls: FlightControls,
    input: WinitController,
    simulation: Simulation,
    uploaded_generation: Option<u64>,
    clock: Clock,
    fps: FpsCounter,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: ViewerConfig) -> Result<Self> {
        config.validate().context("invalid viewer configuration")?;

        let simulation = Simulation::new(config.params, config.scenario)
            .context("initial integration failed")?;

        let mut camera = Camera::new();
        camera.move_global(config.camera_start());

        Ok(Self {
            controls: FlightControls::new(config.move_amount, config.sensitivity),
            config,
            window: None,
            renderer: None,
            camera,
            input: WinitController::new(),
            simulation,
            uploaded_generation: None,
            clock: Clock::new(),
            fps: FpsCounter::default(),
            error: None,
        })
    }

    /// Fatal error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn set_mouse_looking(&mut self, looking: bool) {
        self.controls.set_mouse_looking(looking);
        let Some(window) = &self.window else {
            return;
        };

        if looking {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                log::warn!("Cursor grab unavailable: {}", e);
            }
        } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Failed to release cursor: {}", e);
        }
        window.set_cursor_visible(!looking);
    }

    /// Buttons and focus changes always reach the controller, so a release
    /// over the overlay cannot leave a button held.
    fn route_input(&mut self, event: &WindowEvent, overlay_consumed: bool) {
        let always = matches!(
            event,
            WindowEvent::KeyboardInput { .. }
                | WindowEvent::MouseInput { .. }
                | WindowEvent::Focused(_)
        );
        if overlay_consumed && !always {
            return;
        }
        self.input.process_event(event);
    }

    fn update(&mut self) {
        let looking = self.input.is_down(Button::MouseRight);
        if looking != self.controls.is_mouse_looking() {
            self.set_mouse_looking(looking);
        }

        self.controls.update(&mut self.camera, &self.input);

        if let Some((coefficient, delta)) = FlightControls::coefficient_change(&self.input) {
            if let Err(e) = self.simulation.adjust(coefficient, delta) {
                log::error!("Re-integration failed, keeping previous trajectory: {}", e);
            }
        }

        self.input.end_frame();
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.record(delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        self.update();

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        if self.uploaded_generation != Some(self.simulation.generation()) {
            renderer.upload_trajectory(self.simulation.points(), self.config.gradient);
            self.uploaded_generation = Some(self.simulation.generation());
        }

        let params = self.simulation.params();
        let overlay = Overlay {
            sigma: params.sigma,
            r: params.r,
            b: params.b,
            move_amount: self.controls.move_amount(),
            fps: self.fps.fps(),
            samples: self.simulation.trajectory().len(),
        };
        let overlay = self.config.show_overlay.then_some(&overlay);

        match renderer.render(window, self.camera.view_matrix(), overlay) {
            Ok(()) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                renderer.reconfigure();
            }
            Err(e) => log::error!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, anyhow::Error::new(e).context("failed to create window"));
                return;
            }
        };

        let renderer = match pollster::block_on(TrajectoryRenderer::new(
            window.clone(),
            self.config.projection,
        )) {
            Ok(renderer) => renderer,
            Err(e) => {
                self.fail(event_loop, anyhow::Error::new(e).context("failed to initialise renderer"));
                return;
            }
        };

        log::info!(
            "Renderer ready at {}x{}",
            renderer.size().width,
            renderer.size().height
        );
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.uploaded_generation = None;
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let overlay_consumed = match (&mut self.renderer, &self.window) {
            (Some(renderer), Some(window)) if self.config.show_overlay => {
                renderer.handle_event(window, &event)
            }
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => self.route_input(&other, overlay_consumed),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if self.controls.is_mouse_looking() {
            self.input.process_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
