//! Application event loop
//!
//! [`App`] wires a [`Demo`] to a window and the render system. Frames are
//! drawn on demand: after startup, resizes, mode changes and redraw keys.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use starlab_render::context::ContextError;

use crate::config::AppConfig;
use crate::demo::{Demo, DemoResponse};
use crate::input::{InputAction, InputMapper};
use crate::systems::{RenderError, RenderSystem, WindowError, WindowSystem};

/// Fatal application error
#[derive(Debug)]
pub enum AppError {
    EventLoop(winit::error::EventLoopError),
    Window(WindowError),
    Context(ContextError),
    OutOfMemory,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            AppError::Window(e) => write!(f, "{}", e),
            AppError::Context(e) => write!(f, "{}", e),
            AppError::OutOfMemory => write!(f, "GPU out of memory"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<WindowError> for AppError {
    fn from(e: WindowError) -> Self {
        AppError::Window(e)
    }
}

impl From<ContextError> for AppError {
    fn from(e: ContextError) -> Self {
        AppError::Context(e)
    }
}

/// Main application state
pub struct App<D: Demo> {
    config: AppConfig,
    demo: D,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// First fatal error, reported after the loop exits
    error: Option<AppError>,
}

impl<D: Demo> App<D> {
    pub fn new(config: AppConfig, demo: D) -> Self {
        Self {
            config,
            demo,
            window: None,
            render: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    /// Create the render system for the current window and upload the demo's geometry
    fn create_render(&mut self) -> Result<(), AppError> {
        let Some(window) = &self.window else {
            return Ok(());
        };
        let mut render = RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        )?;
        render.upload(&self.demo.batches());
        let (width, height) = render.size();
        log::info!("Render system ready at {}x{}", width, height);
        self.render = Some(render);
        window.request_redraw();
        Ok(())
    }

    /// Re-upload geometry after a mode change
    fn rebuild(&mut self) {
        if let Some(render) = &mut self.render {
            render.upload(&self.demo.batches());
        }
        if let Some(window) = &self.window {
            window.update_title(&self.demo.mode_label());
            window.request_redraw();
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            _ => match self.demo.handle(action) {
                DemoResponse::Rebuild => self.rebuild(),
                DemoResponse::Redraw => {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                DemoResponse::Ignored => {}
            },
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // Nothing to present into; the next Resized event requests a redraw
        let drawable = self.window.as_ref().is_some_and(|w| w.is_drawable());
        if !drawable {
            return;
        }
        let background = self.demo.background();
        let Some(render) = &mut self.render else {
            return;
        };
        match render.render_frame(background) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                // Surface was reconfigured; retry once the window still has area
                if let Some(window) = self.window.as_ref().filter(|w| w.is_drawable()) {
                    window.request_redraw();
                }
            }
            Err(RenderError::DeviceLost) => {
                log::warn!("Recreating GPU resources after device loss");
                render.release_meshes();
                self.render = None;
                if let Err(e) = self.create_render() {
                    self.fail(event_loop, e);
                }
            }
            Err(RenderError::OutOfMemory) => self.fail(event_loop, AppError::OutOfMemory),
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl<D: Demo> ApplicationHandler for App<D> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match WindowSystem::create(event_loop, &self.config.window, self.demo.name()) {
            Ok(window) => {
                window.update_title(&self.demo.mode_label());
                self.window = Some(window);
            }
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        }

        if let Err(e) = self.create_render() {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

/// Load configuration, falling back to defaults on error
///
/// The error is returned alongside so it can be logged once logging is up.
pub fn load_config() -> (AppConfig, Option<crate::config::ConfigError>) {
    match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Initialise `env_logger`, using `debug.log_level` when `RUST_LOG` is unset
pub fn init_logging(config: &AppConfig) {
    let env = env_logger::Env::default().default_filter_or(config.debug.log_level.as_str());
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Run `demo` until its window closes
pub fn run<D: Demo>(config: AppConfig, demo: D) -> Result<(), AppError> {
    log::info!("Starting {}", demo.name());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, demo);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
