//! Player application implementing winit ApplicationHandler
//!
//! Ticks the session once per redraw and shows the frame status in the
//! window title.

use crate::config::GameConfig;
use crate::session::GameSession;
use anyhow::Context;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

const WINDOW_TITLE: &str = "Hopper";

pub struct PlayerApp {
    pub session: GameSession,
    window_size: LogicalSize<f64>,
    window: Option<Arc<Window>>,
    title: String,
    pub fullscreen: bool,
}

impl PlayerApp {
    pub fn new(config: &GameConfig, fullscreen: bool) -> hopper_core::Result<Self> {
        Ok(Self {
            session: GameSession::new(config)?,
            window_size: LogicalSize::new(
                config.display.window_width as f64,
                config.display.window_height as f64,
            ),
            window: None,
            title: String::new(),
            fullscreen,
        })
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(self.window_size);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!(error = %e, "failed to create window");
                event_loop.exit();
                return;
            }
        };

        if self.fullscreen {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        self.session
            .resize_window(logical_width(window.inner_size(), window.scale_factor()));
        if let Err(e) = self.session.start() {
            tracing::error!(error = %e, "failed to start session");
            event_loop.exit();
            return;
        }

        self.window = Some(window);
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.session.stop();
        event_loop.exit();
    }

    fn toggle_fullscreen(&self) {
        if let Some(window) = &self.window {
            if window.fullscreen().is_some() {
                window.set_fullscreen(None);
            } else {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            }
        }
    }

    fn tick(&mut self) {
        self.session.tick();

        // Nothing consumes events in the window host yet; keep the queue bounded
        self.session.drain_events();

        let title = format!("{}  |  {}", WINDOW_TITLE, self.session.frame().status_line());
        if title != self.title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.title = title;
        }
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(window) = &self.window {
                    let width = logical_width(new_size, window.scale_factor());
                    self.session.resize_window(width);
                }
            }

            // Keys released while unfocused never reach us
            WindowEvent::Focused(false) => {
                self.session.input_mut().clear();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    if pressed && !event.repeat {
                        match key_code {
                            KeyCode::Escape => {
                                self.shutdown(event_loop);
                                return;
                            }
                            KeyCode::F11 => self.toggle_fullscreen(),
                            _ => {}
                        }
                    }
                    self.session.key_event(key_code, pressed);
                }
            }

            WindowEvent::RedrawRequested => {
                self.tick();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.session.is_running() {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Window width in logical pixels, so HiDPI displays keep the same play area
fn logical_width(size: PhysicalSize<u32>, dpi_scale: f64) -> f64 {
    if dpi_scale.is_finite() && dpi_scale > 0.0 {
        size.to_logical::<f64>(dpi_scale).width
    } else {
        size.width as f64
    }
}

/// Open a window and run the game until it is closed
pub fn run(config: GameConfig, fullscreen: bool) -> anyhow::Result<()> {
    let mut app = PlayerApp::new(&config, fullscreen).context("Failed to build game session")?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;

    app.session.stop();
    Ok(())
}
