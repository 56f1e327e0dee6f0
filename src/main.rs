//! glint - full-window fragment shader viewer
//!
//! Loads two WGSL stage files, validates and links them into a single
//! pipeline, and redraws a full-screen quad every frame with the current
//! drawable size and pointer position as uniforms.

mod config;
mod gpu;
mod input;
mod render;
mod session;

use std::sync::Arc;

use anyhow::{Context as _, Result};

use config::Config;
use gpu::GpuContext;
use render::{FrameOutcome, render_frame};
use session::RenderSession;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

struct App {
    config: Config,
    gpu: Option<GpuContext>,
    session: Option<RenderSession>,
}

impl App {
    fn new() -> Self {
        Self {
            config: Config::load(),
            gpu: None,
            session: None,
        }
    }

    /// One-time setup: window, GPU context, render session. Arms the
    /// first frame; every later frame re-arms itself from its outcome.
    fn bootstrap(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let mut window_attrs = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        if self.config.window.fullscreen {
            window_attrs =
                window_attrs.with_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("failed to create window")?,
        );

        let gpu = GpuContext::new()?;
        let session = RenderSession::create(&gpu, window, &self.config)?;

        session.window.request_redraw();

        self.gpu = Some(gpu);
        self.session = Some(session);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_none() {
            if let Err(e) = self.bootstrap(event_loop) {
                // Bootstrap failures halt before the frame schedule ever
                // starts; the diagnostic chain carries the compile/link log.
                log::error!("Bootstrap failed: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let (Some(session), Some(gpu)) = (self.session.as_mut(), self.gpu.as_ref()) else {
            return;
        };
        if session.window.id() != id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                input::handle_resize(session, gpu, size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                input::handle_pointer_moved(session, position.x, position.y);
            }

            WindowEvent::RedrawRequested => match render_frame(session, gpu) {
                FrameOutcome::Continue | FrameOutcome::Skipped => {
                    session.window.request_redraw();
                }
            },

            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,glint=info"))
        .init();
    log::info!("glint starting");

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut App::new()).unwrap();
}
