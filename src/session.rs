//! Render session state
//!
//! The single context object owning everything the frame loop touches:
//! the surface and its configuration, the linked shader program, the
//! quad geometry, the uniform buffer, and the pointer/viewport state.
//! Created exactly once; the program is never rebuilt afterwards.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use winit::window::Window;

use crate::config::Config;
use crate::gpu::GpuContext;
use crate::input::{PointerState, ViewportState};
use glint_renderer::{FrameUniforms, ProgramBuilder, QuadGeometry, ShaderProgram, load_source};

pub struct RenderSession {
    pub window: Arc<Window>,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub viewport: ViewportState,
    pub pointer: PointerState,
    pub program: ShaderProgram,
    pub quad: QuadGeometry,
    pub uniforms: FrameUniforms,
    pub frame_count: u64,
}

impl RenderSession {
    /// One-time bootstrap: load both stage sources, compile and link the
    /// program, bind the quad and uniforms, and configure the surface.
    ///
    /// Any failure aborts before the frame loop is armed; no partially
    /// built session is ever observable.
    pub fn create(gpu: &GpuContext, window: Arc<Window>, config: &Config) -> Result<Self> {
        let surface = gpu
            .instance
            .create_surface(window.clone())
            .context("failed to create rendering surface")?;
        let caps = surface.get_capabilities(&gpu.adapter);
        let format = caps.formats[0];

        let size = window.inner_size();
        let viewport = ViewportState::new(size.width.max(1), size.height.max(1));

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: viewport.width,
            height: viewport.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&gpu.device, &surface_config);

        let vertex_source = load_source(&config.shader.vertex)?;
        let fragment_source = load_source(&config.shader.fragment)?;

        let mut builder = ProgramBuilder::new();
        builder.compile_vertex(&vertex_source)?;
        builder.compile_fragment(&fragment_source)?;
        let program = builder.link(&gpu.device, format)?;

        let quad = QuadGeometry::new(&gpu.device);
        let uniforms = FrameUniforms::new(&gpu.device, program.globals_layout());

        log::info!(
            "Render session ready ({}x{}, {:?})",
            viewport.width,
            viewport.height,
            format
        );

        Ok(Self {
            window,
            surface,
            surface_config,
            viewport,
            pointer: PointerState::default(),
            program,
            quad,
            uniforms,
            frame_count: 0,
        })
    }

    /// Apply a new drawable size, reconfiguring the surface only when it
    /// actually changed. Returns whether a reconfigure happened.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) -> bool {
        if !self.viewport.apply(width, height) {
            return false;
        }
        self.surface_config.width = self.viewport.width;
        self.surface_config.height = self.viewport.height;
        self.surface.configure(device, &self.surface_config);
        true
    }
}
