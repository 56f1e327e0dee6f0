//! Frame rendering
//!
//! One frame per invocation: sync the viewport, write the per-frame
//! uniforms, clear to black, draw the quad, present. The caller re-arms
//! the next frame from the returned outcome.

use crate::gpu::GpuContext;
use crate::session::RenderSession;
use glint_renderer::VERTEX_COUNT;

/// Signal returned by the frame task to its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was drawn; schedule the next one.
    Continue,
    /// Nothing was drawn this round; schedule the next one anyway.
    Skipped,
}

/// Render a single frame.
pub fn render_frame(session: &mut RenderSession, gpu: &GpuContext) -> FrameOutcome {
    session.frame_count = session.frame_count.wrapping_add(1);

    // Log frame 1 and then every ~5 seconds at 60fps.
    if session.frame_count == 1 || session.frame_count.is_multiple_of(300) {
        log::debug!(
            "Frame {} ({}x{}, pointer {:?})",
            session.frame_count,
            session.viewport.width,
            session.viewport.height,
            session.pointer.as_f32()
        );
    }

    // The window is the source of truth for drawable size; resize events
    // can be coalesced away on some platforms, so recheck every frame.
    let size = session.window.inner_size();
    session.resize(&gpu.device, size.width, size.height);

    if size.width == 0 || size.height == 0 {
        return FrameOutcome::Skipped;
    }

    let frame = match session.surface.get_current_texture() {
        Ok(f) => f,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            log::warn!("Surface lost, reconfiguring");
            session
                .surface
                .configure(&gpu.device, &session.surface_config);
            return FrameOutcome::Skipped;
        }
        Err(e) => {
            log::warn!("Failed to get surface texture: {:?}", e);
            return FrameOutcome::Skipped;
        }
    };
    let view = frame.texture.create_view(&Default::default());

    session.uniforms.update(
        &gpu.queue,
        session.viewport.as_f32(),
        session.pointer.as_f32(),
    );

    let mut encoder = gpu.device.create_command_encoder(&Default::default());
    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Quad Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(session.program.pipeline());
        pass.set_bind_group(0, session.uniforms.bind_group(), &[]);
        session.quad.bind(&mut pass);
        pass.draw(0..VERTEX_COUNT, 0..1);
    }

    gpu.queue.submit(std::iter::once(encoder.finish()));
    frame.present();

    FrameOutcome::Continue
}
