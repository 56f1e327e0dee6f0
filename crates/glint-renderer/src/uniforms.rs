//! Per-frame uniform inputs.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Values every draw call reads: drawable size and pointer position,
/// both in pixels. The pointer origin is bottom-left, matching the
/// fragment-stage coordinate convention.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Globals {
    pub resolution: [f32; 2],
    pub mouse: [f32; 2],
}

/// The uniform buffer and bind group shared by every frame.
///
/// Written once per frame whether or not the fragment stage declares the
/// uniforms; a stage that ignores them makes the write a silent no-op.
pub struct FrameUniforms {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl FrameUniforms {
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let globals = Globals {
            resolution: [1.0, 1.0],
            mouse: [0.0, 0.0],
        };

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Globals Buffer"),
            contents: bytemuck::cast_slice(&[globals]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { buffer, bind_group }
    }

    /// Write the current resolution and pointer position.
    pub fn update(&self, queue: &wgpu::Queue, resolution: [f32; 2], mouse: [f32; 2]) {
        let globals = Globals { resolution, mouse };
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[globals]));
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globals_are_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<Globals>(), 16);
    }

    #[test]
    fn globals_field_order_is_resolution_then_mouse() {
        let globals = Globals {
            resolution: [800.0, 600.0],
            mouse: [100.0, 550.0],
        };
        let floats: [f32; 4] = bytemuck::cast(globals);
        assert_eq!(floats, [800.0, 600.0, 100.0, 550.0]);
    }

    #[test]
    fn globals_round_trip_through_bytes() {
        let globals = Globals {
            resolution: [1920.0, 1080.0],
            mouse: [4.0, 8.0],
        };
        let bytes = bytemuck::bytes_of(&globals);
        assert_eq!(bytes.len(), 16);
        let back: Globals = bytemuck::pod_read_unaligned(bytes);
        assert_eq!(back, globals);
    }
}
