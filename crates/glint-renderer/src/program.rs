//! Shader program construction.
//!
//! The classic two-stage bootstrap: each stage is compiled (parsed and
//! validated) on its own, and only two valid stages are linked into a
//! render pipeline. The first failure wins; callers stop at a failed
//! vertex stage without ever touching the fragment source, and link is
//! never attempted with a missing stage.

use crate::error::{ShaderError, Stage};
use crate::quad;

/// A parsed and validated stage, ready for linking.
///
/// Holds the original source (wgpu re-ingests it at link time) and the
/// entry point discovered during validation.
#[derive(Debug)]
pub struct CompiledStage {
    stage: Stage,
    source: String,
    entry_point: String,
}

impl CompiledStage {
    /// Parse and validate WGSL source as the given stage.
    ///
    /// The source must contain an entry point for the stage; a module
    /// that validates but has none is still a compile failure.
    pub fn compile(stage: Stage, source: &str) -> Result<Self, ShaderError> {
        let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Compile {
            stage,
            log: e.emit_to_string(source),
        })?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| ShaderError::Compile {
                stage,
                log: e.emit_to_string(source),
            })?;

        let naga_stage = match stage {
            Stage::Vertex => naga::ShaderStage::Vertex,
            Stage::Fragment => naga::ShaderStage::Fragment,
        };
        let entry_point = module
            .entry_points
            .iter()
            .find(|ep| ep.stage == naga_stage)
            .map(|ep| ep.name.clone())
            .ok_or_else(|| ShaderError::Compile {
                stage,
                log: format!("source declares no {stage} entry point"),
            })?;

        log::debug!("Compiled {} stage, entry point `{}`", stage, entry_point);

        Ok(Self {
            stage,
            source: source.to_owned(),
            entry_point,
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }
}

/// Staged builder for a two-stage program.
///
/// Holds at most one compiled stage of each kind. A compile failure
/// leaves the corresponding slot empty, so a partially built program can
/// never reach [`ProgramBuilder::link`] by accident.
#[derive(Default)]
pub struct ProgramBuilder {
    vertex: Option<CompiledStage>,
    fragment: Option<CompiledStage>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and attach the vertex stage.
    pub fn compile_vertex(&mut self, source: &str) -> Result<(), ShaderError> {
        self.vertex = Some(CompiledStage::compile(Stage::Vertex, source)?);
        Ok(())
    }

    /// Compile and attach the fragment stage.
    pub fn compile_fragment(&mut self, source: &str) -> Result<(), ShaderError> {
        self.fragment = Some(CompiledStage::compile(Stage::Fragment, source)?);
        Ok(())
    }

    pub fn has_vertex(&self) -> bool {
        self.vertex.is_some()
    }

    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Link both stages into a render pipeline targeting `target_format`.
    ///
    /// Module and pipeline creation run inside a validation error scope;
    /// a captured error (entry-point interface mismatch, binding
    /// mismatch, missing position input) surfaces as [`ShaderError::Link`]
    /// with the driver diagnostic instead of panicking the device.
    pub fn link(
        self,
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
    ) -> Result<ShaderProgram, ShaderError> {
        let (Some(vertex), Some(fragment)) = (self.vertex, self.fragment) else {
            return Err(ShaderError::Link {
                log: "both stages must compile before linking".to_string(),
            });
        };

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Vertex Stage"),
            source: wgpu::ShaderSource::Wgsl(vertex.source.as_str().into()),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Fragment Stage"),
            source: wgpu::ShaderSource::Wgsl(fragment.source.as_str().into()),
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shader Program Layout"),
            bind_group_layouts: &[&globals_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shader Program Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some(vertex.entry_point()),
                buffers: &[quad::vertex_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some(fragment.entry_point()),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(ShaderError::Link {
                log: err.to_string(),
            });
        }

        log::info!(
            "Shader program linked (`{}` + `{}`)",
            vertex.entry_point(),
            fragment.entry_point()
        );

        Ok(ShaderProgram {
            pipeline,
            globals_layout,
        })
    }
}

/// A fully linked program.
///
/// Either both stages validated and the pipeline was created, or no value
/// of this type exists — there is no partially linked state to observe.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
    globals_layout: wgpu::BindGroupLayout,
}

impl ShaderProgram {
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// The uniform interface the program was linked against; bind groups
    /// for the per-frame globals are created from this layout.
    pub fn globals_layout(&self) -> &wgpu::BindGroupLayout {
        &self.globals_layout
    }
}
