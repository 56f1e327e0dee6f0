//! glint-renderer - shader program bootstrap and full-screen quad drawing
//!
//! This crate provides:
//! - Shader source loading from disk
//! - Two-stage program compilation (naga-validated WGSL) and linking
//! - Full-screen quad geometry and per-frame uniform plumbing
//!
//! Stage validation is pure CPU work, so everything up to the link step
//! runs (and is tested) without a GPU.

pub mod error;
pub mod program;
pub mod quad;
pub mod source;
pub mod uniforms;

pub use error::{ShaderError, Stage};
pub use program::{CompiledStage, ProgramBuilder, ShaderProgram};
pub use quad::{QUAD_VERTICES, QuadGeometry, QuadVertex, VERTEX_COUNT, vertex_layout};
pub use source::load_source;
pub use uniforms::{FrameUniforms, Globals};
