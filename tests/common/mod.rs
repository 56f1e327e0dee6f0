//! Common test utilities and harness
//!
//! Drives the CPU-side half of the bootstrap (source load → vertex
//! compile → fragment compile) against real files in an isolated temp
//! directory, recording how far the sequence got for assertions. The
//! link step needs a GPU device and is not exercised here.

use std::path::PathBuf;

use glint_renderer::{ProgramBuilder, ShaderError, load_source};
use tempfile::TempDir;

/// How far a bootstrap attempt progressed before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    LoadVertex,
    CompileVertex,
    LoadFragment,
    CompileFragment,
    Done,
}

/// Bootstrap harness with an isolated shader directory
pub struct BootstrapHarness {
    _temp_dir: TempDir,
    pub vertex_path: PathBuf,
    pub fragment_path: PathBuf,
}

impl BootstrapHarness {
    /// Create a new isolated harness. No shader files exist yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let vertex_path = temp_dir.path().join("quad.wgsl");
        let fragment_path = temp_dir.path().join("effect.wgsl");

        Self {
            _temp_dir: temp_dir,
            vertex_path,
            fragment_path,
        }
    }

    pub fn write_vertex(&self, source: &str) {
        std::fs::write(&self.vertex_path, source).expect("Failed to write vertex source");
    }

    pub fn write_fragment(&self, source: &str) {
        std::fs::write(&self.fragment_path, source).expect("Failed to write fragment source");
    }

    /// Run the bootstrap in load/compile order, stopping at the first failure.
    /// Returns the phase that failed alongside the error, or `Done`.
    pub fn run(&self) -> (BootstrapPhase, Option<ShaderError>) {
        let vertex_source = match load_source(&self.vertex_path) {
            Ok(s) => s,
            Err(e) => return (BootstrapPhase::LoadVertex, Some(e)),
        };

        let mut builder = ProgramBuilder::new();
        if let Err(e) = builder.compile_vertex(&vertex_source) {
            return (BootstrapPhase::CompileVertex, Some(e));
        }

        let fragment_source = match load_source(&self.fragment_path) {
            Ok(s) => s,
            Err(e) => return (BootstrapPhase::LoadFragment, Some(e)),
        };

        if let Err(e) = builder.compile_fragment(&fragment_source) {
            return (BootstrapPhase::CompileFragment, Some(e));
        }

        assert!(builder.has_vertex() && builder.has_fragment());
        (BootstrapPhase::Done, None)
    }

    /// Assert the bootstrap halted at `phase`, returning the error.
    pub fn assert_halts_at(&self, phase: BootstrapPhase) -> ShaderError {
        let (reached, error) = self.run();
        assert_eq!(reached, phase, "bootstrap halted at {:?}", reached);
        error.expect("a halted bootstrap carries an error")
    }
}

/// A vertex stage satisfying the position-input contract.
pub const VALID_VERTEX: &str = r#"
@vertex
fn vs_main(@location(0) aVertexPosition: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(aVertexPosition, 0.0, 1.0);
}
"#;

/// A fragment stage consuming both per-frame uniforms.
pub const VALID_FRAGMENT: &str = r#"
struct Globals {
    iResolution: vec2<f32>,
    iMouse: vec2<f32>,
}
@group(0) @binding(0) var<uniform> globals: Globals;

@fragment
fn fs_main(@builtin(position) frag_coord: vec4<f32>) -> @location(0) vec4<f32> {
    let uv = frag_coord.xy / globals.iResolution;
    let d = distance(frag_coord.xy, globals.iMouse);
    return vec4<f32>(uv, d / 1000.0, 1.0);
}
"#;
