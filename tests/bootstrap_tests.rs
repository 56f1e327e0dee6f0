//! Bootstrap sequencing functional tests
//!
//! Exercises the load → compile-vertex → compile-fragment sequence
//! against real files, asserting where the sequence halts on each kind
//! of failure. These run headlessly; pipeline linking needs a GPU device
//! and is covered by the validation error scope in the renderer crate.

mod common;

use common::{BootstrapHarness, BootstrapPhase, VALID_FRAGMENT, VALID_VERTEX};
use glint_renderer::{ShaderError, Stage};

// === Success path ===

#[test]
fn test_valid_pair_compiles_both_stages() {
    let harness = BootstrapHarness::new();
    harness.write_vertex(VALID_VERTEX);
    harness.write_fragment(VALID_FRAGMENT);

    let (phase, error) = harness.run();
    assert_eq!(phase, BootstrapPhase::Done);
    assert!(error.is_none());
}

#[test]
fn test_fragment_ignoring_uniforms_is_valid() {
    // A stage that never binds the globals is fine; the per-frame write
    // becomes a silent no-op.
    let harness = BootstrapHarness::new();
    harness.write_vertex(VALID_VERTEX);
    harness.write_fragment(
        r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.0, 1.0, 1.0);
}
"#,
    );

    let (phase, _) = harness.run();
    assert_eq!(phase, BootstrapPhase::Done);
}

// === Load failures ===

#[test]
fn test_missing_vertex_source_halts_before_any_compile() {
    let harness = BootstrapHarness::new();
    // Neither file exists; the vertex load must fail first.
    let error = harness.assert_halts_at(BootstrapPhase::LoadVertex);
    assert!(matches!(error, ShaderError::Load { .. }));
}

#[test]
fn test_missing_fragment_source_halts_after_vertex_compile() {
    let harness = BootstrapHarness::new();
    harness.write_vertex(VALID_VERTEX);

    let error = harness.assert_halts_at(BootstrapPhase::LoadFragment);
    match error {
        ShaderError::Load { path, .. } => assert!(path.ends_with("effect.wgsl")),
        other => panic!("expected Load error, got {other}"),
    }
}

// === Compile failures ===

#[test]
fn test_vertex_syntax_error_halts_before_fragment() {
    let harness = BootstrapHarness::new();
    harness.write_vertex("@vertex fn vs_main( {");
    // Deliberately no fragment file: if the sequence ran past the vertex
    // compile it would report a fragment Load error instead.

    let error = harness.assert_halts_at(BootstrapPhase::CompileVertex);
    assert_eq!(error.stage(), Some(Stage::Vertex));
}

#[test]
fn test_fragment_syntax_error_reports_fragment_stage() {
    let harness = BootstrapHarness::new();
    harness.write_vertex(VALID_VERTEX);
    harness.write_fragment("this is not wgsl");

    let error = harness.assert_halts_at(BootstrapPhase::CompileFragment);
    assert_eq!(error.stage(), Some(Stage::Fragment));
}

#[test]
fn test_vertex_without_entry_point_fails_vertex_compile() {
    let harness = BootstrapHarness::new();
    // Validates as a module but declares no vertex entry point.
    harness.write_vertex(VALID_FRAGMENT);
    harness.write_fragment(VALID_FRAGMENT);

    let error = harness.assert_halts_at(BootstrapPhase::CompileVertex);
    assert_eq!(error.stage(), Some(Stage::Vertex));
}

#[test]
fn test_compile_diagnostic_is_not_empty() {
    let harness = BootstrapHarness::new();
    harness.write_vertex("@vertex fn vs_main() -> f32 { return; }");
    harness.write_fragment(VALID_FRAGMENT);

    let error = harness.assert_halts_at(BootstrapPhase::CompileVertex);
    match error {
        ShaderError::Compile { log, .. } => assert!(!log.is_empty()),
        other => panic!("expected Compile error, got {other}"),
    }
}

// === Shipped shader contract ===

#[test]
fn test_bundled_shaders_compile() {
    let quad = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/shaders/quad.wgsl"
    ))
    .expect("bundled vertex stage readable");
    let glow = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/shaders/glow.wgsl"
    ))
    .expect("bundled fragment stage readable");

    let harness = BootstrapHarness::new();
    harness.write_vertex(&quad);
    harness.write_fragment(&glow);

    let (phase, _) = harness.run();
    assert_eq!(phase, BootstrapPhase::Done);
}
