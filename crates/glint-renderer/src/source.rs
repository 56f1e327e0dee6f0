//! Shader source loading.

use std::fs;
use std::path::Path;

use crate::error::ShaderError;

/// Read a stage source file as UTF-8 text.
///
/// No retry and no fallback: an unreadable source aborts the whole
/// bootstrap.
pub fn load_source(path: &Path) -> Result<String, ShaderError> {
    let text = fs::read_to_string(path).map_err(|source| ShaderError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded shader source {:?} ({} bytes)", path, text.len());
    Ok(text)
}
