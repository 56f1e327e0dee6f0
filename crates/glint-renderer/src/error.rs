//! Bootstrap error taxonomy.
//!
//! Every variant is a one-time setup failure: nothing here is recoverable
//! at frame time, and a failed bootstrap never activates a program.

use std::path::PathBuf;

use thiserror::Error;

/// A single programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Vertex => f.write_str("vertex"),
            Stage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failures that abort the shader-program bootstrap.
#[derive(Debug, Error)]
pub enum ShaderError {
    /// A stage source file could not be read.
    #[error("failed to load shader source {path:?}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stage failed to parse or validate. `log` carries the full
    /// diagnostic rendered against the source text.
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: Stage, log: String },

    /// Two valid stages could not be linked into a pipeline.
    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
}

impl ShaderError {
    /// The stage a compile failure belongs to, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            ShaderError::Compile { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
