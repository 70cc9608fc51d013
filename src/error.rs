use std::fmt;
use std::path::PathBuf;

use crate::config::ConfigError;
use crate::render::RenderError;
use crate::symbol::SymbolError;
use thiserror::Error;

/// Top-level error type for vuengine-codegen.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("symbol error: {0}")]
    Symbol(#[from] SymbolError),

    #[error("failed to render '{path}': {source}")]
    Render { path: PathBuf, source: RenderError },

    #[error("template setup failed: {0}")]
    Templates(#[from] RenderError),

    #[error("cannot determine workspace root: {0}")]
    WorkspaceRoot(#[source] std::io::Error),

    #[error("code generation requires a configuration provider")]
    MissingProvider,

    #[error("code generation requires a render sink")]
    MissingSink,

    #[error("{} artifact generator(s) failed: {}", .0.len(), FailureList(.0))]
    Generation(Vec<GeneratorFailure>),
}

/// A generator that did not complete, with the reason.
#[derive(Debug)]
pub struct GeneratorFailure {
    pub generator: &'static str,
    pub error: Error,
}

impl fmt::Display for GeneratorFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} generator: {}", self.generator, self.error)
    }
}

struct FailureList<'a>(&'a [GeneratorFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}
