//! Rendering merged contexts into files.

mod engine;
mod filters;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Section;

pub use engine::TeraRenderSink;

/// Renders a template against a context and writes the result to disk.
pub trait RenderSink: std::fmt::Debug {
    /// Renders `template_id` with `context` into `output_path`.
    ///
    /// Missing parent directories are created and an existing file at
    /// `output_path` is replaced.
    fn render_to_file(
        &self,
        template_id: &str,
        output_path: &Path,
        context: &Section,
    ) -> Result<(), RenderError>;
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("failed to load templates from '{dir}': {source}")]
    Load {
        dir: PathBuf,
        source: tera::Error,
    },

    #[error("failed to render template '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
