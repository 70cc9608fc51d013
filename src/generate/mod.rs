//! Artifact generators: each turns configuration sections into render tasks.

mod build;
mod fonts;
mod header;

use std::path::PathBuf;

use crate::config::{ConfigProvider, Section};
use crate::Error;

pub use build::BuildFragmentGenerator;
pub use fonts::FontGenerator;
pub use header::HeaderGenerator;

pub const SETTINGS_SECTION: &str = "settings";
pub const ROM_HEADER_SECTION: &str = "romHeader";
pub const PLUGINS_SECTION: &str = "plugins";
pub const FONTS_SECTION: &str = "fonts";

/// One render task: a template, where its output goes, and what it sees.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub template_id: &'static str,
    /// Relative to the workspace root.
    pub output_path: PathBuf,
    pub context: Section,
}

impl Artifact {
    pub fn new(template_id: &'static str, output_path: impl Into<PathBuf>, context: Section) -> Self {
        Self {
            template_id,
            output_path: output_path.into(),
            context,
        }
    }
}

pub trait Generator: std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Builds every artifact of this generator.
    ///
    /// Nothing is rendered when this fails, so a missing section produces
    /// no output at all.
    fn artifacts(&self, provider: &dyn ConfigProvider) -> Result<Vec<Artifact>, Error>;
}
