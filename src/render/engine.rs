//! Tera-backed render sink.

use std::fs;
use std::path::Path;

use tera::{Context, Tera};

use super::filters;
use super::{RenderError, RenderSink};
use crate::config::Section;

const BUILTIN_TEMPLATES: [(&str, &str); 4] = [
    ("config.h", include_str!("../../templates/config.h")),
    ("config.make", include_str!("../../templates/config.make")),
    ("Fonts.c", include_str!("../../templates/Fonts.c")),
    ("Fonts.h", include_str!("../../templates/Fonts.h")),
];

/// Render sink wrapping a Tera instance.
///
/// Autoescaping is switched off: every artifact is C or Make source.
#[derive(Debug)]
pub struct TeraRenderSink {
    tera: Tera,
}

impl TeraRenderSink {
    /// Creates a sink holding the templates bundled with this crate.
    pub fn builtin() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES)
            .map_err(|e| RenderError::Load {
                dir: "<builtin>".into(),
                source: e,
            })?;
        Ok(Self::with_filters(tera))
    }

    /// Loads every file under `template_dir`, named by its relative path.
    pub fn from_dir(template_dir: &Path) -> Result<Self, RenderError> {
        let glob_pattern = template_dir.join("**").join("*");
        let tera = Tera::new(&glob_pattern.to_string_lossy()).map_err(|e| RenderError::Load {
            dir: template_dir.to_path_buf(),
            source: e,
        })?;
        Ok(Self::with_filters(tera))
    }

    fn with_filters(mut tera: Tera) -> Self {
        tera.autoescape_on(vec![]);
        tera.register_filter("upper_snake", filters::upper_snake);
        tera.register_filter("pad", filters::pad);
        Self { tera }
    }

    /// Renders `template_id` to a string without touching the filesystem.
    pub fn render(&self, template_id: &str, context: &Section) -> Result<String, RenderError> {
        if !self.tera.get_template_names().any(|name| name == template_id) {
            return Err(RenderError::TemplateNotFound(template_id.to_string()));
        }

        let render_err = |e| RenderError::Render {
            template: template_id.to_string(),
            source: e,
        };
        let context = Context::from_serialize(context).map_err(render_err)?;
        self.tera.render(template_id, &context).map_err(render_err)
    }
}

impl RenderSink for TeraRenderSink {
    fn render_to_file(
        &self,
        template_id: &str,
        output_path: &Path,
        context: &Section,
    ) -> Result<(), RenderError> {
        let content = self.render(template_id, context)?;

        let write_err = |e| RenderError::Write {
            path: output_path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(output_path, content).map_err(write_err)?;

        tracing::info!(template = template_id, path = %output_path.display(), "rendered artifact");
        Ok(())
    }
}
