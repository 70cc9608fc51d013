use crate::config::{merge, ConfigProvider};
use crate::Error;

use super::{Artifact, Generator, FONTS_SECTION};

pub const FONT_SOURCE_TEMPLATE: &str = "Fonts.c";
pub const FONT_SOURCE_OUTPUT: &str = "assets/fonts/Fonts.c";
pub const FONT_HEADER_TEMPLATE: &str = "Fonts.h";
pub const FONT_HEADER_OUTPUT: &str = "source/assets/Fonts.h";

/// Renders `fonts` into a font source file and its header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontGenerator;

impl Generator for FontGenerator {
    fn name(&self) -> &'static str {
        "fonts"
    }

    fn artifacts(&self, provider: &dyn ConfigProvider) -> Result<Vec<Artifact>, Error> {
        let fonts = provider.project_config(FONTS_SECTION)?;
        let context = merge([&fonts])?;

        Ok(vec![
            Artifact::new(FONT_SOURCE_TEMPLATE, FONT_SOURCE_OUTPUT, context.clone()),
            Artifact::new(FONT_HEADER_TEMPLATE, FONT_HEADER_OUTPUT, context),
        ])
    }
}
