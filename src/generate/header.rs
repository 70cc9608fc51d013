use crate::coerce::coerce_for_code_constant;
use crate::config::{merge, ConfigProvider, Section, Value};
use crate::symbol::normalize_keys;
use crate::Error;

use super::{Artifact, Generator, ROM_HEADER_SECTION, SETTINGS_SECTION};

pub const HEADER_TEMPLATE: &str = "config.h";
pub const HEADER_OUTPUT: &str = "source/config.h";

/// Sub-section of the merged context turned into `#define` constants.
const MACRO_SECTION: &str = "game";

/// Renders `settings` and `romHeader` into `source/config.h`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderGenerator {
    plugins_config_file_exists: bool,
}

impl HeaderGenerator {
    pub fn new(plugins_config_file_exists: bool) -> Self {
        Self {
            plugins_config_file_exists,
        }
    }

    fn overlay(&self) -> Section {
        let mut data = Section::new();
        data.insert(
            "pluginsConfigFileExists".into(),
            Value::Boolean(self.plugins_config_file_exists),
        );
        let mut overlay = Section::new();
        overlay.insert("data".into(), Value::Table(data));
        overlay
    }
}

impl Generator for HeaderGenerator {
    fn name(&self) -> &'static str {
        "header"
    }

    fn artifacts(&self, provider: &dyn ConfigProvider) -> Result<Vec<Artifact>, Error> {
        let settings = provider.project_config(SETTINGS_SECTION)?;
        let rom_header = provider.project_config(ROM_HEADER_SECTION)?;

        let mut context = merge([&settings, &rom_header, &self.overlay()])?;
        if let Some(Value::Table(game)) = context.get(MACRO_SECTION) {
            let constants = macro_constants(game)?;
            context.insert(MACRO_SECTION.into(), Value::Table(constants));
        }

        Ok(vec![Artifact::new(HEADER_TEMPLATE, HEADER_OUTPUT, context)])
    }
}

/// Upper-snake-cases every key and quotes every string value.
fn macro_constants(section: &Section) -> Result<Section, Error> {
    let constants = normalize_keys(section)?
        .into_iter()
        .map(|(symbol, value)| {
            let value = coerce_for_code_constant(&value);
            (symbol, value)
        })
        .collect();
    Ok(constants)
}
