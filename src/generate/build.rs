use crate::config::{merge, ConfigProvider};
use crate::Error;

use super::{Artifact, Generator, PLUGINS_SECTION, SETTINGS_SECTION};

pub const BUILD_TEMPLATE: &str = "config.make";
pub const BUILD_OUTPUT: &str = "config.make";

/// Renders `settings` and `plugins` into the `config.make` fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildFragmentGenerator;

impl Generator for BuildFragmentGenerator {
    fn name(&self) -> &'static str {
        "build fragment"
    }

    fn artifacts(&self, provider: &dyn ConfigProvider) -> Result<Vec<Artifact>, Error> {
        let settings = provider.project_config(SETTINGS_SECTION)?;
        let plugins = provider.project_config(PLUGINS_SECTION)?;
        let context = merge([&settings, &plugins])?;

        Ok(vec![Artifact::new(BUILD_TEMPLATE, BUILD_OUTPUT, context)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MemoryProvider, Section, Value};

    #[test]
    fn test_build_fragment_keeps_keys() {
        let mut build = Section::new();
        build.insert("dumpElf".into(), Value::from(true));
        let mut settings = Section::new();
        settings.insert("build".into(), Value::Table(build));

        let mut plugins = Section::new();
        plugins.insert(
            "plugins".into(),
            Value::Array(vec![Value::from("vuengine/plugins/Fade")]),
        );

        let provider = MemoryProvider::new("/work")
            .with_section("settings", settings)
            .with_section("plugins", plugins);

        let artifacts = BuildFragmentGenerator.artifacts(&provider).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].template_id, "config.make");

        let context = &artifacts[0].context;
        assert_eq!(context["build"].as_table().unwrap()["dumpElf"], Value::from(true));
        assert_eq!(
            context["plugins"],
            Value::Array(vec![Value::from("vuengine/plugins/Fade")])
        );
    }

    #[test]
    fn test_build_fragment_missing_plugins() {
        let provider = MemoryProvider::new("/work").with_section("settings", Section::new());

        let result = BuildFragmentGenerator.artifacts(&provider);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::SectionNotFound(name))) if name == "plugins"
        ));
    }
}
