//! TOML-file configuration provider.

use std::path::{Path, PathBuf};

use super::provider::ConfigProvider;
use super::value::{section_from_toml, Section};
use super::ConfigError;

/// Directory, relative to the workspace root, holding one TOML file per section.
pub const CONFIG_DIR: &str = "config";

/// A provider that reads section `<name>` from `<root>/config/<name>.toml`.
///
/// Files are read on every lookup; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct TomlProvider {
    root: PathBuf,
}

impl TomlProvider {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn section_path(&self, section: &str) -> PathBuf {
        self.root.join(CONFIG_DIR).join(format!("{section}.toml"))
    }
}

impl ConfigProvider for TomlProvider {
    fn project_config(&self, section: &str) -> Result<Section, ConfigError> {
        let path = self.section_path(section);
        let table = load_section_file(section, &path)?;
        tracing::debug!(section, path = %path.display(), "loaded configuration section");
        Ok(section_from_toml(table))
    }

    fn workspace_root(&self) -> &Path {
        &self.root
    }
}

fn load_section_file(section: &str, path: &Path) -> Result<toml::Table, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            section: section.to_string(),
            path: path.to_path_buf(),
            source: e,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ConfigError::SectionNotFound(section.to_string()))
        }
        Err(e) => Err(ConfigError::ReadError {
            section: section.to_string(),
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
