use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::value::Section;
use super::ConfigError;

/// Source of named project configuration sections.
///
/// Every call returns an owned copy, so a section cannot change under a
/// generator once fetched.
pub trait ConfigProvider: std::fmt::Debug {
    fn project_config(&self, section: &str) -> Result<Section, ConfigError>;

    /// Root directory that output paths are resolved against.
    fn workspace_root(&self) -> &Path;
}

/// A provider holding its sections in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    root: PathBuf,
    sections: HashMap<String, Section>,
}

impl MemoryProvider {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            sections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, name: impl Into<String>, section: Section) -> Self {
        self.sections.insert(name.into(), section);
        self
    }
}

impl ConfigProvider for MemoryProvider {
    fn project_config(&self, section: &str) -> Result<Section, ConfigError> {
        self.sections
            .get(section)
            .cloned()
            .ok_or_else(|| ConfigError::SectionNotFound(section.to_string()))
    }

    fn workspace_root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Value;

    #[test]
    fn test_memory_provider_returns_copy() {
        let mut settings = Section::new();
        settings.insert("name".into(), Value::from("Pong"));
        let provider = MemoryProvider::new("/work").with_section("settings", settings.clone());

        let mut fetched = provider.project_config("settings").unwrap();
        fetched.insert("name".into(), Value::from("Changed"));

        assert_eq!(provider.project_config("settings").unwrap(), settings);
        assert_eq!(provider.workspace_root(), Path::new("/work"));
    }

    #[test]
    fn test_memory_provider_missing_section() {
        let provider = MemoryProvider::new("/work");
        let result = provider.project_config("plugins");
        assert!(matches!(result, Err(ConfigError::SectionNotFound(name)) if name == "plugins"));
    }
}
