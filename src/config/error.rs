use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("configuration section not found: {0}")]
    SectionNotFound(String),

    #[error("failed to read configuration section '{section}' from '{path}': {source}")]
    ReadError {
        section: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration section '{section}' from '{path}': {source}")]
    ParseError {
        section: String,
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("configuration nesting too deep at '{0}', possible cycle")]
    Cycle(String),
}
