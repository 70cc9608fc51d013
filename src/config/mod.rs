//! Configuration sections: values, providers and merging.

mod error;
mod file;
mod merge;
mod provider;
mod value;

pub use error::ConfigError;
pub use file::{TomlProvider, CONFIG_DIR};
pub use merge::{merge, MAX_DEPTH};
pub use provider::{ConfigProvider, MemoryProvider};
pub use value::{section_from_toml, Section, Value};
