//! Build-time code generation for VUEngine projects.
//!
//! Project configuration sections are deep-merged into one context per
//! artifact and rendered into `source/config.h`, `config.make` and the
//! font source and header.

pub mod coerce;
pub mod config;
mod error;
pub mod generate;
pub mod pipeline;
pub mod render;
pub mod symbol;

pub use config::{ConfigError, ConfigProvider, MemoryProvider, Section, TomlProvider, Value};
pub use error::{Error, GeneratorFailure};
pub use pipeline::{GenerationReport, Pipeline};
pub use render::{RenderError, RenderSink, TeraRenderSink};
