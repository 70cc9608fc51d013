//! The generation run: wires a configuration provider to a render sink.

use std::path::PathBuf;

use crate::config::ConfigProvider;
use crate::error::GeneratorFailure;
use crate::generate::{BuildFragmentGenerator, FontGenerator, Generator, HeaderGenerator};
use crate::render::RenderSink;
use crate::Error;

/// Optional file whose presence is exposed to `config.h` as `data.pluginsConfigFileExists`.
pub const PLUGINS_CONFIG_FILE: &str = "source/pluginsConfig.h";

/// A single generation run over one workspace.
///
/// The provider and sink are owned by the run; nothing is shared globally.
///
/// ## Example
///
/// ```no_run
/// use vuengine_codegen::{Pipeline, TeraRenderSink, TomlProvider};
///
/// let pipeline = Pipeline::builder()
///     .with_provider(TomlProvider::new("."))
///     .with_sink(TeraRenderSink::builtin()?)
///     .build()?;
///
/// let report = pipeline.run()?;
/// println!("wrote {} files", report.written.len());
/// # Ok::<(), vuengine_codegen::Error>(())
/// ```
#[derive(Debug)]
pub struct Pipeline {
    provider: Box<dyn ConfigProvider>,
    sink: Box<dyn RenderSink>,
}

/// Files written by a successful run, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
}

impl Pipeline {
    /// Creates a new builder for constructing a `Pipeline`.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Checks for the plugins config file, then generates every artifact.
    pub fn run(&self) -> Result<GenerationReport, Error> {
        let plugins_config = self.provider.workspace_root().join(PLUGINS_CONFIG_FILE);
        let plugins_config_file_exists = plugins_config.is_file();
        tracing::debug!(
            path = %plugins_config.display(),
            exists = plugins_config_file_exists,
            "checked plugins config file"
        );
        self.generate(plugins_config_file_exists)
    }

    /// Runs the header, build fragment and font generators in that order.
    ///
    /// A failing generator does not stop the ones after it. All failures are
    /// returned together once every generator has been attempted.
    pub fn generate(&self, plugins_config_file_exists: bool) -> Result<GenerationReport, Error> {
        let header = HeaderGenerator::new(plugins_config_file_exists);
        let generators: [&dyn Generator; 3] = [&header, &BuildFragmentGenerator, &FontGenerator];

        let mut report = GenerationReport::default();
        let mut failures = Vec::new();

        for generator in generators {
            let artifacts = match generator.artifacts(self.provider.as_ref()) {
                Ok(artifacts) => artifacts,
                Err(error) => {
                    tracing::error!(generator = generator.name(), %error, "generator failed");
                    failures.push(GeneratorFailure {
                        generator: generator.name(),
                        error,
                    });
                    continue;
                }
            };

            for artifact in artifacts {
                let path = self.provider.workspace_root().join(&artifact.output_path);
                match self
                    .sink
                    .render_to_file(artifact.template_id, &path, &artifact.context)
                {
                    Ok(()) => report.written.push(path),
                    Err(source) => {
                        let error = Error::Render { path, source };
                        tracing::error!(generator = generator.name(), %error, "render failed");
                        failures.push(GeneratorFailure {
                            generator: generator.name(),
                            error,
                        });
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(Error::Generation(failures))
        }
    }
}

/// Builder for constructing a [`Pipeline`].
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct PipelineBuilder {
    provider: Option<Box<dyn ConfigProvider>>,
    sink: Option<Box<dyn RenderSink>>,
}

impl PipelineBuilder {
    /// Sets where configuration sections and the workspace root come from.
    pub fn with_provider(mut self, provider: impl ConfigProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Sets where rendered artifacts go.
    pub fn with_sink(mut self, sink: impl RenderSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Builds the `Pipeline`.
    ///
    /// Returns an error if the provider or the sink is missing.
    pub fn build(self) -> Result<Pipeline, Error> {
        Ok(Pipeline {
            provider: self.provider.ok_or(Error::MissingProvider)?,
            sink: self.sink.ok_or(Error::MissingSink)?,
        })
    }
}
