//! `vuengine-codegen`: regenerates config and font sources for the project
//! in the current directory.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vuengine_codegen::{Pipeline, TeraRenderSink, TomlProvider};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vuengine_codegen=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "code generation failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), vuengine_codegen::Error> {
    let root = std::env::current_dir().map_err(vuengine_codegen::Error::WorkspaceRoot)?;

    let report = Pipeline::builder()
        .with_provider(TomlProvider::new(&root))
        .with_sink(TeraRenderSink::builtin()?)
        .build()?
        .run()?;

    tracing::info!(files = report.written.len(), root = %root.display(), "code generation finished");
    Ok(())
}
