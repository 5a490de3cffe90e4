use miette::{Context, IntoDiagnostic, Result};
use moonbeam_codegen_typescript::CodegenProject;
use moonbeam_core::{ir::IrSpec, parse::Document};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use self::config::Main;

fn main() -> Result<()> {
    let main = Main::parse().unwrap_or_else(|err| err.exit());
    init_tracing(main.verbose);

    let source = std::fs::read_to_string(&main.input)
        .into_diagnostic()
        .with_context(|| format!("Failed to read `{}`", main.input.display()))?;

    let doc = Document::from_yaml(&source)
        .into_diagnostic()
        .context("Failed to parse OpenAPI document")?;

    if let Some(info) = &doc.info {
        tracing::info!("OpenAPI: {} (version {})", info.title, info.version);
    }

    let spec = IrSpec::from_doc(&doc);
    let project = CodegenProject::new(&spec, &main.codegen).into_diagnostic()?;

    let output = &main.output;
    if main.force && output.exists() {
        std::fs::remove_dir_all(output)
            .into_diagnostic()
            .with_context(|| format!("Failed to remove `{}`", output.display()))?;
    }
    std::fs::create_dir_all(output)
        .into_diagnostic()
        .with_context(|| format!("Failed to create `{}`", output.display()))?;

    let summary = project.summary();
    tracing::info!(
        "Generating {} declarations, {} enums, and {} functions across {} modules...",
        summary.declarations,
        summary.enums,
        summary.functions,
        summary.modules,
    );
    if summary.skipped > 0 {
        tracing::warn!("Skipped {} operations", summary.skipped);
    }
    if summary.failed > 0 {
        tracing::warn!("Failed to render {} units", summary.failed);
    }

    let written = project.write_to_disk(output);
    if written.failed > 0 {
        tracing::warn!(
            "Wrote {} files to `{}`; {} failed",
            written.written,
            output.display(),
            written.failed,
        );
    } else {
        tracing::info!("Wrote {} files to `{}`", written.written, output.display());
    }

    Ok(())
}

/// Logs to stderr at `info`, or `debug` with `--verbose`.
/// `RUST_LOG` overrides both.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
