//! Check command implementation.

use anyhow::{Context, Result};
use inclint_walk::{default_walkers, EngineBuilder};
use std::path::Path;

use crate::config_resolver::{self, Origin};
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let resolved = config_resolver::load(path, config_path)?;
    if let Origin::Global(p) = &resolved.origin {
        tracing::info!("Using global config: {}", p.display());
    }
    let config = resolved.config;

    let fail_on = config.fail_on().context("Invalid fail_on severity")?;

    let mut builder = EngineBuilder::from_config(&config)
        .context("Invalid configuration")?
        .root(path);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    for walker in default_walkers() {
        builder = builder.walker_box(walker);
    }

    let engine = builder.build().context("Failed to build scan engine")?;

    tracing::info!("Scanning {:?}", path);

    let report = engine.run().context("Scan failed")?;

    super::output::print(&report, format)?;

    if report.has_findings_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}
