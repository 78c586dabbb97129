//! CSV to Mermaid conversion

use anyhow::{Context, Result};

use super::app::Cli;
use super::output::Output;
use crate::domain::{render, suppressed_links};
use crate::storage::{Config, IssueSource, RenderConfig};

/// Resolves configuration from files and flags
///
/// The direction flag is checked before any file is touched.
fn resolve_config(cli: &Cli, output: &Output) -> Result<RenderConfig> {
    cli.direction()?;

    let config = Config::load(cli.config.as_deref())?;
    if config.sources.is_empty() {
        output.verbose_ctx("config", "No config files found, using defaults");
    }
    for source in &config.sources {
        output.verbose_ctx("config", &format!("Loaded {}", source.display()));
    }

    let mut render_config = config.render;
    cli.apply_overrides(&mut render_config)?;

    output.verbose_ctx(
        "config",
        &format!(
            "direction={}, ignore_links={:?}",
            render_config.direction, render_config.ignore_links
        ),
    );

    Ok(render_config)
}

/// Print the effective configuration
pub fn print_config(cli: &Cli, output: &Output) -> Result<()> {
    let config = resolve_config(cli, output)?;
    output.document(&config.to_toml()?);
    Ok(())
}

/// Convert the CSV export and print the diagram
pub fn run(cli: &Cli, output: &Output) -> Result<()> {
    let config = resolve_config(cli, output)?;

    let source = IssueSource::new(&cli.csv_file);
    output.verbose_ctx("csv", &format!("Reading {}", source.path().display()));

    let issues = source
        .read_all()
        .context("Failed to import issues")?;

    if output.is_verbose() {
        for issue in &issues {
            output.verbose_ctx("parse", &issue.to_string());
        }
    }
    output.verbose_ctx("parse", &format!("Parsed {} issues", issues.len()));

    let options = config.to_render_options();
    let suppressed = suppressed_links(&issues, &options);
    if suppressed > 0 {
        output.verbose_ctx(
            "render",
            &format!("Suppressed {} link(s) of ignored kinds", suppressed),
        );
    }

    // Rendered in full before printing, so a failed run writes nothing
    let diagram = render(&issues, &options);
    output.document(&diagram);

    Ok(())
}
