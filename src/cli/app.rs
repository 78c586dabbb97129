//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::convert;
use super::output::Output;
use crate::domain::{GraphDirection, ShapePair};
use crate::storage::{ConfigError, RenderConfig};

#[derive(Parser)]
#[command(name = "jira-mermaid")]
#[command(author, version, about = "Generate Mermaid code from a Jira CSV export")]
pub struct Cli {
    /// Path to the Jira CSV file
    #[arg(long, default_value = "issues.csv")]
    pub csv_file: PathBuf,

    /// Link kinds to ignore, comma separated [config default: Cloners]
    #[arg(long, value_delimiter = ',')]
    pub ignore_links: Option<Vec<String>>,

    /// The task node's left shape [default: "["]
    #[arg(long, allow_hyphen_values = true)]
    pub task_shape_left: Option<String>,

    /// The task node's right shape [default: "]"]
    #[arg(long, allow_hyphen_values = true)]
    pub task_shape_right: Option<String>,

    /// The bug node's left shape [default: "(("]
    #[arg(long, allow_hyphen_values = true)]
    pub bug_shape_left: Option<String>,

    /// The bug node's right shape [default: "))"]
    #[arg(long, allow_hyphen_values = true)]
    pub bug_shape_right: Option<String>,

    /// The spike node's left shape [default: "{"]
    #[arg(long, allow_hyphen_values = true)]
    pub spike_shape_left: Option<String>,

    /// The spike node's right shape [default: "}"]
    #[arg(long, allow_hyphen_values = true)]
    pub spike_shape_right: Option<String>,

    /// Left shape for epics and stories [default: "("]
    #[arg(long, allow_hyphen_values = true)]
    pub default_shape_left: Option<String>,

    /// Right shape for epics and stories [default: ")"]
    #[arg(long, allow_hyphen_values = true)]
    pub default_shape_right: Option<String>,

    /// The TO DO node color [default: #ff9933]
    #[arg(long)]
    pub todo_color: Option<String>,

    /// The CLOSED node color [default: #33cc33]
    #[arg(long)]
    pub closed_color: Option<String>,

    /// The IN PROGRESS node color [default: #33ccff]
    #[arg(long)]
    pub in_progress_color: Option<String>,

    /// The CODE REVIEW node color [default: #ffff66]
    #[arg(long)]
    pub code_review_color: Option<String>,

    /// The REVIEW node color [default: #ffcc00]
    #[arg(long)]
    pub review_color: Option<String>,

    /// Fill of the default style class [default: #f9f]
    #[arg(long)]
    pub default_color: Option<String>,

    /// The graph direction: TD (top-down) or LR (left-right) [default: TD]
    #[arg(long)]
    pub graph_direction: Option<String>,

    /// Config file to use instead of ./jira-mermaid.toml
    #[arg(long, env = "JIRA_MERMAID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Validates the `--graph-direction` flag, if given
    pub fn direction(&self) -> Result<Option<GraphDirection>, ConfigError> {
        self.graph_direction
            .as_deref()
            .map(|value| {
                value
                    .parse::<GraphDirection>()
                    .map_err(|e| ConfigError::Invalid(e.to_string()))
            })
            .transpose()
    }

    /// Applies command-line overrides on top of file configuration
    pub fn apply_overrides(&self, config: &mut RenderConfig) -> Result<(), ConfigError> {
        if let Some(direction) = self.direction()? {
            config.direction = direction;
        }

        if let Some(kinds) = &self.ignore_links {
            config.ignore_links = kinds
                .iter()
                .map(|kind| kind.trim().to_string())
                .filter(|kind| !kind.is_empty())
                .collect();
        }

        let shapes = &mut config.shapes;
        override_shape(&mut shapes.task_shape, &self.task_shape_left, &self.task_shape_right);
        override_shape(&mut shapes.bug_shape, &self.bug_shape_left, &self.bug_shape_right);
        override_shape(&mut shapes.spike_shape, &self.spike_shape_left, &self.spike_shape_right);
        override_shape(
            &mut shapes.default_shape,
            &self.default_shape_left,
            &self.default_shape_right,
        );

        let colors = &mut config.colors;
        override_value(&mut colors.todo, &self.todo_color);
        override_value(&mut colors.closed, &self.closed_color);
        override_value(&mut colors.in_progress, &self.in_progress_color);
        override_value(&mut colors.code_review, &self.code_review_color);
        override_value(&mut colors.review, &self.review_color);
        override_value(&mut colors.default_color, &self.default_color);

        Ok(())
    }
}

fn override_shape(pair: &mut ShapePair, left: &Option<String>, right: &Option<String>) {
    override_value(&mut pair.left, left);
    override_value(&mut pair.right, right);
}

fn override_value(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    output.verbose("jira-mermaid starting");

    if cli.print_config {
        convert::print_config(&cli, &output)
    } else {
        convert::run(&cli, &output)
    }
}
