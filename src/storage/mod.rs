//! # Storage Layer
//!
//! File-backed inputs for jira-mermaid. Nothing is ever written back.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Issues | Jira CSV export | `--csv-file` (default `issues.csv`) |
//! | Global config | TOML | `~/.config/jira-mermaid/config.toml` |
//! | Project config | TOML | `./jira-mermaid.toml` or `--config` |
//!
//! ## Key Types
//!
//! - [`IssueSource`] - Reads a CSV export into issues
//! - [`Config`] - Layered render configuration

mod csv_source;
mod config;

pub use csv_source::{parse_csv, ImportError, IssueSource};
pub use config::{Config, ConfigError, RenderConfig, PROJECT_CONFIG_FILE};
