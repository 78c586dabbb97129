//! Configuration handling for jira-mermaid
//!
//! Settings are layered, later layers winning key by key:
//!
//! 1. built-in defaults
//! 2. `~/.config/jira-mermaid/config.toml` (global)
//! 3. `./jira-mermaid.toml`, or the file given with `--config`
//! 4. command-line flags (applied by the CLI)
//!
//! ```toml
//! direction = "LR"
//! ignore_links = ["Cloners", "Relates"]
//!
//! [shapes]
//! bug_shape = ["((", "))"]
//!
//! [colors]
//! closed = "#33cc33"
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Colors, GraphDirection, Presentation, RenderOptions, Shapes};

/// Name of the per-directory config file
pub const PROJECT_CONFIG_FILE: &str = "jira-mermaid.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Everything that controls how issues are rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Graph orientation (`TD` or `LR`)
    pub direction: GraphDirection,

    /// Link kinds that never produce an edge
    pub ignore_links: Vec<String>,

    /// Node shape per issue type
    pub shapes: Shapes,

    /// Style class fill per status
    pub colors: Colors,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            direction: GraphDirection::TopDown,
            ignore_links: vec!["Cloners".to_string()],
            shapes: Shapes::default(),
            colors: Colors::default(),
        }
    }
}

impl RenderConfig {
    /// Builds renderer options from this configuration
    ///
    /// Empty link kinds in `ignore_links` are dropped, so an empty entry
    /// never hides unlabeled edges.
    pub fn to_render_options(&self) -> RenderOptions {
        let ignore_kinds: BTreeSet<String> = self
            .ignore_links
            .iter()
            .filter(|kind| !kind.is_empty())
            .cloned()
            .collect();

        RenderOptions {
            direction: self.direction,
            ignore_kinds,
            presentation: Presentation::new(self.shapes.clone(), self.colors.clone()),
        }
    }

    /// Serializes the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration")
    }
}

/// Resolved configuration and the files it came from
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub render: RenderConfig,

    /// Files that contributed, lowest precedence first
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    ///
    /// With `explicit` set, that file replaces the per-directory file and
    /// must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut paths = Vec::new();

        if let Some(global) = Self::global_config_path() {
            if global.is_file() {
                paths.push(global);
            }
        }

        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                paths.push(path.to_path_buf());
            }
            None => {
                let local = PathBuf::from(PROJECT_CONFIG_FILE);
                if local.is_file() {
                    paths.push(local);
                }
            }
        }

        Self::from_files(&paths)
    }

    /// Merges the given TOML files in order over the defaults
    pub fn from_files(paths: &[PathBuf]) -> Result<Self> {
        let mut merged = toml::Table::new();
        for path in paths {
            merge_tables(&mut merged, read_table(path)?);
        }

        let direction = merged.remove("direction").map(parse_direction).transpose()?;

        let mut render: RenderConfig = toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::Parse(e.to_string()))
            .context("Failed to apply configuration")?;
        if let Some(direction) = direction {
            render.direction = direction;
        }

        Ok(Self {
            render,
            sources: paths.to_vec(),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "jira-mermaid", "jira-mermaid")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }
}

fn read_table(path: &Path) -> Result<toml::Table> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    toml::from_str(&content)
        .map_err(|e| ConfigError::Parse(e.to_string()))
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Validates the merged `direction` value
fn parse_direction(value: toml::Value) -> Result<GraphDirection, ConfigError> {
    match value {
        toml::Value::String(s) => s
            .parse()
            .map_err(|e: crate::domain::DirectionError| ConfigError::Invalid(e.to_string())),
        other => Err(ConfigError::Invalid(format!(
            "direction must be a string, got {}",
            other.type_str()
        ))),
    }
}

/// Recursively merges `overlay` into `base`; nested tables merge key by key
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                    continue;
                }
                base.insert(key, toml::Value::Table(incoming));
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}
