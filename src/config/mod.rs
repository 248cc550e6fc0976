//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! Sources are layered: built-in defaults, then an optional TOML file, then
//! CLI flags (highest precedence).

pub mod cli;
pub mod toml;
pub mod validator;

use crate::assignment::Exclusion;
use crate::geometry::Grid;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete search configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Search space parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Largest x coordinate (inclusive)
    #[serde(default = "default_width")]
    pub width: u32,
    /// Largest y coordinate (inclusive)
    #[serde(default = "default_height")]
    pub height: u32,
    /// Number of gateways to place (N)
    #[serde(default = "default_gateways")]
    pub gateways: usize,
    /// Nearest gateways scored per grid point (k)
    #[serde(default = "default_k")]
    pub k: usize,
    /// Gateway identity used when excluding already chosen gateways
    #[serde(default)]
    pub exclusion: Exclusion,
}

fn default_width() -> u32 {
    4
}

fn default_height() -> u32 {
    4
}

fn default_gateways() -> usize {
    3
}

fn default_k() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            gateways: default_gateways(),
            k: default_k(),
            exclusion: Exclusion::default(),
        }
    }
}

impl SearchConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }
}

/// Execution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Fan-out worker threads (0 = one per CPU)
    #[serde(default)]
    pub threads: usize,
    /// Search spaces larger than this are flagged before the run starts
    #[serde(default = "default_warn_configurations")]
    pub warn_configurations: u64,
}

fn default_warn_configurations() -> u64 {
    1_000_000_000
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            warn_configurations: default_warn_configurations(),
        }
    }
}

/// Report destinations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Write a JSON report to this path
    pub json_output: Option<PathBuf>,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let search = &self.search;
        writeln!(f, "Search:")?;
        writeln!(
            f,
            "  Grid: {} ({} x {} inclusive bounds)",
            search.grid(),
            search.width,
            search.height
        )?;
        writeln!(f, "  Gateways: {}", search.gateways)?;
        writeln!(f, "  Nearest (k): {}", search.k)?;
        writeln!(f, "  Exclusion: {}", search.exclusion)?;
        writeln!(f, "Runtime:")?;
        if self.runtime.threads == 0 {
            writeln!(f, "  Threads: auto")?;
        } else {
            writeln!(f, "  Threads: {}", self.runtime.threads)?;
        }
        if let Some(ref path) = self.output.json_output {
            writeln!(f, "Output:")?;
            writeln!(f, "  JSON: {}", path.display())?;
        }
        Ok(())
    }
}

/// Build the effective configuration from CLI arguments
///
/// Starts from the TOML file given with `--config` (or defaults) and applies
/// CLI overrides on top.
pub fn build_config(cli: &cli::Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => toml::parse_toml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };
    Ok(toml::merge_cli_with_config(cli, base))
}
