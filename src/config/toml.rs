//! TOML configuration file parsing
//!
//! Every section and key is optional; missing values fall back to defaults.
//!
//! ```toml
//! [search]
//! width = 9
//! height = 9
//! gateways = 2
//! k = 1
//! exclusion = "slot"
//!
//! [runtime]
//! threads = 8
//!
//! [output]
//! json_output = "report.json"
//! ```

use super::*;
use crate::assignment::Exclusion;
use crate::config::cli::{Cli, ExclusionArg};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    // Search space
    if let Some(width) = cli.width {
        config.search.width = width;
    }
    if let Some(height) = cli.height {
        config.search.height = height;
    }
    if let Some(gateways) = cli.gateways {
        config.search.gateways = gateways;
    }
    if let Some(k) = cli.nearest {
        config.search.k = k;
    }
    if let Some(exclusion) = cli.exclusion {
        config.search.exclusion = convert_exclusion(exclusion);
    }

    // Runtime
    if let Some(threads) = cli.threads {
        config.runtime.threads = threads;
    }
    if let Some(limit) = cli.warn_configurations {
        config.runtime.warn_configurations = limit;
    }

    // Output
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }

    config
}

/// Convert CLI exclusion to config exclusion
pub fn convert_exclusion(arg: ExclusionArg) -> Exclusion {
    match arg {
        ExclusionArg::Slot => Exclusion::Slot,
        ExclusionArg::Coordinate => Exclusion::Coordinate,
    }
}
