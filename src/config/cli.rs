//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Gateway identity used by the nearest assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExclusionArg {
    /// Gateways are identified by slot; co-located gateways stay distinct
    Slot,
    /// Gateways are identified by coordinates
    Coordinate,
}

/// gwsearch - exhaustive gateway placement search
#[derive(Parser, Debug)]
#[command(name = "gwsearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file (CLI flags override its values)
    #[arg(short = 'c', long, env = "GWSEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    // === Search Space ===
    /// Largest x coordinate of the grid (inclusive)
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Largest y coordinate of the grid (inclusive)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Number of gateways to place
    #[arg(short = 'n', long)]
    pub gateways: Option<usize>,

    /// Nearest gateways scored per grid point
    #[arg(short = 'k', long)]
    pub nearest: Option<usize>,

    /// How already chosen gateways are excluded
    #[arg(long, value_enum)]
    pub exclusion: Option<ExclusionArg>,

    // === Runtime ===
    /// Number of worker threads (0 = one per CPU)
    #[arg(short = 't', long, env = "GWSEARCH_THREADS")]
    pub threads: Option<usize>,

    /// Warn when the search space exceeds this many configurations
    #[arg(long)]
    pub warn_configurations: Option<u64>,

    // === Output ===
    /// Write a JSON report to this file
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Validate and print the configuration without searching
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Only checks what can be judged from the flags alone; the merged
    /// configuration is validated by [`super::validator::validate_config`].
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.gateways == Some(0) {
            anyhow::bail!("gateways must be at least 1");
        }

        if self.nearest == Some(0) {
            anyhow::bail!("nearest must be at least 1");
        }

        if let (Some(n), Some(k)) = (self.gateways, self.nearest) {
            if k > n {
                anyhow::bail!("nearest ({}) cannot exceed gateways ({})", k, n);
            }
        }

        if self.warn_configurations == Some(0) {
            anyhow::bail!("warn_configurations must be at least 1");
        }

        Ok(())
    }
}
