//! gwsearch CLI entry point

use anyhow::{Context, Result};
use gwsearch::config::{self, cli::Cli, validator};
use gwsearch::coordinator::Search;
use gwsearch::output::{json, text};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Set up logging (RUST_LOG wins over --verbose)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    println!("gwsearch v{}", env!("CARGO_PKG_VERSION"));
    println!("Exhaustive gateway placement search");
    println!();

    cli.validate()?;

    let config = config::build_config(&cli)?;
    let configurations = validator::validate_config(&config)
        .context("Configuration validation failed")?;

    text::print_configuration(&config, configurations);

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!();
    let config = Arc::new(config);
    let report = Search::new(Arc::clone(&config))
        .run()
        .context("Search aborted")?;

    println!();
    text::print_results(&report);

    if let Some(ref path) = config.output.json_output {
        json::write_report(path, &config, &report)?;
        info!(path = %path.display(), "JSON report written");
    }

    Ok(())
}
