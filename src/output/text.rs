//! Human-readable text output

use crate::config::Config;
use crate::coordinator::{SearchReport, SearchResult};
use crate::geometry::Point;
use crate::util::time::{configurations_per_sec, format_count, format_duration};
use std::fmt::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Print the effective configuration before a run
pub fn print_configuration(config: &Config, configurations: u64) {
    println!("{}", RULE);
    println!("                    CONFIGURATION");
    println!("{}", RULE);
    print!("{}", config);
    println!("Search space: {} configurations", format_count(configurations));
}

/// Print search results to console
///
/// Ends with the single `FINAL` line carrying both minima.
pub fn print_results(report: &SearchReport) {
    print!("{}", render_results(report));
}

/// Render the results block
pub fn render_results(report: &SearchReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_results(&mut out, report);
    out
}

fn write_results(out: &mut String, report: &SearchReport) -> fmt::Result {
    let result = &report.result;

    writeln!(out, "{}", RULE)?;
    writeln!(out, "                    SEARCH RESULTS")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Elapsed Time: {}", format_duration(report.elapsed))?;
    writeln!(
        out,
        "Configurations: {} ({:.0}/s on {} threads)",
        format_count(result.configurations),
        configurations_per_sec(result.configurations, report.elapsed),
        report.threads
    )?;
    writeln!(out)?;
    writeln!(out, "Best mean sum:    {:.6}", result.best_sum)?;
    writeln!(out, "  Gateways: {}", format_gateways(&report.best_sum_configuration))?;
    writeln!(out, "Best mean stddev: {:.6}", result.best_stddev)?;
    writeln!(out, "  Gateways: {}", format_gateways(&report.best_stddev_configuration))?;
    writeln!(out)?;
    writeln!(out, "{}", final_line(result))
}

/// The one-line summary: `FINAL Min sum <best_sum> sd <best_stddev>`
pub fn final_line(result: &SearchResult) -> String {
    format!("FINAL Min sum {} sd {}", result.best_sum, result.best_stddev)
}

fn format_gateways(gateways: &[Point]) -> String {
    gateways
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
