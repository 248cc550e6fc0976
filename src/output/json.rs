//! JSON output formatting
//!
//! Writes a single report per run containing the effective configuration,
//! both minima with the gateway positions that reach them, and timing.

use crate::config::Config;
use crate::coordinator::{SearchReport, SearchResult};
use crate::geometry::Point;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Duration with both microseconds and human-readable format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDuration {
    pub micros: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        Self {
            micros: d.as_micros() as u64,
            human: crate::util::time::format_duration(d),
        }
    }
}

/// One reported optimum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonBest {
    pub value: f64,
    pub ordinal: u64,
    pub gateways: Vec<Point>,
}

/// Complete JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    /// RFC 3339 local time the report was written
    pub timestamp: String,
    pub config: Config,
    pub configurations: u64,
    pub threads: usize,
    pub elapsed: JsonDuration,
    pub best_sum: JsonBest,
    pub best_stddev: JsonBest,
}

impl JsonReport {
    pub fn new(config: &Config, report: &SearchReport) -> Self {
        let SearchResult {
            best_sum,
            best_stddev,
            best_sum_ordinal,
            best_stddev_ordinal,
            configurations,
        } = report.result;

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Local::now().to_rfc3339(),
            config: config.clone(),
            configurations,
            threads: report.threads,
            elapsed: JsonDuration::from_duration(report.elapsed),
            best_sum: JsonBest {
                value: best_sum,
                ordinal: best_sum_ordinal,
                gateways: report.best_sum_configuration.clone(),
            },
            best_stddev: JsonBest {
                value: best_stddev,
                ordinal: best_stddev_ordinal,
                gateways: report.best_stddev_configuration.clone(),
            },
        }
    }
}

/// Write the JSON report to `path`
pub fn write_report(path: &Path, config: &Config, report: &SearchReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON output: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &JsonReport::new(config, report))
        .with_context(|| format!("Failed to write JSON output: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write JSON output: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SearchReport {
        SearchReport {
            result: SearchResult {
                best_sum: 2.0,
                best_stddev: 0.5,
                best_sum_ordinal: 3,
                best_stddev_ordinal: 1,
                configurations: 4,
            },
            best_sum_configuration: vec![Point::new(1, 1)],
            best_stddev_configuration: vec![Point::new(1, 0)],
            elapsed: Duration::from_micros(1500),
            threads: 2,
        }
    }

    #[test]
    fn test_json_duration() {
        let d = JsonDuration::from_duration(Duration::from_micros(1500));
        assert_eq!(d.micros, 1500);
        assert_eq!(d.human, "1.50ms");
    }

    #[test]
    fn test_report_fields() {
        let json = serde_json::to_value(JsonReport::new(&Config::default(), &report())).unwrap();
        assert_eq!(json["configurations"], 4);
        assert_eq!(json["threads"], 2);
        assert_eq!(json["best_sum"]["value"], 2.0);
        assert_eq!(json["best_sum"]["gateways"][0]["x"], 1);
        assert_eq!(json["best_stddev"]["ordinal"], 1);
        assert_eq!(json["config"]["search"]["exclusion"], "slot");
        assert_eq!(json["elapsed"]["micros"], 1500);
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_report(&path, &Config::default(), &report()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: JsonReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.configurations, 4);
        assert_eq!(parsed.best_stddev.gateways, vec![Point::new(1, 0)]);
        assert_eq!(parsed.config, Config::default());
    }

    #[test]
    fn test_write_report_bad_path() {
        let err = write_report(
            Path::new("/nonexistent/dir/report.json"),
            &Config::default(),
            &report(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to create JSON output"));
    }
}
