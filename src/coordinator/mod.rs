//! Search orchestration
//!
//! Seeds the grid, the gateway slots and k from the configuration, runs the
//! enumerator from slot 0 and reduces the score stream to the best mean sum
//! and the best mean stddev.
//!
//! The two minima are tracked independently and may come from different
//! configurations. Among equal minima the lowest ordinal wins, which keeps the
//! reported configurations stable no matter in which order fan-out units
//! complete.
//!
//! # Example
//!
//! ```
//! let result = gwsearch::coordinator::search(1, 1, 1, 1)?;
//! assert_eq!(result.configurations, 4);
//! assert!(result.best_sum > 0.0);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::Config;
use crate::enumerator::{Enumerator, ScoreSink, ScoredConfiguration};
use crate::error::{CoreResult, SearchError};
use crate::geometry::Point;
use crate::measure::GridMeasure;
use crate::util::time::format_duration;
use crate::worker::pool::{build_pool, resolve_threads};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Best scores over the whole search space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimum mean sum over all configurations
    pub best_sum: f64,
    /// Minimum mean stddev over all configurations
    pub best_stddev: f64,
    /// Ordinal of the first configuration reaching `best_sum`
    pub best_sum_ordinal: u64,
    /// Ordinal of the first configuration reaching `best_stddev`
    pub best_stddev_ordinal: u64,
    /// Number of configurations evaluated
    pub configurations: u64,
}

#[derive(Debug, Clone, Copy)]
struct Best {
    value: f64,
    ordinal: u64,
}

impl Best {
    fn offer(slot: &mut Option<Best>, value: f64, ordinal: u64) {
        let better = match slot {
            None => true,
            Some(cur) => value < cur.value || (value == cur.value && ordinal < cur.ordinal),
        };
        if better {
            *slot = Some(Best { value, ordinal });
        }
    }
}

/// Streaming min reducer over scored configurations
#[derive(Debug, Default, Clone)]
pub struct BestScores {
    sum: Option<Best>,
    stddev: Option<Best>,
    count: u64,
}

impl BestScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Final result
    ///
    /// Fails with `EmptySampleSet` if no configuration was seen.
    pub fn finish(&self) -> CoreResult<SearchResult> {
        match (self.sum, self.stddev) {
            (Some(sum), Some(stddev)) => Ok(SearchResult {
                best_sum: sum.value,
                best_stddev: stddev.value,
                best_sum_ordinal: sum.ordinal,
                best_stddev_ordinal: stddev.ordinal,
                configurations: self.count,
            }),
            _ => Err(SearchError::EmptySampleSet { context: "search result" }),
        }
    }
}

impl ScoreSink for BestScores {
    fn accept(&mut self, scored: ScoredConfiguration) {
        Best::offer(&mut self.sum, scored.score.mean_sum, scored.ordinal);
        Best::offer(&mut self.stddev, scored.score.mean_stddev, scored.ordinal);
        self.count += 1;
    }
}

/// A finished search with everything needed for reporting
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub result: SearchResult,
    /// Gateway positions of the configuration reaching `best_sum`
    pub best_sum_configuration: Vec<Point>,
    /// Gateway positions of the configuration reaching `best_stddev`
    pub best_stddev_configuration: Vec<Point>,
    pub elapsed: Duration,
    pub threads: usize,
}

/// Search orchestrator
pub struct Search {
    config: Arc<Config>,
}

impl Search {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Run the exhaustive search to completion
    ///
    /// # Errors
    ///
    /// Pool construction failures and every [`SearchError`] abort the search;
    /// no partial result is returned.
    pub fn run(&self) -> Result<SearchReport> {
        let search = &self.config.search;
        let grid = search.grid();
        let threads = resolve_threads(self.config.runtime.threads);
        let pool = build_pool(threads)?;

        let measure = GridMeasure::new(grid, search.k, search.exclusion);
        let enumerator = Enumerator::new(grid, search.gateways, &pool);
        let configurations = enumerator.configuration_count().ok_or_else(|| {
            anyhow::anyhow!(
                "search space of a {} grid with {} gateways does not fit in 64 bits",
                grid,
                search.gateways
            )
        })?;

        info!(
            grid = %grid,
            gateways = search.gateways,
            k = search.k,
            exclusion = %search.exclusion,
            threads,
            configurations,
            "starting search"
        );

        let start = Instant::now();
        let mut best = BestScores::new();
        enumerator.run(&measure, &mut best)?;
        let result = best.finish()?;
        let elapsed = start.elapsed();

        info!(
            configurations = result.configurations,
            elapsed = %format_duration(elapsed),
            "search complete"
        );

        Ok(SearchReport {
            result,
            best_sum_configuration: grid.configuration_at(result.best_sum_ordinal, search.gateways),
            best_stddev_configuration: grid
                .configuration_at(result.best_stddev_ordinal, search.gateways),
            elapsed,
            threads,
        })
    }
}

/// Run a search with default runtime settings
///
/// Slot exclusion, one thread per CPU.
pub fn search(width: u32, height: u32, gateways: usize, k: usize) -> Result<SearchResult> {
    let mut config = Config::default();
    config.search.width = width;
    config.search.height = height;
    config.search.gateways = gateways;
    config.search.k = k;

    Ok(Search::new(Arc::new(config)).run()?.result)
}
