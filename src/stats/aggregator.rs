//! Configuration score aggregation
//!
//! Collects one [`PointScore`] per grid point and reduces them to a single
//! [`ConfigurationScore`]: the mean of the point sums and the mean of the
//! point stddevs.
//!
//! # Usage
//!
//! 1. Create with `new()` (or `with_capacity()` when the grid size is known)
//! 2. Add each point's score with `add()`
//! 3. Reduce with `finish()`
//!
//! # Example
//!
//! ```
//! use gwsearch::stats::PointScore;
//! use gwsearch::stats::aggregator::ConfigurationAggregator;
//!
//! let mut aggregator = ConfigurationAggregator::new();
//! aggregator.add(PointScore { sum: 2.0, stddev: 0.0 });
//! aggregator.add(PointScore { sum: 4.0, stddev: 1.0 });
//!
//! let score = aggregator.finish()?;
//! assert_eq!(score.mean_sum, 3.0);
//! assert_eq!(score.mean_stddev, 0.5);
//! # Ok::<(), gwsearch::error::SearchError>(())
//! ```

use super::{mean, ConfigurationScore, PointScore};
use crate::error::CoreResult;

/// Per-point to per-configuration reducer
#[derive(Debug, Default, Clone)]
pub struct ConfigurationAggregator {
    sums: Vec<f64>,
    stddevs: Vec<f64>,
}

impl ConfigurationAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator sized for `points` grid points
    pub fn with_capacity(points: usize) -> Self {
        Self {
            sums: Vec::with_capacity(points),
            stddevs: Vec::with_capacity(points),
        }
    }

    /// Add the score of one grid point
    pub fn add(&mut self, score: PointScore) {
        self.sums.push(score.sum);
        self.stddevs.push(score.stddev);
    }

    /// Reduce the collected point scores
    ///
    /// Fails with `EmptySampleSet` if no point was added.
    pub fn finish(&self) -> CoreResult<ConfigurationScore> {
        Ok(ConfigurationScore {
            mean_sum: mean(&self.sums)?,
            mean_stddev: mean(&self.stddevs)?,
        })
    }
}
