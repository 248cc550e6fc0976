//! Sample statistics
//!
//! Sum, mean and population standard deviation over finite sample sets, plus
//! the two score types built from them:
//!
//! - **PointScore**: sum and stddev of the k nearest-gateway distances of one
//!   grid point
//! - **ConfigurationScore**: mean of the point sums and mean of the point
//!   stddevs over every grid point
//!
//! All three statistics reject an empty sample set with
//! [`SearchError::EmptySampleSet`]. Under valid parameters this cannot happen:
//! a grid has at least one point and k is at least 1.
//!
//! # Example
//!
//! ```
//! use gwsearch::stats::{mean, population_stddev, sum};
//!
//! let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(sum(&samples)?, 40.0);
//! assert_eq!(mean(&samples)?, 5.0);
//! assert_eq!(population_stddev(&samples)?, 2.0);
//! # Ok::<(), gwsearch::error::SearchError>(())
//! ```

pub mod aggregator;

use crate::error::{CoreResult, SearchError};
use serde::{Deserialize, Serialize};

/// Sum of the samples
pub fn sum(samples: &[f64]) -> CoreResult<f64> {
    if samples.is_empty() {
        return Err(SearchError::EmptySampleSet { context: "sum" });
    }
    Ok(samples.iter().sum())
}

/// Arithmetic mean of the samples
pub fn mean(samples: &[f64]) -> CoreResult<f64> {
    if samples.is_empty() {
        return Err(SearchError::EmptySampleSet { context: "mean" });
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation (divisor is the sample count)
pub fn population_stddev(samples: &[f64]) -> CoreResult<f64> {
    if samples.is_empty() {
        return Err(SearchError::EmptySampleSet { context: "standard deviation" });
    }
    let m = mean(samples)?;
    let variance = samples
        .iter()
        .map(|&x| {
            let d = x - m;
            d * d
        })
        .sum::<f64>()
        / samples.len() as f64;
    Ok(variance.sqrt())
}

/// Service quality of a single grid point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointScore {
    pub sum: f64,
    pub stddev: f64,
}

impl PointScore {
    /// Score a point from the distances to its k nearest gateways
    pub fn from_distances(distances: &[f64]) -> CoreResult<Self> {
        Ok(Self {
            sum: sum(distances)?,
            stddev: population_stddev(distances)?,
        })
    }
}

/// Service quality of a whole configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationScore {
    pub mean_sum: f64,
    pub mean_stddev: f64,
}

impl ConfigurationScore {
    pub const fn new(mean_sum: f64, mean_stddev: f64) -> Self {
        Self { mean_sum, mean_stddev }
    }
}
