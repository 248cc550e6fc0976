//! Recording measure for testing
//!
//! Records every configuration handed to it and answers with a score computed
//! by a caller-supplied function, so enumeration and fan-out can be tested
//! without the cost or the maths of the real measurement.
//!
//! # Features
//!
//! - Thread-safe recording (fan-out units call it concurrently)
//! - Pluggable scorer
//! - Optional failure on a chosen configuration
//!
//! # Example
//!
//! ```
//! use gwsearch::geometry::Point;
//! use gwsearch::measure::Measure;
//! use gwsearch::measure::mock::RecordingMeasure;
//!
//! let measure = RecordingMeasure::new();
//! measure.measure(&[Point::new(1, 0)]).unwrap();
//! assert_eq!(measure.recorded(), vec![vec![Point::new(1, 0)]]);
//! ```

use super::Measure;
use crate::error::{CoreResult, SearchError};
use crate::geometry::Point;
use crate::stats::ConfigurationScore;
use std::sync::{Arc, Mutex};

type Scorer = dyn Fn(&[Point]) -> ConfigurationScore + Send + Sync;

/// Mock measure that records the configurations it sees
#[derive(Clone)]
pub struct RecordingMeasure {
    scorer: Arc<Scorer>,
    fail_on: Option<Vec<Point>>,
    recorded: Arc<Mutex<Vec<Vec<Point>>>>,
}

impl RecordingMeasure {
    /// Create a recorder that scores every configuration as (0, 0)
    pub fn new() -> Self {
        Self::with_scorer(|_| ConfigurationScore::new(0.0, 0.0))
    }

    /// Create a recorder with a custom scoring function
    pub fn with_scorer<F>(scorer: F) -> Self
    where
        F: Fn(&[Point]) -> ConfigurationScore + Send + Sync + 'static,
    {
        Self {
            scorer: Arc::new(scorer),
            fail_on: None,
            recorded: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail with `InsufficientGateways` when this configuration is measured
    pub fn failing_on(mut self, configuration: Vec<Point>) -> Self {
        self.fail_on = Some(configuration);
        self
    }

    /// All configurations measured so far, in call order
    pub fn recorded(&self) -> Vec<Vec<Point>> {
        self.recorded.lock().unwrap().clone()
    }

    /// Number of configurations measured so far
    pub fn count(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }
}

impl Default for RecordingMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl Measure for RecordingMeasure {
    fn measure(&self, gateways: &[Point]) -> CoreResult<ConfigurationScore> {
        self.recorded.lock().unwrap().push(gateways.to_vec());

        if self.fail_on.as_deref() == Some(gateways) {
            return Err(SearchError::InsufficientGateways {
                point: gateways.last().copied().unwrap_or_default(),
                requested: gateways.len() + 1,
                available: gateways.len(),
            });
        }

        Ok((self.scorer)(gateways))
    }
}
