//! Configuration measurement
//!
//! A [`Measure`] turns one complete gateway configuration into a
//! [`ConfigurationScore`]. It is the seam between the enumerator, which only
//! knows how to bind slots, and the scoring maths.
//!
//! - **GridMeasure**: the real measurement. Every grid point is assigned its
//!   k nearest gateways, scored, and the point scores are averaged.
//! - **RecordingMeasure** (`mock`): records the configurations it is handed
//!   and returns caller-supplied scores. Used by tests.
//!
//! # Example
//!
//! ```
//! use gwsearch::assignment::Exclusion;
//! use gwsearch::geometry::{Grid, Point};
//! use gwsearch::measure::{GridMeasure, Measure};
//!
//! let measure = GridMeasure::new(Grid::new(0, 0), 1, Exclusion::Slot);
//! let score = measure.measure(&[Point::new(0, 0)])?;
//! assert_eq!(score.mean_sum, 0.0);
//! assert_eq!(score.mean_stddev, 0.0);
//! # Ok::<(), gwsearch::error::SearchError>(())
//! ```

pub mod mock;

use crate::assignment::{Assigner, Exclusion};
use crate::error::CoreResult;
use crate::geometry::{Grid, Point};
use crate::stats::aggregator::ConfigurationAggregator;
use crate::stats::{ConfigurationScore, PointScore};

/// Scores a complete gateway configuration
///
/// Implementations are shared by reference across fan-out units, so they must
/// be `Sync`, and must not depend on call order.
pub trait Measure: Send + Sync {
    /// Score the configuration given by `gateways` (one entry per slot)
    ///
    /// # Errors
    ///
    /// Any error is fatal to the whole search.
    fn measure(&self, gateways: &[Point]) -> CoreResult<ConfigurationScore>;
}

impl<M: Measure + ?Sized> Measure for &M {
    fn measure(&self, gateways: &[Point]) -> CoreResult<ConfigurationScore> {
        (**self).measure(gateways)
    }
}

/// Nearest-gateway service quality over a whole grid
#[derive(Debug, Clone, Copy)]
pub struct GridMeasure {
    grid: Grid,
    k: usize,
    exclusion: Exclusion,
}

impl GridMeasure {
    pub fn new(grid: Grid, k: usize, exclusion: Exclusion) -> Self {
        Self { grid, k, exclusion }
    }
}

impl Measure for GridMeasure {
    fn measure(&self, gateways: &[Point]) -> CoreResult<ConfigurationScore> {
        let capacity = usize::try_from(self.grid.cell_count()).unwrap_or(0);
        let mut assigner = Assigner::new(self.k, self.exclusion);
        let mut aggregator = ConfigurationAggregator::with_capacity(capacity);

        for point in self.grid.points() {
            let distances = assigner.distances(point, gateways)?;
            aggregator.add(PointScore::from_distances(distances)?);
        }

        aggregator.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::nearest_distances;
    use crate::error::SearchError;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_corners_k1_hand_computed() {
        // 3x3 grid, gateways at opposite corners. Distance to the nearest
        // corner per point:
        //   row 0: 0, 1, 2
        //   row 1: 1, sqrt2, 1
        //   row 2: 2, 1, 0
        let measure = GridMeasure::new(Grid::new(2, 2), 1, Exclusion::Slot);
        let score = measure
            .measure(&[Point::new(0, 0), Point::new(2, 2)])
            .unwrap();

        let expected = (8.0 + std::f64::consts::SQRT_2) / 9.0;
        assert_close(score.mean_sum, expected);
        assert_eq!(score.mean_stddev, 0.0);
    }

    #[test]
    fn test_k2_on_single_row() {
        // Points (0,0) (1,0) (2,0), gateways at both ends
        // distances: {0,2} {1,1} {2,0} -> sums 2,2,2; stddevs 1,0,1
        let measure = GridMeasure::new(Grid::new(2, 0), 2, Exclusion::Slot);
        let score = measure
            .measure(&[Point::new(0, 0), Point::new(2, 0)])
            .unwrap();

        assert_close(score.mean_sum, 2.0);
        assert_close(score.mean_stddev, 2.0 / 3.0);
    }

    #[test]
    fn test_single_point_grid() {
        // Only (0, 0) is served: distances 1 and 5
        let measure = GridMeasure::new(Grid::new(0, 0), 2, Exclusion::Slot);
        let score = measure
            .measure(&[Point::new(3, 4), Point::new(0, 1)])
            .unwrap();
        assert_eq!(score.mean_sum, 6.0);
        assert_eq!(score.mean_stddev, 2.0);
    }

    #[test]
    fn test_mean_sum_matches_point_scores() {
        let grid = Grid::new(3, 2);
        let gateways = [Point::new(1, 2), Point::new(3, 0), Point::new(0, 0)];
        let measure = GridMeasure::new(grid, 2, Exclusion::Slot);

        let mut sums = Vec::new();
        let mut stddevs = Vec::new();
        for point in grid.points() {
            let distances = nearest_distances(point, &gateways, 2, Exclusion::Slot).unwrap();
            let ps = PointScore::from_distances(&distances).unwrap();
            sums.push(ps.sum);
            stddevs.push(ps.stddev);
        }

        let score = measure.measure(&gateways).unwrap();
        assert_close(score.mean_sum, sums.iter().sum::<f64>() / sums.len() as f64);
        assert_close(
            score.mean_stddev,
            stddevs.iter().sum::<f64>() / stddevs.len() as f64,
        );
    }

    #[test]
    fn test_insufficient_gateways_propagates() {
        let measure = GridMeasure::new(Grid::new(1, 1), 3, Exclusion::Slot);
        let err = measure
            .measure(&[Point::new(0, 0), Point::new(1, 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::InsufficientGateways { requested: 3, available: 2, .. }
        ));
    }

    #[test]
    fn test_measure_through_reference() {
        let measure = GridMeasure::new(Grid::new(0, 0), 1, Exclusion::Slot);
        let by_ref: &dyn Measure = &measure;
        assert!(by_ref.measure(&[Point::new(0, 0)]).is_ok());
    }
}
