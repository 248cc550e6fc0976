//! Exhaustive configuration enumeration
//!
//! Binds every gateway slot to every grid point, producing all
//! `cell_count ^ N` configurations exactly once. Slot 0 varies slowest and
//! slot N-1 fastest; within a slot's sweep points go in row-major order.
//!
//! Slots 0..N-2 are bound in place on the calling thread, one recursion level
//! per slot. The last slot is handed to [`crate::worker::fan_out`], which
//! measures its `cell_count` configurations in parallel.
//!
//! Each configuration is identified by its ordinal, the base-`cell_count`
//! number whose digits are the row-major indices of the slots (slot 0 most
//! significant). [`Grid::configuration_at`] decodes it.

use crate::error::CoreResult;
use crate::geometry::{Grid, Point};
use crate::measure::Measure;
use crate::stats::ConfigurationScore;
use crate::worker::fan_out;
use rayon::ThreadPool;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One element of the score stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredConfiguration {
    /// Position of the configuration in enumeration order
    pub ordinal: u64,
    pub score: ConfigurationScore,
}

/// Consumer of the flattened score stream
pub trait ScoreSink {
    fn accept(&mut self, scored: ScoredConfiguration);
}

impl ScoreSink for Vec<ScoredConfiguration> {
    fn accept(&mut self, scored: ScoredConfiguration) {
        self.push(scored);
    }
}

/// Recursive configuration enumerator
pub struct Enumerator<'p> {
    grid: Grid,
    gateways: usize,
    pool: &'p ThreadPool,
}

impl<'p> Enumerator<'p> {
    pub fn new(grid: Grid, gateways: usize, pool: &'p ThreadPool) -> Self {
        Self { grid, gateways, pool }
    }

    /// Total number of configurations, or `None` if it overflows `u64`
    pub fn configuration_count(&self) -> Option<u64> {
        self.grid.search_space(self.gateways)
    }

    /// Enumerate every configuration, feeding each score into `sink`
    ///
    /// # Errors
    ///
    /// Stops at the first measurement error. The sink keeps whatever it
    /// received before the error; callers must discard it.
    pub fn run<M, S>(&self, measure: &M, sink: &mut S) -> CoreResult<()>
    where
        M: Measure + ?Sized,
        S: ScoreSink + ?Sized,
    {
        let mut slots = vec![Point::default(); self.gateways];
        self.enumerate(0, &mut slots, 0, measure, sink)
    }

    fn enumerate<M, S>(
        &self,
        depth: usize,
        slots: &mut [Point],
        prefix: u64,
        measure: &M,
        sink: &mut S,
    ) -> CoreResult<()>
    where
        M: Measure + ?Sized,
        S: ScoreSink + ?Sized,
    {
        let n = slots.len();

        if depth == n {
            let score = measure.measure(slots)?;
            sink.accept(ScoredConfiguration { ordinal: prefix, score });
            return Ok(());
        }

        if depth == n - 1 {
            for scored in fan_out(self.pool, self.grid, measure, &slots[..depth], prefix)? {
                sink.accept(scored);
            }
            return Ok(());
        }

        let cells = self.grid.cell_count();
        for (index, point) in self.grid.points().enumerate() {
            if depth == 0 {
                debug!(position = index + 1, of = cells, "slot 0 at {}", point);
            }
            slots[depth] = point;
            self.enumerate(depth + 1, slots, prefix * cells + index as u64, measure, sink)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::measure::mock::RecordingMeasure;
    use std::collections::HashSet;

    fn test_pool() -> ThreadPool {
        rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap()
    }

    #[test]
    fn test_single_gateway_visits_four() {
        let pool = test_pool();
        let grid = Grid::new(1, 1);
        let measure = RecordingMeasure::new();
        let mut scores: Vec<ScoredConfiguration> = Vec::new();

        Enumerator::new(grid, 1, &pool).run(&measure, &mut scores).unwrap();

        let seen: HashSet<Vec<Point>> = measure.recorded().into_iter().collect();
        assert_eq!(measure.count(), 4);
        assert_eq!(seen.len(), 4);
        for p in grid.points() {
            assert!(seen.contains(&vec![p]));
        }
        assert_eq!(scores.len(), 4);
    }

    #[test]
    fn test_completeness_two_gateways() {
        let pool = test_pool();
        let grid = Grid::new(2, 1);
        let measure = RecordingMeasure::new();
        let mut scores: Vec<ScoredConfiguration> = Vec::new();

        let enumerator = Enumerator::new(grid, 2, &pool);
        enumerator.run(&measure, &mut scores).unwrap();

        assert_eq!(enumerator.configuration_count(), Some(36));
        let seen: HashSet<Vec<Point>> = measure.recorded().into_iter().collect();
        assert_eq!(measure.count(), 36);
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn test_ordinals_decode_to_measured_configuration() {
        let pool = test_pool();
        let grid = Grid::new(1, 2);
        let measure = RecordingMeasure::with_scorer(move |g| {
            // Encode the configuration into the score so it can be checked
            let code = g
                .iter()
                .fold(0u64, |acc, p| acc * grid.cell_count() + grid.cell_index(*p));
            ConfigurationScore::new(code as f64, 0.0)
        });
        let mut scores: Vec<ScoredConfiguration> = Vec::new();

        Enumerator::new(grid, 3, &pool).run(&measure, &mut scores).unwrap();

        assert_eq!(scores.len(), 216);
        for s in &scores {
            assert_eq!(s.score.mean_sum, s.ordinal as f64);
        }
        let ordinals: HashSet<u64> = scores.iter().map(|s| s.ordinal).collect();
        assert_eq!(ordinals, (0..216).collect::<HashSet<u64>>());
    }

    #[test]
    fn test_outer_slot_varies_slowest() {
        let pool = test_pool();
        let grid = Grid::new(1, 1);
        let measure = RecordingMeasure::new();
        let mut scores: Vec<ScoredConfiguration> = Vec::new();

        Enumerator::new(grid, 2, &pool).run(&measure, &mut scores).unwrap();

        // Each fan-out finishes before slot 0 moves on
        let slot0: Vec<Point> = measure.recorded().iter().map(|c| c[0]).collect();
        let expected: Vec<Point> = grid
            .points()
            .flat_map(|p| std::iter::repeat(p).take(4))
            .collect();
        assert_eq!(slot0, expected);
    }

    #[test]
    fn test_error_aborts_enumeration() {
        let pool = test_pool();
        let grid = Grid::new(1, 1);
        let measure =
            RecordingMeasure::new().failing_on(vec![Point::new(1, 0), Point::new(0, 0)]);
        let mut scores: Vec<ScoredConfiguration> = Vec::new();

        let err = Enumerator::new(grid, 2, &pool)
            .run(&measure, &mut scores)
            .unwrap_err();

        assert!(matches!(err, SearchError::InsufficientGateways { .. }));
        // Slot 0 never reached (0, 1)
        assert!(measure.recorded().iter().all(|c| c[0].y == 0));
    }

    #[test]
    fn test_zero_slots_measures_once() {
        let pool = test_pool();
        let measure = RecordingMeasure::new();
        let mut scores: Vec<ScoredConfiguration> = Vec::new();

        Enumerator::new(Grid::new(3, 3), 0, &pool)
            .run(&measure, &mut scores)
            .unwrap();

        assert_eq!(measure.recorded(), vec![Vec::<Point>::new()]);
        assert_eq!(scores[0].ordinal, 0);
    }
}
