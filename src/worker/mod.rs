//! Parallel fan-out for the last gateway slot
//!
//! The enumerator recurses sequentially through slots 0..N-2. When it reaches
//! the last slot it hands over here: one unit of work is spawned per grid
//! point, each binding the last slot to its own point and measuring the fully
//! bound configuration.
//!
//! # Architecture
//!
//! - **Snapshot**: every unit copies the bound outer slots into a private
//!   `Vec<Point>` before appending its own point. Units never see each other's
//!   slot value.
//! - **Channel**: results travel through a `crossbeam` bounded channel whose
//!   capacity equals the unit count, so no unit ever blocks on send.
//! - **Barrier**: `ThreadPool::scope` returns only after every unit finished;
//!   the caller then drains exactly one result per unit.
//!
//! Completion order is unspecified. Each result carries its configuration
//! ordinal, which is what makes the outcome independent of scheduling.

pub mod pool;

use crate::enumerator::ScoredConfiguration;
use crate::error::{CoreResult, SearchError};
use crate::geometry::{Grid, Point};
use crate::measure::Measure;
use crossbeam::channel;
use rayon::ThreadPool;
use tracing::debug;

/// Measure every binding of the last slot in parallel
///
/// `outer` holds the already bound slots 0..N-2, `ordinal_prefix` the ordinal
/// of that partial configuration. Returns one scored configuration per grid
/// point, in completion order.
///
/// # Errors
///
/// The first unit error (in receive order) is returned and the batch is
/// discarded.
pub fn fan_out<M: Measure + ?Sized>(
    pool: &ThreadPool,
    grid: Grid,
    measure: &M,
    outer: &[Point],
    ordinal_prefix: u64,
) -> CoreResult<Vec<ScoredConfiguration>> {
    let cells = grid.cell_count();
    let units = cells as usize;
    let base = ordinal_prefix * cells;

    let (tx, rx) = channel::bounded::<CoreResult<ScoredConfiguration>>(units);

    pool.scope(|scope| {
        for (index, point) in grid.points().enumerate() {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let mut gateways = Vec::with_capacity(outer.len() + 1);
                gateways.extend_from_slice(outer);
                gateways.push(point);

                let result = measure
                    .measure(&gateways)
                    .map(|score| ScoredConfiguration {
                        ordinal: base + index as u64,
                        score,
                    });
                // Receiver outlives the scope and capacity covers every unit
                let _ = tx.send(result);
            });
        }
    });
    drop(tx);

    let mut results = Vec::with_capacity(units);
    for result in rx.iter() {
        results.push(result?);
    }

    if results.len() != units {
        return Err(SearchError::FanoutIncomplete {
            expected: units,
            received: results.len(),
        });
    }

    debug!(prefix = ordinal_prefix, units, "fan-out complete");
    Ok(results)
}
