//! Nearest gateway assignment
//!
//! Selects the k nearest distinct gateways for a grid point. Each of the k
//! rounds scans the whole gateway slice and keeps the closest candidate that
//! has not been excluded yet. Comparison is strict `<`, so among candidates at
//! the same distance the one earliest in slice order wins. The winner is
//! excluded before the next round.
//!
//! # Example
//!
//! ```
//! use gwsearch::assignment::{assign, Exclusion};
//! use gwsearch::geometry::Point;
//!
//! let gateways = [Point::new(0, 0), Point::new(4, 0), Point::new(1, 0)];
//! let nearest = assign(Point::new(0, 0), &gateways, 2, Exclusion::Slot)?;
//! assert_eq!(nearest, vec![Point::new(0, 0), Point::new(1, 0)]);
//! # Ok::<(), gwsearch::error::SearchError>(())
//! ```

use crate::error::{CoreResult, SearchError};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a gateway already chosen for a point is recognised
///
/// `Slot` is the default: the enumeration puts every gateway at (0, 0) in its
/// first configuration, and only slot identity can serve k > 1 there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exclusion {
    /// A gateway is its slot: co-located gateways are still distinct
    #[default]
    Slot,
    /// A gateway is its coordinates: choosing one excludes every gateway at
    /// the same position
    Coordinate,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::Slot => write!(f, "slot"),
            Exclusion::Coordinate => write!(f, "coordinate"),
        }
    }
}

/// Reusable k-nearest selector
///
/// Holds scratch buffers so a whole configuration can be measured without
/// allocating per grid point. Each call starts from an empty exclusion set.
#[derive(Debug, Clone)]
pub struct Assigner {
    k: usize,
    exclusion: Exclusion,
    chosen: Vec<usize>,
    distances: Vec<f64>,
}

impl Assigner {
    pub fn new(k: usize, exclusion: Exclusion) -> Self {
        Self {
            k,
            exclusion,
            chosen: Vec::with_capacity(k),
            distances: Vec::with_capacity(k),
        }
    }

    /// Select the k nearest gateways for `point`
    ///
    /// Returns the chosen slot indices, nearest first.
    pub fn select(&mut self, point: Point, gateways: &[Point]) -> CoreResult<&[usize]> {
        self.run(point, gateways)?;
        Ok(&self.chosen)
    }

    /// Distances from `point` to its k nearest gateways, nearest first
    pub fn distances(&mut self, point: Point, gateways: &[Point]) -> CoreResult<&[f64]> {
        self.run(point, gateways)?;
        Ok(&self.distances)
    }

    fn run(&mut self, point: Point, gateways: &[Point]) -> CoreResult<()> {
        self.chosen.clear();
        self.distances.clear();

        for _ in 0..self.k {
            let mut best: Option<(usize, f64)> = None;

            for (slot, &gateway) in gateways.iter().enumerate() {
                if self.is_excluded(slot, gateway, gateways) {
                    continue;
                }
                let dist = point.distance(gateway);
                match best {
                    Some((_, min)) if dist >= min => {}
                    _ => best = Some((slot, dist)),
                }
            }

            match best {
                Some((slot, dist)) => {
                    self.chosen.push(slot);
                    self.distances.push(dist);
                }
                None => {
                    return Err(SearchError::InsufficientGateways {
                        point,
                        requested: self.k,
                        available: self.chosen.len(),
                    });
                }
            }
        }

        Ok(())
    }

    #[inline]
    fn is_excluded(&self, slot: usize, gateway: Point, gateways: &[Point]) -> bool {
        match self.exclusion {
            Exclusion::Slot => self.chosen.contains(&slot),
            Exclusion::Coordinate => self.chosen.iter().any(|&c| gateways[c] == gateway),
        }
    }
}

/// Select the k nearest distinct gateways for `point`
///
/// Convenience wrapper around [`Assigner`] for one-off calls.
pub fn assign(
    point: Point,
    gateways: &[Point],
    k: usize,
    exclusion: Exclusion,
) -> CoreResult<Vec<Point>> {
    let mut assigner = Assigner::new(k, exclusion);
    let slots = assigner.select(point, gateways)?;
    Ok(slots.iter().map(|&slot| gateways[slot]).collect())
}

/// Distances from `point` to its k nearest distinct gateways
pub fn nearest_distances(
    point: Point,
    gateways: &[Point],
    k: usize,
    exclusion: Exclusion,
) -> CoreResult<Vec<f64>> {
    let mut assigner = Assigner::new(k, exclusion);
    Ok(assigner.distances(point, gateways)?.to_vec())
}
