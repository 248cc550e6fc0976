//! Bounded integer grid
//!
//! A grid with inclusive bounds `width` and `height` holds
//! `(width + 1) * (height + 1)` points. Everything that walks the grid does so
//! in row-major order: `y` outer, `x` inner, so `x` varies fastest.
//!
//! # Example
//!
//! ```
//! use gwsearch::geometry::{Grid, Point};
//!
//! let grid = Grid::new(1, 1);
//! let points: Vec<Point> = grid.points().collect();
//! assert_eq!(
//!     points,
//!     vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
//! );
//! ```

use super::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive grid bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
}

impl Grid {
    /// Create a grid spanning (0, 0) to (width, height) inclusive
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of points on the grid, or `None` if it does not fit in `u64`
    ///
    /// Only `width = height = u32::MAX` overflows.
    #[inline]
    pub fn checked_cell_count(&self) -> Option<u64> {
        (u64::from(self.width) + 1).checked_mul(u64::from(self.height) + 1)
    }

    /// Number of points on the grid, saturating at `u64::MAX`
    ///
    /// Exact for every grid that [`Grid::search_space`] accepts.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        self.checked_cell_count().unwrap_or(u64::MAX)
    }

    /// Whether a point lies inside the bounds
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x <= self.width && point.y <= self.height
    }

    /// Advance a point to its row-major successor
    ///
    /// Returns `false` once the sweep is finished, in which case the point has
    /// wrapped back to (0, 0).
    #[inline]
    pub fn increment(&self, point: &mut Point) -> bool {
        if point.x < self.width {
            point.x += 1;
            return true;
        }
        point.x = 0;
        if point.y < self.height {
            point.y += 1;
            return true;
        }
        point.y = 0;
        false
    }

    /// Iterate every point in row-major order
    pub fn points(&self) -> GridPoints {
        GridPoints {
            grid: *self,
            next: Point::default(),
            remaining: self.cell_count(),
        }
    }

    /// Row-major index of a point
    #[inline]
    pub fn cell_index(&self, point: Point) -> u64 {
        debug_assert!(self.contains(point), "{} outside grid {}", point, self);
        u64::from(point.y) * (u64::from(self.width) + 1) + u64::from(point.x)
    }

    /// Point at a row-major index (the inverse of [`Grid::cell_index`])
    #[inline]
    pub fn point_at(&self, index: u64) -> Point {
        let row = u64::from(self.width) + 1;
        Point::new((index % row) as u32, (index / row) as u32)
    }

    /// Number of configurations of `gateways` slots, or `None` on overflow
    pub fn search_space(&self, gateways: usize) -> Option<u64> {
        let exp = u32::try_from(gateways).ok()?;
        self.checked_cell_count()?.checked_pow(exp)
    }

    /// Decode a configuration ordinal into slot positions
    ///
    /// Slot 0 is the most significant digit in base `cell_count()`, matching
    /// the enumeration order where slot 0 varies slowest.
    pub fn configuration_at(&self, ordinal: u64, gateways: usize) -> Vec<Point> {
        let cells = self.cell_count();
        let mut slots = vec![Point::default(); gateways];
        let mut rest = ordinal;
        for slot in slots.iter_mut().rev() {
            *slot = self.point_at(rest % cells);
            rest /= cells;
        }
        slots
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", u64::from(self.width) + 1, u64::from(self.height) + 1)
    }
}

/// Row-major iterator over grid points
#[derive(Debug, Clone)]
pub struct GridPoints {
    grid: Grid,
    next: Point,
    remaining: u64,
}

impl Iterator for GridPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        self.grid.increment(&mut self.next);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
