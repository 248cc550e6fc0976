//! Integer grid points

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the integer grid
///
/// Used both for grid points being served and for gateway positions. Equality
/// is coordinate equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Create a point at (x, y)
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    ///
    /// Pure and total. Coordinates are widened to `f64` before subtracting,
    /// where every `u32` is exact, and `hypot` avoids overflow in the squares.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
