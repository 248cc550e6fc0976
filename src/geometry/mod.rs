//! Grid geometry
//!
//! Integer points, Euclidean distance and the bounded grid the search runs on.

pub mod grid;
pub mod point;

pub use grid::Grid;
pub use point::Point;
