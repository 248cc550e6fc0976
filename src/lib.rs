//! gwsearch - exhaustive gateway placement search
//!
//! gwsearch places N gateways on a bounded integer grid in every possible way
//! and scores each placement by how well the grid is served: every grid point
//! takes its k nearest distinct gateways, the sum and population standard
//! deviation of those distances are averaged over the grid, and the search
//! reports the minimum mean sum and the minimum mean stddev it saw.
//!
//! # Architecture
//!
//! - **Geometry**: integer points, Euclidean distance, row-major grid walks
//! - **Assignment**: k-nearest selection with slot or coordinate exclusion
//! - **Statistics**: sum, mean and population stddev; point and configuration scores
//! - **Enumerator**: sequential in-place recursion over gateway slots
//! - **Worker**: rayon fan-out over the last slot with a crossbeam result channel
//! - **Coordinator**: min reduction of the score stream, timing and reporting
//!
//! The search is deliberately exhaustive: there is no pruning and no early
//! termination, so the grid size and gateway count must be chosen to fit.

pub mod assignment;
pub mod config;
pub mod coordinator;
pub mod enumerator;
pub mod error;
pub mod geometry;
pub mod measure;
pub mod output;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::{search, Search, SearchResult};
pub use error::SearchError;
pub use geometry::{Grid, Point};
pub use measure::Measure;

/// Result type used throughout gwsearch
pub type Result<T> = anyhow::Result<T>;
