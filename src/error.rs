//! Fatal search errors
//!
//! Every variant is a contract violation, not a transient condition. There is
//! no retry or degraded mode: the first error aborts the whole search and no
//! partial result is returned.

use crate::geometry::Point;

/// Errors raised by the search core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The nearest assignment ran out of un-excluded gateways
    #[error("cannot assign {requested} distinct gateways to point {point}: only {available} available")]
    InsufficientGateways {
        point: Point,
        requested: usize,
        available: usize,
    },

    /// A statistic was requested over zero samples
    #[error("empty sample set: {context}")]
    EmptySampleSet { context: &'static str },

    /// A fan-out finished without delivering one result per unit
    #[error("fan-out incomplete: expected {expected} results, received {received}")]
    FanoutIncomplete { expected: usize, received: usize },
}

/// Result type for the search core
pub type CoreResult<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_gateways_message() {
        let err = SearchError::InsufficientGateways {
            point: Point::new(1, 2),
            requested: 3,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "cannot assign 3 distinct gateways to point (1, 2): only 2 available"
        );
    }

    #[test]
    fn test_empty_sample_set_message() {
        let err = SearchError::EmptySampleSet { context: "mean" };
        assert_eq!(err.to_string(), "empty sample set: mean");
    }
}
