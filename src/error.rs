//! Error types for u-tsp.
//!
//! Every variant describes invalid caller input. Broken internal invariants
//! (a tour that skips or repeats a city after reconstruction) are assertion
//! failures, not errors.

use thiserror::Error;

/// Result type alias for u-tsp operations.
pub type TspResult<T> = Result<T, TspError>;

/// Invalid input rejected before any random draw is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TspError {
    /// Not enough cities for the requested operation.
    #[error("at least {required} cities are required, got {actual}")]
    TooFewCities {
        /// Minimum number of cities.
        required: usize,
        /// Number of cities available.
        actual: usize,
    },

    /// Destruction size outside `[1, num_cities - 1]`.
    #[error("destruction size {size} must satisfy 0 < size < {num_cities}")]
    InvalidDestructionSize {
        /// Requested destruction size.
        size: usize,
        /// Number of cities in the instance.
        num_cities: usize,
    },

    /// Iteration budget of zero.
    #[error("iteration budget must be positive")]
    InvalidIterations,

    /// Parallel batch size of zero.
    #[error("batch size must be positive")]
    InvalidBatchSize,

    /// City index not present in the distance matrix.
    #[error("city {city} is out of range for {num_cities} cities")]
    CityOutOfRange {
        /// Offending city index.
        city: usize,
        /// Number of cities in the instance.
        num_cities: usize,
    },

    /// City listed twice across the tour and the unvisited set.
    #[error("city {0} appears more than once")]
    DuplicateCity(usize),

    /// Tour and unvisited set do not cover every city.
    #[error("tour and unvisited set cover {covered} of {num_cities} cities")]
    IncompletePartition {
        /// Cities covered by the pair.
        covered: usize,
        /// Number of cities in the instance.
        num_cities: usize,
    },

    /// Explicit matrix data whose length is not `size * size`.
    #[error("matrix data has {actual} entries, expected {expected}")]
    MatrixSizeMismatch {
        /// `size * size`.
        expected: usize,
        /// Entries supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TspError::InvalidDestructionSize {
            size: 0,
            num_cities: 5,
        };
        assert_eq!(
            err.to_string(),
            "destruction size 0 must satisfy 0 < size < 5"
        );
        assert_eq!(
            TspError::DuplicateCity(3).to_string(),
            "city 3 appears more than once"
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(TspError::InvalidIterations, TspError::InvalidIterations);
        assert_ne!(TspError::InvalidIterations, TspError::InvalidBatchSize);
    }
}
