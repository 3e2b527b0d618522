//! Iterated greedy configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::HeuristicKind;
use crate::error::{TspError, TspResult};

/// Configuration for the iterated greedy algorithm.
///
/// # Parameters
///
/// - `destruction_size` (L): cities removed from the incumbent each
///   iteration, `0 < L < n`.
/// - `iterations` (I): number of destroy/reconstruct/accept cycles.
/// - `heuristic`: rebuilds the destroyed tour.
/// - `initial_heuristic`: builds the first incumbent from scratch.
///
/// # Examples
///
/// ```
/// use u_tsp::ig::IgConfig;
/// use u_tsp::constructive::HeuristicKind;
///
/// let config = IgConfig::new(3, 500)
///     .with_heuristic(HeuristicKind::NearestInsertion)
///     .with_seed(42);
/// assert!(config.validate(10).is_ok());
/// assert!(config.validate(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgConfig {
    /// Cities removed per iteration (L).
    pub destruction_size: usize,

    /// Number of iterations (I).
    pub iterations: usize,

    /// Heuristic used to reconstruct destroyed tours.
    pub heuristic: HeuristicKind,

    /// Heuristic used for the initial tour.
    pub initial_heuristic: HeuristicKind,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Candidates evaluated concurrently per round by the parallel runner.
    pub batch_size: usize,
}

impl IgConfig {
    /// Creates a configuration with random-insertion construction throughout.
    pub fn new(destruction_size: usize, iterations: usize) -> Self {
        Self {
            destruction_size,
            iterations,
            heuristic: HeuristicKind::RandomInsertion,
            initial_heuristic: HeuristicKind::RandomInsertion,
            seed: None,
            batch_size: 8,
        }
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_initial_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.initial_heuristic = heuristic;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Validates the configuration against an instance of `num_cities`.
    pub fn validate(&self, num_cities: usize) -> TspResult<()> {
        if self.destruction_size == 0 || self.destruction_size >= num_cities {
            return Err(TspError::InvalidDestructionSize {
                size: self.destruction_size,
                num_cities,
            });
        }
        if self.iterations == 0 {
            return Err(TspError::InvalidIterations);
        }
        if self.batch_size == 0 {
            return Err(TspError::InvalidBatchSize);
        }
        Ok(())
    }
}
