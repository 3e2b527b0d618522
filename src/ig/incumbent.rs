//! Best tour held across iterated greedy iterations.

use crate::distance::DistanceMatrix;
use crate::models::{PartialTour, Solution};

/// The incumbent tour and its bookkeeping.
///
/// Owned by the driving loop; every candidate goes through
/// [`try_install`](Incumbent::try_install), the single place the incumbent
/// can change.
#[derive(Debug, Clone)]
pub(crate) struct Incumbent {
    state: PartialTour,
    cost: f64,
    improvements: usize,
    cost_history: Vec<f64>,
}

impl Incumbent {
    pub(crate) fn new(state: PartialTour, cost: f64) -> Self {
        Self {
            state,
            cost,
            improvements: 0,
            cost_history: vec![cost],
        }
    }

    pub(crate) fn state(&self) -> &PartialTour {
        &self.state
    }

    /// Installs `candidate` if it is strictly cheaper, then records the
    /// incumbent cost for this iteration. Returns `true` on install.
    ///
    /// # Panics
    ///
    /// Panics if `candidate` is not a complete tour over every city.
    pub(crate) fn try_install(&mut self, candidate: PartialTour, cost: f64) -> bool {
        assert!(
            candidate.is_complete() && candidate.check_partition().is_ok(),
            "reconstruction produced a broken tour: {:?}",
            candidate.tour().cities()
        );

        let installed = cost < self.cost;
        if installed {
            log::debug!(
                "ig: improvement {} -> {} (iteration {})",
                self.cost,
                cost,
                self.cost_history.len()
            );
            self.state = candidate;
            self.cost = cost;
            self.improvements += 1;
        }
        self.cost_history.push(self.cost);
        installed
    }

    /// Number of candidates offered so far.
    pub(crate) fn iterations(&self) -> usize {
        self.cost_history.len() - 1
    }

    pub(crate) fn into_result(self, distances: &DistanceMatrix, cancelled: bool) -> super::IgResult {
        let iterations = self.iterations();
        let (tour, _) = self.state.into_parts();
        super::IgResult {
            best: Solution::evaluate(tour, distances),
            iterations,
            improvements: self.improvements,
            cancelled,
            cost_history: self.cost_history,
        }
    }
}
