//! Repair operator for ALNS-based TSP optimization.

use rand::Rng;
use u_metaheur::alns::RepairOperator;

use crate::constructive::{ConstructionHeuristic, HeuristicKind};
use crate::distance::DistanceMatrix;
use crate::models::PartialTour;

/// Rebuilds a destroyed tour with one of the construction heuristics.
///
/// Registering one repair operator per [`HeuristicKind`] lets ALNS learn
/// which heuristic pays off on the instance at hand.
pub struct ConstructionRepair {
    distances: DistanceMatrix,
    heuristic: HeuristicKind,
}

impl ConstructionRepair {
    /// Creates a repair operator backed by `heuristic`.
    pub fn new(distances: DistanceMatrix, heuristic: HeuristicKind) -> Self {
        Self {
            distances,
            heuristic,
        }
    }

    /// One repair operator per heuristic, in [`HeuristicKind::ALL`] order.
    pub fn all(distances: &DistanceMatrix) -> Vec<Self> {
        HeuristicKind::ALL
            .iter()
            .map(|&kind| Self::new(distances.clone(), kind))
            .collect()
    }

    /// The heuristic this operator runs.
    pub fn heuristic(&self) -> HeuristicKind {
        self.heuristic
    }
}

impl RepairOperator<PartialTour> for ConstructionRepair {
    fn name(&self) -> &str {
        self.heuristic.name()
    }

    fn repair<R: Rng>(&self, solution: &PartialTour, rng: &mut R) -> PartialTour {
        let mut sol = solution.clone();
        if let Err(err) = self.heuristic.construct(&self.distances, &mut sol, rng) {
            log::warn!("alns: {} repair failed: {err}", self.heuristic.name());
        }
        sol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn setup() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(2.0, 0.0),
            City::new(3.0, 0.0),
            City::new(4.0, 0.0),
        ])
    }

    #[test]
    fn test_all_operators() {
        let ops = ConstructionRepair::all(&setup());
        let kinds: Vec<HeuristicKind> = ops.iter().map(|op| op.heuristic()).collect();
        assert_eq!(kinds, HeuristicKind::ALL.to_vec());
        assert_eq!(ops[1].name(), "nearest_insertion");
    }

    #[test]
    fn test_repair_completes() {
        let dm = setup();
        let mut partial = PartialTour::new(5);
        partial.visit_push(4);
        partial.visit_push(0);
        let mut rng = u_numflow::random::create_rng(42);
        for op in ConstructionRepair::all(&dm) {
            let repaired = op.repair(&partial, &mut rng);
            assert!(repaired.is_complete(), "{}", op.name());
            assert!(repaired.check_partition().is_ok());
        }
    }

    #[test]
    fn test_repair_failure_returns_input() {
        let dm = DistanceMatrix::from_cities(&[City::new(0.0, 0.0)]);
        let op = ConstructionRepair::new(dm, HeuristicKind::RandomInsertion);
        let mut rng = u_numflow::random::create_rng(42);
        let repaired = op.repair(&PartialTour::new(1), &mut rng);
        assert!(!repaired.is_complete());
    }
}
