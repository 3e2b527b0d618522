//! ALNS problem definition for the TSP.
//!
//! Implements the [`AlnsProblem`](u_metaheur::alns::AlnsProblem) trait so
//! the ALNS runner can optimize tours with the construction heuristics as
//! repair operators.

use rand::Rng;
use u_metaheur::alns::AlnsProblem;

use crate::constructive::{ConstructionHeuristic, HeuristicKind};
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::evaluation::tour_cost;
use crate::models::PartialTour;

/// ALNS problem for the symmetric TSP.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::HeuristicKind;
/// use u_tsp::alns::{ConstructionRepair, RandomRemoval, TspAlnsProblem};
/// use u_metaheur::alns::{AlnsConfig, AlnsRunner};
///
/// let cities: Vec<City> = (0..8).map(|i| City::new(i as f64, (i % 3) as f64)).collect();
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let problem = TspAlnsProblem::new(dm.clone(), HeuristicKind::RandomInsertion).unwrap();
/// let destroy_ops = vec![RandomRemoval];
/// let repair_ops = ConstructionRepair::all(&dm);
/// let config = AlnsConfig::default()
///     .with_max_iterations(100)
///     .with_seed(42);
///
/// let result = AlnsRunner::run(&problem, &destroy_ops, &repair_ops, &config).unwrap();
/// assert!(result.best.is_complete());
/// ```
pub struct TspAlnsProblem {
    distances: DistanceMatrix,
    initial: HeuristicKind,
    unvisited_penalty: f64,
}

impl TspAlnsProblem {
    /// Creates a TSP ALNS problem whose initial tour is built by `initial`.
    ///
    /// # Errors
    ///
    /// Fails with [`TspError::TooFewCities`] for instances below two cities.
    pub fn new(distances: DistanceMatrix, initial: HeuristicKind) -> TspResult<Self> {
        let n = distances.size();
        if n < 2 {
            return Err(TspError::TooFewCities {
                required: 2,
                actual: n,
            });
        }
        let longest = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| distances.get(i, j))
            .fold(0.0_f64, f64::max);
        Ok(Self {
            distances,
            initial,
            unvisited_penalty: 2.0 * longest + 1.0,
        })
    }

    /// The distance matrix of this instance.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}

impl AlnsProblem for TspAlnsProblem {
    type Solution = PartialTour;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> PartialTour {
        let mut sol = PartialTour::new(self.distances.size());
        if let Err(err) = self.initial.construct(&self.distances, &mut sol, rng) {
            log::warn!("alns: initial {} failed: {err}", self.initial.name());
        }
        sol
    }

    fn cost(&self, solution: &PartialTour) -> f64 {
        // Any unvisited city costs more than the longest detour it could add
        let penalty = solution.unvisited().len() as f64 * self.unvisited_penalty;
        tour_cost(&self.distances, solution.tour()) + penalty
    }
}
