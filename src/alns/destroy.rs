//! Destroy operator for ALNS-based TSP optimization.

use rand::Rng;
use u_metaheur::alns::DestroyOperator;

use crate::ig::destroy_random;
use crate::models::PartialTour;

/// Removes random cities from the tour.
///
/// Removes `round(len × degree)` cities, at least one and never the whole
/// tour, using the same uniform sampling as iterated greedy.
///
/// # Examples
///
/// ```
/// use u_tsp::alns::RandomRemoval;
/// use u_tsp::models::PartialTour;
/// use u_metaheur::alns::DestroyOperator;
///
/// let mut sol = PartialTour::new(4);
/// for city in 0..4 {
///     sol.visit_push(city);
/// }
/// let mut rng = u_numflow::random::create_rng(42);
/// let destroyed = RandomRemoval.destroy(&sol, 0.5, &mut rng);
/// assert_eq!(destroyed.unvisited().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRemoval;

impl RandomRemoval {
    fn removal_count(tour_len: usize, degree: f64) -> usize {
        let wanted = ((tour_len as f64 * degree).round() as usize).max(1);
        wanted.min(tour_len.saturating_sub(1))
    }
}

impl DestroyOperator<PartialTour> for RandomRemoval {
    fn name(&self) -> &str {
        "random_removal"
    }

    fn destroy<R: Rng>(&self, solution: &PartialTour, degree: f64, rng: &mut R) -> PartialTour {
        let mut sol = solution.clone();
        let count = Self::removal_count(sol.tour().len(), degree);
        destroy_random(&mut sol, count, rng);
        sol
    }
}
