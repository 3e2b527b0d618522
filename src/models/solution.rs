//! Evaluated tours.

use serde::{Deserialize, Serialize};

use super::Tour;
use crate::distance::DistanceMatrix;
use crate::evaluation::tour_cost;

/// A tour paired with its cyclic length.
///
/// The cost is always derived from the tour through
/// [`tour_cost`]; there is no way to set it directly.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Solution, Tour};
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let sol = Solution::evaluate(Tour::from(vec![0, 1]), &dm);
/// assert!((sol.cost() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    tour: Tour,
    cost: f64,
}

impl Solution {
    /// Evaluates `tour` against `distances`.
    pub fn evaluate(tour: Tour, distances: &DistanceMatrix) -> Self {
        let cost = tour_cost(distances, &tour);
        Self { tour, cost }
    }

    /// The visiting order.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Cyclic tour length.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns `true` if this solution is strictly cheaper than `other`.
    pub fn improves_on(&self, other: &Solution) -> bool {
        self.cost < other.cost
    }

    /// Consumes the solution, returning the tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}
