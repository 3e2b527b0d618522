//! Nearest-insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Starting from a tour of at least two cities, repeatedly:
//! 1. pick the unvisited city closest to any city already in the tour;
//! 2. insert it on the tour edge `(c1, c2)` minimizing
//!    `d(c1, c) + d(c, c2) - d(c1, c2)`.
//!
//! # Complexity
//!
//! O(n³) worst case: each of the n steps scans all (tour, unvisited) pairs.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use rand::Rng;

use super::insertion::{check_seedable, insert_cheapest, seed};
use super::ConstructionHeuristic;
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::models::PartialTour;

/// Nearest-insertion construction.
///
/// An empty tour is seeded with two random cities, a single-city tour with
/// one more. Selection ties go to the first (tour city, unvisited city) pair
/// scanned, tour order outside, unvisited order inside.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, PartialTour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::tour_cost;
/// use u_tsp::constructive::{ConstructionHeuristic, NearestInsertion};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let mut state = PartialTour::new(4);
/// NearestInsertion.construct(&dm, &mut state, &mut rng).unwrap();
/// assert!((tour_cost(&dm, state.tour()) - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestInsertion;

impl ConstructionHeuristic for NearestInsertion {
    fn name(&self) -> &str {
        "nearest_insertion"
    }

    fn construct<R: Rng>(
        &self,
        distances: &DistanceMatrix,
        state: &mut PartialTour,
        rng: &mut R,
    ) -> TspResult<()> {
        check_seedable(state)?;
        seed(state, rng);

        while let Some(city) = nearest_to_tour(distances, state) {
            insert_cheapest(distances, state, city);
        }

        debug_assert!(state.is_complete());
        Ok(())
    }
}

/// Unvisited city with the smallest distance to any tour city.
fn nearest_to_tour(distances: &DistanceMatrix, state: &PartialTour) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &visited in state.tour().cities() {
        for &candidate in state.unvisited().cities() {
            let d = distances.get(visited, candidate);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((candidate, d));
            }
        }
    }
    best.map(|(city, _)| city)
}
