//! Seeding and placement shared by the insertion heuristics.

use rand::seq::index;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::evaluation::cheapest_insertion;
use crate::models::PartialTour;

/// Rejects states an insertion heuristic cannot seed.
///
/// Runs before any random draw so a rejected call leaves the RNG untouched.
pub(super) fn check_seedable(state: &PartialTour) -> TspResult<()> {
    if state.tour().is_empty() && state.unvisited().len() < 2 {
        return Err(TspError::TooFewCities {
            required: 2,
            actual: state.unvisited().len(),
        });
    }
    Ok(())
}

/// Grows the tour to at least two cities.
///
/// An empty tour receives two distinct random cities, a single-city tour one
/// random city appended. Larger tours are left alone.
pub(super) fn seed<R: Rng>(state: &mut PartialTour, rng: &mut R) {
    match state.tour().len() {
        0 => {
            let picks: Vec<usize> = index::sample(rng, state.unvisited().len(), 2)
                .iter()
                .filter_map(|i| state.unvisited().get(i))
                .collect();
            for city in picks {
                state.visit_push(city);
            }
        }
        1 => {
            if let Some(city) = random_unvisited(state, rng) {
                state.visit_push(city);
            }
        }
        _ => {}
    }
}

/// Uniformly random unvisited city, or `None` if all are visited.
pub(super) fn random_unvisited<R: Rng>(state: &PartialTour, rng: &mut R) -> Option<usize> {
    let remaining = state.unvisited().len();
    if remaining == 0 {
        return None;
    }
    state.unvisited().get(rng.random_range(0..remaining))
}

/// Inserts `city` on the tour edge with the smallest cost increase.
pub(super) fn insert_cheapest(distances: &DistanceMatrix, state: &mut PartialTour, city: usize) {
    match cheapest_insertion(distances, state.tour(), city) {
        Some(ins) => state.visit_insert(ins.position, city),
        None => state.visit_push(city),
    }
}
