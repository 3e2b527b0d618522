//! Random destruction of a tour.

use rand::seq::index;
use rand::Rng;

use crate::models::PartialTour;

/// Removes `count` distinct tour cities chosen uniformly without replacement.
///
/// Removed cities are appended to the unvisited set in sampling order. The
/// relative order of the remaining tour cities is kept. `count` is capped at
/// the tour length.
///
/// # Examples
///
/// ```
/// use u_tsp::ig::destroy_random;
/// use u_tsp::models::PartialTour;
///
/// let mut state = PartialTour::new(6);
/// for city in 0..6 {
///     state.visit_push(city);
/// }
/// let mut rng = u_numflow::random::create_rng(42);
/// destroy_random(&mut state, 2, &mut rng);
/// assert_eq!(state.tour().len(), 4);
/// assert_eq!(state.unvisited().len(), 2);
/// ```
pub fn destroy_random<R: Rng>(state: &mut PartialTour, count: usize, rng: &mut R) {
    let len = state.tour().len();
    let count = count.min(len);
    if count == 0 {
        return;
    }

    let removed: Vec<usize> = index::sample(rng, len, count)
        .iter()
        .map(|pos| state.tour().cities()[pos])
        .collect();
    for city in removed {
        if let Some(pos) = state.tour().cities().iter().position(|&c| c == city) {
            state.unvisit_at(pos);
        }
    }
}
