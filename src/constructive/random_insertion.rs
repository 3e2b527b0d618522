//! Random-insertion constructive heuristic.
//!
//! Same seeding and cheapest-edge placement as nearest insertion, but the
//! next city is drawn uniformly at random from the unvisited set. Skipping
//! the nearest-city scan makes it O(n²), and the randomness makes it the
//! usual choice for the initial tour of an iterated greedy run.

use rand::Rng;

use super::insertion::{check_seedable, insert_cheapest, random_unvisited, seed};
use super::ConstructionHeuristic;
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::models::PartialTour;

/// Random-insertion construction.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, PartialTour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::{ConstructionHeuristic, RandomInsertion};
///
/// let cities: Vec<City> = (0..10).map(|i| City::new(i as f64, (i * i) as f64)).collect();
/// let dm = DistanceMatrix::from_cities(&cities);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let mut state = PartialTour::new(10);
/// RandomInsertion.construct(&dm, &mut state, &mut rng).unwrap();
/// assert_eq!(state.tour().len(), 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInsertion;

impl ConstructionHeuristic for RandomInsertion {
    fn name(&self) -> &str {
        "random_insertion"
    }

    fn construct<R: Rng>(
        &self,
        distances: &DistanceMatrix,
        state: &mut PartialTour,
        rng: &mut R,
    ) -> TspResult<()> {
        check_seedable(state)?;
        seed(state, rng);

        while let Some(city) = random_unvisited(state, rng) {
            insert_cheapest(distances, state, city);
        }

        debug_assert!(state.is_complete());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;
    use crate::evaluation::tour_cost;
    use crate::models::{City, Tour, UnvisitedSet};

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ])
    }

    #[test]
    fn test_square_optimal_for_any_seed() {
        let dm = square();
        for seed in 0..20 {
            let mut rng = u_numflow::random::create_rng(seed);
            let mut state = PartialTour::new(4);
            RandomInsertion.construct(&dm, &mut state, &mut rng).unwrap();
            assert!((tour_cost(&dm, state.tour()) - 4.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_same_seed_same_tour() {
        let cities: Vec<City> = (0..15)
            .map(|i| City::new((i * 7 % 11) as f64, (i * 3 % 5) as f64))
            .collect();
        let dm = DistanceMatrix::from_cities(&cities);

        let build = |seed| {
            let mut rng = u_numflow::random::create_rng(seed);
            let mut state = PartialTour::new(15);
            RandomInsertion.construct(&dm, &mut state, &mut rng).unwrap();
            state.into_parts().0
        };
        assert_eq!(build(5), build(5));
    }

    #[test]
    fn test_keeps_existing_order() {
        let dm = square();
        let mut rng = u_numflow::random::create_rng(1);
        let mut state =
            PartialTour::from_parts(Tour::from(vec![3, 1]), UnvisitedSet::from(vec![0, 2]), 4)
                .expect("valid partition");
        RandomInsertion.construct(&dm, &mut state, &mut rng).unwrap();
        let tour = state.tour().cities();
        let pos3 = tour.iter().position(|&c| c == 3).expect("kept");
        let pos1 = tour.iter().position(|&c| c == 1).expect("kept");
        assert!(pos3 < pos1);
        assert_eq!(tour.len(), 4);
    }

    #[test]
    fn test_two_city_instance() {
        let dm = DistanceMatrix::from_cities(&[City::new(0.0, 0.0), City::new(3.0, 4.0)]);
        let mut rng = u_numflow::random::create_rng(1);
        let mut state = PartialTour::new(2);
        RandomInsertion.construct(&dm, &mut state, &mut rng).unwrap();
        assert_eq!(state.tour().len(), 2);
        assert!((tour_cost(&dm, state.tour()) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_instance_rejected() {
        let dm = DistanceMatrix::from_cities(&[]);
        let mut rng = u_numflow::random::create_rng(1);
        let mut state = PartialTour::new(0);
        assert_eq!(
            RandomInsertion.construct(&dm, &mut state, &mut rng),
            Err(TspError::TooFewCities {
                required: 2,
                actual: 0
            })
        );
    }
}
