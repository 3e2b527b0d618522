//! The construction capability and its selector.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{NearestInsertion, NearestNeighbor, RandomInsertion};
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::models::{PartialTour, Tour, UnvisitedSet};

/// Completes a partial tour.
///
/// Implementations start from any valid [`PartialTour`] (empty, one city,
/// or more) and must leave it complete: every unvisited city moved into the
/// tour exactly once. Input checks happen before the first random draw.
pub trait ConstructionHeuristic {
    /// Returns a human-readable name for this heuristic.
    fn name(&self) -> &str;

    /// Moves every unvisited city of `state` into its tour.
    ///
    /// # Panics
    ///
    /// May panic if `state` refers to cities beyond `distances.size()`.
    fn construct<R: Rng>(
        &self,
        distances: &DistanceMatrix,
        state: &mut PartialTour,
        rng: &mut R,
    ) -> TspResult<()>;
}

/// Selects one of the three construction heuristics.
///
/// Passed by value into [`IgConfig`](crate::ig::IgConfig) and the ALNS
/// bridge so the caller, not ambient dispatch, decides how tours are built.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::{ConstructionHeuristic, HeuristicKind};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::{City, PartialTour};
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
/// ]);
/// let mut rng = u_numflow::random::create_rng(7);
/// let mut state = PartialTour::new(3);
/// HeuristicKind::NearestInsertion.construct(&dm, &mut state, &mut rng).unwrap();
/// assert!(state.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeuristicKind {
    /// Append the unvisited city nearest to the last one added.
    NearestNeighbor,
    /// Insert the unvisited city nearest to the tour at its cheapest edge.
    NearestInsertion,
    /// Insert a uniformly random unvisited city at its cheapest edge.
    #[default]
    RandomInsertion,
}

impl HeuristicKind {
    /// All variants, in declaration order.
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::NearestNeighbor,
        HeuristicKind::NearestInsertion,
        HeuristicKind::RandomInsertion,
    ];
}

impl ConstructionHeuristic for HeuristicKind {
    fn name(&self) -> &str {
        match self {
            HeuristicKind::NearestNeighbor => "nearest_neighbor",
            HeuristicKind::NearestInsertion => "nearest_insertion",
            HeuristicKind::RandomInsertion => "random_insertion",
        }
    }

    fn construct<R: Rng>(
        &self,
        distances: &DistanceMatrix,
        state: &mut PartialTour,
        rng: &mut R,
    ) -> TspResult<()> {
        match self {
            HeuristicKind::NearestNeighbor => NearestNeighbor.construct(distances, state, rng),
            HeuristicKind::NearestInsertion => NearestInsertion.construct(distances, state, rng),
            HeuristicKind::RandomInsertion => RandomInsertion.construct(distances, state, rng),
        }
    }
}

/// Completes `tour` with the cities in `unvisited` using `kind`.
///
/// # Errors
///
/// Fails if the pair does not partition `0..distances.size()`, or if an
/// insertion heuristic is asked to seed from fewer than two cities. Both
/// checks run before any random draw.
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::{construct, HeuristicKind};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::{City, Tour, UnvisitedSet};
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(2.0, 0.0),
///     City::new(3.0, 0.0),
/// ]);
/// let mut rng = u_numflow::random::create_rng(42);
/// let (tour, unvisited) = construct(
///     HeuristicKind::NearestNeighbor,
///     &dm,
///     Tour::from(vec![0]),
///     UnvisitedSet::from(vec![3, 2, 1]),
///     &mut rng,
/// )
/// .unwrap();
/// assert_eq!(tour.cities(), &[0, 1, 2, 3]);
/// assert!(unvisited.is_empty());
/// ```
pub fn construct<R: Rng>(
    kind: HeuristicKind,
    distances: &DistanceMatrix,
    tour: Tour,
    unvisited: UnvisitedSet,
    rng: &mut R,
) -> TspResult<(Tour, UnvisitedSet)> {
    let mut state = PartialTour::from_parts(tour, unvisited, distances.size())?;
    kind.construct(distances, &mut state, rng)?;
    Ok(state.into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;
    use crate::models::City;

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(2.0, 0.0),
            City::new(3.0, 0.0),
        ])
    }

    #[test]
    fn test_default_is_random_insertion() {
        assert_eq!(HeuristicKind::default(), HeuristicKind::RandomInsertion);
    }

    #[test]
    fn test_names_distinct() {
        let names: Vec<&str> = HeuristicKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec!["nearest_neighbor", "nearest_insertion", "random_insertion"]
        );
    }

    #[test]
    fn test_construct_every_kind_completes() {
        let dm = line();
        for kind in HeuristicKind::ALL {
            let mut rng = u_numflow::random::create_rng(1);
            let (tour, unvisited) =
                construct(kind, &dm, Tour::new(), UnvisitedSet::all(4), &mut rng)
                    .expect("valid input");
            let mut sorted = tour.into_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3], "{}", kind.name());
            assert!(unvisited.is_empty());
        }
    }

    #[test]
    fn test_construct_rejects_bad_partition() {
        let dm = line();
        let mut rng = u_numflow::random::create_rng(1);
        let err = construct(
            HeuristicKind::RandomInsertion,
            &dm,
            Tour::from(vec![0, 1]),
            UnvisitedSet::from(vec![1, 2, 3]),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, TspError::DuplicateCity(1));
    }

    #[test]
    fn test_construct_complete_input_is_noop() {
        let dm = line();
        let mut rng = u_numflow::random::create_rng(1);
        for kind in HeuristicKind::ALL {
            let (tour, _) = construct(
                kind,
                &dm,
                Tour::from(vec![2, 0, 3, 1]),
                UnvisitedSet::new(),
                &mut rng,
            )
            .expect("valid input");
            assert_eq!(tour.cities(), &[2, 0, 3, 1]);
        }
    }

    #[test]
    fn test_serde_kind() {
        let json = serde_json::to_string(&HeuristicKind::NearestInsertion).expect("serialize");
        assert_eq!(json, "\"NearestInsertion\"");
        let back: HeuristicKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, HeuristicKind::NearestInsertion);
    }
}
