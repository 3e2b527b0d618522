//! Constructive heuristics for building and completing TSP tours.
//!
//! Every heuristic implements [`ConstructionHeuristic`] and can complete a
//! tour of any starting size, including the partial tours left behind by a
//! destruction step.
//!
//! - [`NearestNeighbor`] — Append the nearest unvisited city, O(n²)
//! - [`NearestInsertion`] — Insert the city nearest to the tour at its cheapest edge, O(n³)
//! - [`RandomInsertion`] — Insert a random city at its cheapest edge, O(n²)

mod heuristic;
mod insertion;
mod nearest_insertion;
mod nearest_neighbor;
mod random_insertion;

pub use heuristic::{construct, ConstructionHeuristic, HeuristicKind};
pub use nearest_insertion::NearestInsertion;
pub use nearest_neighbor::NearestNeighbor;
pub use random_insertion::RandomInsertion;
