//! Pairwise distances between cities.
//!
//! Provides a dense distance matrix built once per instance.

mod matrix;

pub use matrix::{build_distance_matrix, DistanceMatrix};
