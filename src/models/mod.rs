//! Domain model types for the travelling salesman problem.
//!
//! Cities are points in the plane identified by their position. A tour is
//! an ordered, duplicate-free sequence of city indices closed into a cycle;
//! during construction it is paired with the set of cities still to place.

mod city;
mod solution;
mod tour;

pub use city::City;
pub use solution::Solution;
pub use tour::{PartialTour, Tour, UnvisitedSet};
