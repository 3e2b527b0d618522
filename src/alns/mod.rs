//! ALNS (Adaptive Large Neighborhood Search) components for the TSP.
//!
//! Bridges the construction heuristics to the generic ALNS runner of
//! `u-metaheur`: destruction removes random cities, and each heuristic
//! becomes a repair operator whose weight adapts to how often it improves
//! the tour.
//!
//! - [`TspAlnsProblem`] — [`AlnsProblem`](u_metaheur::alns::AlnsProblem) implementation
//! - [`RandomRemoval`] — Destroy operator
//! - [`ConstructionRepair`] — Repair operator backed by a [`HeuristicKind`](crate::constructive::HeuristicKind)

mod destroy;
mod problem;
mod repair;

pub use destroy::RandomRemoval;
pub use problem::TspAlnsProblem;
pub use repair::ConstructionRepair;
