//! Iterated greedy (IG) metaheuristic for the TSP.
//!
//! IG repeatedly removes a few random cities from the best tour found so
//! far, rebuilds the tour with a construction heuristic, and keeps the
//! result only if it is strictly shorter.
//!
//! - [`IgConfig`] — Destruction size, iteration budget, heuristics, seed
//! - [`IgRunner`] — Sequential runner (and `run_parallel` with the `parallel` feature)
//! - [`destroy_random`] — Uniform random destruction
//! - [`run_iterated_greedy`] — Convenience entry point returning the best tour

mod config;
mod destroy;
mod incumbent;
#[cfg(feature = "parallel")]
mod parallel;
mod runner;

pub use config::IgConfig;
pub use destroy::destroy_random;
pub use runner::{run_iterated_greedy, IgResult, IgRunner};
