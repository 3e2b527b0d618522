//! # u-tsp
//!
//! Euclidean travelling salesman heuristics: constructive tour building and
//! an iterated greedy metaheuristic on top of it.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour, UnvisitedSet, PartialTour, Solution)
//! - [`distance`] — Dense distance matrix
//! - [`evaluation`] — Tour cost and incremental insertion cost
//! - [`constructive`] — Construction heuristics (Nearest Neighbor, Nearest/Random Insertion)
//! - [`ig`] — Iterated greedy destroy/reconstruct/accept loop
//! - [`alns`] — Bridge to the `u-metaheur` ALNS runner
//! - [`error`] — Error type for rejected input
//!
//! ## Quick start
//!
//! ```
//! use u_tsp::models::City;
//! use u_tsp::distance::build_distance_matrix;
//! use u_tsp::constructive::HeuristicKind;
//! use u_tsp::evaluation::tour_cost;
//! use u_tsp::ig::run_iterated_greedy;
//!
//! let cities: Vec<City> = (0..20)
//!     .map(|i| City::new((i * 13 % 17) as f64, (i * 7 % 11) as f64))
//!     .collect();
//! let dm = build_distance_matrix(&cities);
//!
//! let mut rng = u_numflow::random::create_rng(42);
//! let tour = run_iterated_greedy(&dm, 4, 200, HeuristicKind::RandomInsertion, &mut rng).unwrap();
//! assert_eq!(tour.len(), 20);
//! assert!(tour_cost(&dm, &tour) > 0.0);
//! ```

pub mod alns;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ig;
pub mod models;
