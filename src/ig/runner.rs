//! Iterated greedy execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use u_numflow::random::create_rng;

use super::config::IgConfig;
use super::destroy::destroy_random;
use super::incumbent::Incumbent;
use crate::constructive::{ConstructionHeuristic, HeuristicKind};
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::evaluation::tour_cost;
use crate::models::{PartialTour, Solution, Tour};

/// Result of an iterated greedy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgResult {
    /// The best tour found and its cost.
    pub best: Solution,

    /// Iterations completed.
    pub iterations: usize,

    /// Number of candidates that replaced the incumbent.
    pub improvements: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Incumbent cost before the first iteration, then after each one.
    pub cost_history: Vec<f64>,
}

/// Executes the iterated greedy algorithm.
///
/// # Algorithm
///
/// 1. INIT: build a complete tour with `initial_heuristic`; it becomes the
///    incumbent.
/// 2. DESTROY: copy the incumbent and move `destruction_size` random cities
///    back to the unvisited set.
/// 3. RECONSTRUCT: complete the copy with `heuristic`.
/// 4. ACCEPT: the candidate replaces the incumbent only if strictly cheaper.
///
/// Steps 2-4 repeat `iterations` times.
///
/// # Reference
///
/// Ruiz, R. & Stützle, T. (2007). "A simple and effective iterated greedy
/// algorithm for the permutation flowshop scheduling problem", *European
/// Journal of Operational Research* 177(3), 2033-2049.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ig::{IgConfig, IgRunner};
///
/// let cities: Vec<City> = (0..12)
///     .map(|i| {
///         let a = i as f64 * std::f64::consts::TAU / 12.0;
///         City::new(a.cos(), a.sin())
///     })
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities);
/// let config = IgConfig::new(3, 200).with_seed(42);
///
/// let result = IgRunner::run(&dm, &config).unwrap();
/// assert_eq!(result.best.tour().len(), 12);
/// assert_eq!(result.iterations, 200);
/// ```
pub struct IgRunner;

impl IgRunner {
    /// Runs iterated greedy with an RNG seeded from `config.seed`.
    pub fn run(distances: &DistanceMatrix, config: &IgConfig) -> TspResult<IgResult> {
        Self::run_with_cancel(distances, config, None)
    }

    /// Runs iterated greedy with an optional cancellation token.
    ///
    /// The token is checked once per iteration, before destruction.
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        config: &IgConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<IgResult> {
        config.validate(distances.size())?;
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(distances, config, &mut rng, cancel)
    }

    /// Runs iterated greedy drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored. The configuration is validated before the
    /// first draw, so a rejected call leaves `rng` untouched.
    pub fn run_with_rng<R: Rng>(
        distances: &DistanceMatrix,
        config: &IgConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<IgResult> {
        config.validate(distances.size())?;
        log_start(distances, config);

        let mut incumbent = initial_incumbent(distances, config.initial_heuristic, rng)?;
        let mut cancelled = false;

        for _ in 0..config.iterations {
            if is_cancelled(&cancel) {
                cancelled = true;
                break;
            }

            let mut candidate = incumbent.state().clone();
            destroy_random(&mut candidate, config.destruction_size, rng);
            config.heuristic.construct(distances, &mut candidate, rng)?;
            let cost = tour_cost(distances, candidate.tour());
            incumbent.try_install(candidate, cost);
        }

        Ok(finish(incumbent, distances, cancelled))
    }
}

/// Runs iterated greedy and returns only the best tour.
///
/// The initial tour is built with random insertion; `heuristic` rebuilds
/// each destroyed copy.
///
/// # Errors
///
/// Fails with [`TspError::InvalidDestructionSize`](crate::error::TspError::InvalidDestructionSize)
/// unless `0 < destruction_size < distances.size()`, and with
/// [`TspError::InvalidIterations`](crate::error::TspError::InvalidIterations)
/// if `iterations == 0`. Nothing is drawn from `rng` in either case.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::build_distance_matrix;
/// use u_tsp::evaluation::tour_cost;
/// use u_tsp::constructive::HeuristicKind;
/// use u_tsp::ig::run_iterated_greedy;
///
/// let dm = build_distance_matrix(&[
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ]);
/// let mut rng = u_numflow::random::create_rng(42);
/// let tour = run_iterated_greedy(&dm, 2, 10, HeuristicKind::NearestInsertion, &mut rng).unwrap();
/// assert!((tour_cost(&dm, &tour) - 4.0).abs() < 1e-10);
/// ```
pub fn run_iterated_greedy<R: Rng>(
    distances: &DistanceMatrix,
    destruction_size: usize,
    iterations: usize,
    heuristic: HeuristicKind,
    rng: &mut R,
) -> TspResult<Tour> {
    let config = IgConfig::new(destruction_size, iterations).with_heuristic(heuristic);
    let result = IgRunner::run_with_rng(distances, &config, rng, None)?;
    Ok(result.best.into_tour())
}

pub(super) fn log_start(distances: &DistanceMatrix, config: &IgConfig) {
    log::info!(
        "ig: start n={} destruction_size={} iterations={} initial={} heuristic={}",
        distances.size(),
        config.destruction_size,
        config.iterations,
        config.initial_heuristic.name(),
        config.heuristic.name()
    );
}

pub(super) fn initial_incumbent<R: Rng>(
    distances: &DistanceMatrix,
    heuristic: HeuristicKind,
    rng: &mut R,
) -> TspResult<Incumbent> {
    let mut state = PartialTour::new(distances.size());
    heuristic.construct(distances, &mut state, rng)?;
    let cost = tour_cost(distances, state.tour());
    log::debug!("ig: initial tour cost={cost}");
    Ok(Incumbent::new(state, cost))
}

pub(super) fn is_cancelled(cancel: &Option<Arc<AtomicBool>>) -> bool {
    cancel
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::Relaxed))
}

pub(super) fn finish(incumbent: Incumbent, distances: &DistanceMatrix, cancelled: bool) -> IgResult {
    if cancelled {
        log::warn!("ig: cancelled after {} iterations", incumbent.iterations());
    }
    let result = incumbent.into_result(distances, cancelled);
    log::info!(
        "ig: done iterations={} improvements={} cost={}",
        result.iterations,
        result.improvements,
        result.best.cost()
    );
    result
}
