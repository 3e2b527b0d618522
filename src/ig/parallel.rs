//! Batch-parallel iterated greedy.
//!
//! Each round draws one seed per candidate from the main RNG, then destroys
//! and rebuilds that many copies of the incumbent concurrently. Candidates
//! are offered to the incumbent in batch order, so a fixed seed reproduces
//! the same result regardless of thread scheduling.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;
use rayon::prelude::*;
use u_numflow::random::create_rng;

use super::config::IgConfig;
use super::destroy::destroy_random;
use super::runner::{finish, initial_incumbent, is_cancelled, log_start, IgResult, IgRunner};
use crate::constructive::ConstructionHeuristic;
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::evaluation::tour_cost;
use crate::models::PartialTour;

impl IgRunner {
    /// Runs iterated greedy evaluating `config.batch_size` candidates per round
    /// in parallel using rayon.
    ///
    /// Every candidate of a round starts from the same incumbent snapshot.
    /// Exactly `config.iterations` candidates are evaluated unless cancelled.
    pub fn run_parallel(distances: &DistanceMatrix, config: &IgConfig) -> TspResult<IgResult> {
        Self::run_parallel_with_cancel(distances, config, None)
    }

    /// Parallel run with an optional cancellation token, checked between rounds.
    pub fn run_parallel_with_cancel(
        distances: &DistanceMatrix,
        config: &IgConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<IgResult> {
        config.validate(distances.size())?;
        log_start(distances, config);

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut incumbent = initial_incumbent(distances, config.initial_heuristic, &mut rng)?;
        let mut cancelled = false;

        while incumbent.iterations() < config.iterations {
            if is_cancelled(&cancel) {
                cancelled = true;
                break;
            }

            let batch = config
                .batch_size
                .min(config.iterations - incumbent.iterations());
            let seeds: Vec<u64> = (0..batch).map(|_| rng.random()).collect();
            let snapshot = incumbent.state();

            let candidates: Vec<(PartialTour, f64)> = seeds
                .par_iter()
                .map(|&seed| -> TspResult<(PartialTour, f64)> {
                    let mut local = create_rng(seed);
                    let mut candidate = snapshot.clone();
                    destroy_random(&mut candidate, config.destruction_size, &mut local);
                    config
                        .heuristic
                        .construct(distances, &mut candidate, &mut local)?;
                    let cost = tour_cost(distances, candidate.tour());
                    Ok((candidate, cost))
                })
                .collect::<TspResult<Vec<_>>>()?;

            for (candidate, cost) in candidates {
                incumbent.try_install(candidate, cost);
            }
        }

        Ok(finish(incumbent, distances, cancelled))
    }
}
