//! Property-based checks over random planar instances.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use u_tsp::constructive::{construct, HeuristicKind};
use u_tsp::distance::build_distance_matrix;
use u_tsp::evaluation::tour_cost;
use u_tsp::ig::{IgConfig, IgRunner};
use u_tsp::models::{City, Tour, UnvisitedSet};

fn cities(min: usize, max: usize) -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), min..=max)
        .prop_map(|pts| pts.into_iter().map(City::from).collect())
}

fn kind() -> impl Strategy<Value = HeuristicKind> {
    prop::sample::select(HeuristicKind::ALL.to_vec())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn is_permutation(tour: &Tour, n: usize) -> bool {
    let mut sorted = tour.cities().to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matrix_symmetric_zero_diagonal(cs in cities(0, 25)) {
        let dm = build_distance_matrix(&cs);
        prop_assert_eq!(dm.size(), cs.len());
        for i in 0..dm.size() {
            prop_assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.size() {
                prop_assert_eq!(dm.get(i, j), dm.get(j, i));
                prop_assert!(dm.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn construction_yields_permutation(cs in cities(2, 30), k in kind(), seed in any::<u64>()) {
        let n = cs.len();
        let dm = build_distance_matrix(&cs);
        let mut rng = u_numflow::random::create_rng(seed);
        let (tour, unvisited) = construct(k, &dm, Tour::new(), UnvisitedSet::all(n), &mut rng)
            .expect("valid input");
        prop_assert!(unvisited.is_empty());
        prop_assert_eq!(tour.len(), n);
        prop_assert!(is_permutation(&tour, n));
    }

    #[test]
    fn cost_invariant_under_rotation_and_reversal(
        cs in cities(2, 25),
        shift in 0usize..25,
        seed in any::<u64>(),
    ) {
        let n = cs.len();
        let dm = build_distance_matrix(&cs);
        let mut rng = u_numflow::random::create_rng(seed);
        let (tour, _) = construct(
            HeuristicKind::RandomInsertion,
            &dm,
            Tour::new(),
            UnvisitedSet::all(n),
            &mut rng,
        )
        .expect("valid input");
        let base = tour_cost(&dm, &tour);

        let mut rotated = tour.cities().to_vec();
        rotated.rotate_left(shift % n);
        prop_assert!(close(base, tour_cost(&dm, &Tour::from(rotated))));

        let mut reversed = tour.cities().to_vec();
        reversed.reverse();
        prop_assert!(close(base, tour_cost(&dm, &Tour::from(reversed))));
    }

    #[test]
    fn final_insertion_matches_brute_force(
        cs in cities(3, 8),
        insertion in prop::sample::select(vec![
            HeuristicKind::NearestInsertion,
            HeuristicKind::RandomInsertion,
        ]),
        seed in any::<u64>(),
    ) {
        let n = cs.len();
        let dm = build_distance_matrix(&cs);
        let mut rng = u_numflow::random::create_rng(seed);
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);
        let last = order.pop().expect("n >= 3");

        let best_brute = (0..n)
            .map(|pos| {
                let mut candidate = order.clone();
                candidate.insert(pos, last);
                tour_cost(&dm, &Tour::from(candidate))
            })
            .fold(f64::INFINITY, f64::min);

        let (tour, _) = construct(
            insertion,
            &dm,
            Tour::from(order.clone()),
            UnvisitedSet::from(vec![last]),
            &mut rng,
        )
        .expect("valid input");
        prop_assert!(is_permutation(&tour, n));
        prop_assert!(close(tour_cost(&dm, &tour), best_brute));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn incumbent_never_worsens(cs in cities(3, 20), k in kind(), seed in any::<u64>()) {
        let n = cs.len();
        let dm = build_distance_matrix(&cs);
        let destruction = (n / 3).max(1);
        let config = IgConfig::new(destruction, 30).with_heuristic(k).with_seed(seed);
        let result = IgRunner::run(&dm, &config).expect("valid parameters");
        prop_assert!(is_permutation(result.best.tour(), n));
        prop_assert_eq!(result.cost_history.len(), 31);
        for w in result.cost_history.windows(2) {
            prop_assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn seeded_runs_reproduce(cs in cities(3, 20), k in kind(), seed in any::<u64>()) {
        let dm = build_distance_matrix(&cs);
        let config = IgConfig::new(1, 20).with_heuristic(k).with_seed(seed);
        let a = IgRunner::run(&dm, &config).expect("valid parameters");
        let b = IgRunner::run(&dm, &config).expect("valid parameters");
        prop_assert_eq!(a.best.tour(), b.best.tour());
        prop_assert_eq!(a.best.cost(), b.best.cost());
    }
}
