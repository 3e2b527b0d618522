//! Tour cost and incremental insertion cost.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Cyclic length of a tour: consecutive edges plus the closing edge.
///
/// The closing edge is added for partial tours as well. An empty or
/// single-city tour costs 0.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::tour_cost;
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(2.0, 0.0),
/// ]);
/// // 0→1→2 plus closing edge 2→0 = 1 + 1 + 2
/// assert!((tour_cost(&dm, &Tour::from(vec![0, 1, 2])) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_cost(distances: &DistanceMatrix, tour: &Tour) -> f64 {
    tour.edges().map(|(a, b)| distances.get(a, b)).sum()
}

/// Cost increase of placing `city` on the edge `from → to`.
pub fn insertion_cost(distances: &DistanceMatrix, from: usize, city: usize, to: usize) -> f64 {
    distances.get(from, city) + distances.get(city, to) - distances.get(from, to)
}

/// Cheapest place to insert a city into a tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insertion {
    /// Index in the tour the city should be inserted at.
    pub position: usize,
    /// Increase in cyclic tour length.
    pub cost_increase: f64,
}

/// Finds the edge of `tour` where inserting `city` adds the least length.
///
/// Every cyclic edge is a candidate, the closing edge last; ties keep the
/// earliest edge in tour order. Inserting on the closing edge appends.
/// Returns `None` when the tour has fewer than two cities, since there is no
/// edge to break.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::cheapest_insertion;
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0.0, 0.0),
///     City::new(2.0, 0.0),
///     City::new(1.0, 0.0),
/// ]);
/// let ins = cheapest_insertion(&dm, &Tour::from(vec![0, 1]), 2).unwrap();
/// assert_eq!(ins.position, 1);
/// assert!(ins.cost_increase.abs() < 1e-10);
/// ```
pub fn cheapest_insertion(distances: &DistanceMatrix, tour: &Tour, city: usize) -> Option<Insertion> {
    if tour.len() < 2 {
        return None;
    }

    let mut best: Option<Insertion> = None;
    for (i, (from, to)) in tour.edges().enumerate() {
        let cost = insertion_cost(distances, from, city, to);
        if best.as_ref().is_none_or(|b| cost < b.cost_increase) {
            best = Some(Insertion {
                position: i + 1,
                cost_increase: cost,
            });
        }
    }
    best
}
