//! Tours, unvisited sets, and the partition that ties them together.

use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};

/// An ordered sequence of distinct city indices, read as a cycle.
///
/// The last city connects back to the first. A complete tour visits every
/// city of the instance exactly once.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::from(vec![2, 0, 1]);
/// assert_eq!(tour.len(), 3);
/// let edges: Vec<_> = tour.edges().collect();
/// assert_eq!(edges, vec![(2, 0), (0, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self { cities: Vec::new() }
    }

    /// City indices in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour holds no city.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// First city, if any.
    pub fn first(&self) -> Option<usize> {
        self.cities.first().copied()
    }

    /// Last city, if any.
    pub fn last(&self) -> Option<usize> {
        self.cities.last().copied()
    }

    /// Returns `true` if `city` is in the tour.
    pub fn contains(&self, city: usize) -> bool {
        self.cities.contains(&city)
    }

    /// Cyclic edges `(from, to)` in tour order, closing edge last.
    ///
    /// A single-city tour yields the self-loop `(c, c)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.cities.len();
        (0..n).map(move |i| (self.cities[i], self.cities[(i + 1) % n]))
    }

    /// Consumes the tour, returning the city sequence.
    pub fn into_vec(self) -> Vec<usize> {
        self.cities
    }

    fn push(&mut self, city: usize) {
        self.cities.push(city);
    }

    fn insert(&mut self, position: usize, city: usize) {
        self.cities.insert(position, city);
    }

    fn remove_at(&mut self, position: usize) -> usize {
        self.cities.remove(position)
    }
}

impl From<Vec<usize>> for Tour {
    fn from(cities: Vec<usize>) -> Self {
        Self { cities }
    }
}

/// Cities not yet placed in a tour.
///
/// Insertion order is preserved: selection rules that scan the set ("first
/// minimal pair") depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnvisitedSet {
    cities: Vec<usize>,
}

impl UnvisitedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { cities: Vec::new() }
    }

    /// The set `{0, 1, ..., num_cities - 1}`.
    pub fn all(num_cities: usize) -> Self {
        Self {
            cities: (0..num_cities).collect(),
        }
    }

    /// Cities in insertion order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of unvisited cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if every city has been visited.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns `true` if `city` is unvisited.
    pub fn contains(&self, city: usize) -> bool {
        self.cities.contains(&city)
    }

    /// City at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.cities.get(index).copied()
    }

    /// Consumes the set, returning the city list.
    pub fn into_vec(self) -> Vec<usize> {
        self.cities
    }

    fn push(&mut self, city: usize) {
        self.cities.push(city);
    }

    fn remove(&mut self, city: usize) -> bool {
        match self.cities.iter().position(|&c| c == city) {
            Some(idx) => {
                self.cities.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<usize>> for UnvisitedSet {
    fn from(cities: Vec<usize>) -> Self {
        Self { cities }
    }
}

/// A tour together with the cities it has not visited yet.
///
/// The two halves are disjoint and together cover `0..num_cities`. All
/// mutators move a city from one half to the other, so the partition holds
/// after every call.
///
/// # Examples
///
/// ```
/// use u_tsp::models::PartialTour;
///
/// let mut state = PartialTour::new(3);
/// state.visit_push(1);
/// state.visit_insert(0, 2);
/// assert_eq!(state.tour().cities(), &[2, 1]);
/// assert_eq!(state.unvisited().cities(), &[0]);
/// assert!(!state.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialTour {
    tour: Tour,
    unvisited: UnvisitedSet,
    num_cities: usize,
}

impl PartialTour {
    /// Empty tour with every city unvisited.
    pub fn new(num_cities: usize) -> Self {
        Self {
            tour: Tour::new(),
            unvisited: UnvisitedSet::all(num_cities),
            num_cities,
        }
    }

    /// Pairs a tour with its unvisited set after validating the partition.
    ///
    /// # Errors
    ///
    /// Fails if a city is out of range, appears twice, or is missing from
    /// both halves.
    pub fn from_parts(tour: Tour, unvisited: UnvisitedSet, num_cities: usize) -> TspResult<Self> {
        let state = Self {
            tour,
            unvisited,
            num_cities,
        };
        state.check_partition()?;
        Ok(state)
    }

    /// The visited part, in order.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// The unvisited part.
    pub fn unvisited(&self) -> &UnvisitedSet {
        &self.unvisited
    }

    /// Number of cities in the instance.
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Returns `true` once every city is in the tour.
    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }

    /// Splits into `(tour, unvisited)`.
    pub fn into_parts(self) -> (Tour, UnvisitedSet) {
        (self.tour, self.unvisited)
    }

    /// Moves an unvisited city to the end of the tour.
    ///
    /// # Panics
    ///
    /// Panics if `city` is not unvisited.
    pub fn visit_push(&mut self, city: usize) {
        assert!(self.unvisited.remove(city), "city {city} is not unvisited");
        self.tour.push(city);
    }

    /// Moves an unvisited city into the tour at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `city` is not unvisited or `position > tour.len()`.
    pub fn visit_insert(&mut self, position: usize, city: usize) {
        assert!(self.unvisited.remove(city), "city {city} is not unvisited");
        self.tour.insert(position, city);
    }

    /// Moves the tour city at `position` back to the unvisited set.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn unvisit_at(&mut self, position: usize) -> usize {
        let city = self.tour.remove_at(position);
        self.unvisited.push(city);
        city
    }

    /// Verifies that tour and unvisited set partition `0..num_cities`.
    pub fn check_partition(&self) -> TspResult<()> {
        let n = self.num_cities;
        let mut seen = vec![false; n];
        for &city in self.tour.cities().iter().chain(self.unvisited.cities()) {
            if city >= n {
                return Err(TspError::CityOutOfRange {
                    city,
                    num_cities: n,
                });
            }
            if seen[city] {
                return Err(TspError::DuplicateCity(city));
            }
            seen[city] = true;
        }
        let covered = self.tour.len() + self.unvisited.len();
        if covered != n {
            return Err(TspError::IncompletePartition {
                covered,
                num_cities: n,
            });
        }
        Ok(())
    }
}
