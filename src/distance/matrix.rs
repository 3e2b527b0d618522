//! Dense distance matrix.

use crate::error::{TspError, TspResult};
use crate::models::City;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per instance and read-only afterwards, so it can be shared
/// freely between threads.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(3.0, 4.0),
///     City::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from city coordinates.
    ///
    /// The result is symmetric with a zero diagonal.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut dm = Self::zeros(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                dm.data[i * n + j] = d;
                dm.data[j * n + i] = d;
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Any real-valued pairwise matrix is accepted; the heuristics assume
    /// symmetry but do not enforce it.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::MatrixSizeMismatch`] if the data length is not
    /// `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> TspResult<Self> {
        if data.len() != size * size {
            return Err(TspError::MatrixSizeMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate closest to `from`.
    ///
    /// Equally near candidates resolve to the lowest city index, independent
    /// of the order of `candidates`. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates.iter().copied().min_by(|&a, &b| {
            self.get(from, a)
                .total_cmp(&self.get(from, b))
                .then(a.cmp(&b))
        })
    }
}

/// Builds the Euclidean distance matrix for `cities`.
///
/// O(n²) time and space.
pub fn build_distance_matrix(cities: &[City]) -> DistanceMatrix {
    DistanceMatrix::from_cities(cities)
}
