//! City coordinates.

use serde::{Deserialize, Serialize};

/// A city in the Euclidean plane.
///
/// Cities carry no identifier of their own: the index of a city is its
/// position in the slice handed to
/// [`DistanceMatrix::from_cities`](crate::distance::DistanceMatrix::from_cities).
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
