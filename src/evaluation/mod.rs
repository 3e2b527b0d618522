//! Tour evaluation.
//!
//! - [`tour_cost`] — Cyclic tour length, O(n)
//! - [`cheapest_insertion`] — Best insertion edge for one city, O(n)

mod cost;

pub use cost::{cheapest_insertion, insertion_cost, tour_cost, Insertion};
