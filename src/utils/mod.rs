//! Helpers shared by tests, benches and demos.

pub mod compare;

pub use compare::{ValueDiff, is_same_matrix, is_same_vector, max_matrix_diff, value_diff};
