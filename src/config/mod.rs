//! Configuration for execution policies.

pub mod options;

pub use options::ParallelOptions;
