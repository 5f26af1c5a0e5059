//! mdlinalg: dense BLAS-style kernels over matrix views.
//!
//! This crate provides conjugated and scaled scalar proxies that read through to
//! existing storage, transformed matrix views built on them, and rank-k update
//! and matrix-vector kernels dispatched through pluggable execution policies
//! (sequential by default, rayon-parallel behind the `rayon` feature).

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod kernel;
pub mod matrix;
pub mod proxy;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use kernel::*;
pub use matrix::*;
pub use parallel::{ExecutionPolicy, Inline, Sequential};
pub use proxy::{ConjugatedScalar, ProxyScalar, ScaledScalar};
pub use utils::*;

#[cfg(feature = "rayon")]
pub use parallel::Parallel;
