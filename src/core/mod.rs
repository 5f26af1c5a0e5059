//! Scalar capabilities shared by the proxies and the kernels.

pub mod traits;
pub mod wrappers;

pub use traits::{
    AbsIfNeeded, ConjIfNeeded, ExplicitLoad, Scalar, ScalarRef, abs_if_needed, conj_if_needed,
};
pub use wrappers::AtomicRef;
