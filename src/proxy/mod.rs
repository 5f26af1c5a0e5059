//! Proxy scalars: value-like views that transform a stored scalar on every read.
//!
//! - [`ConjugatedScalar`]: reads `conj_if_needed(z)`.
//! - [`ScaledScalar`]: reads `scaling_factor * z`.
//!
//! Both interoperate with plain values, references to values and other proxies
//! through `+ - * /` on either side, and through unary `-`. Results are always
//! plain values.

use crate::core::traits::AbsIfNeeded;

pub mod conjugated;
pub mod scaled;
mod ops;

pub use conjugated::ConjugatedScalar;
pub use scaled::ScaledScalar;

/// Common interface of the proxy scalars.
pub trait ProxyScalar {
    /// The plain value type every operation produces.
    type Value;

    /// The transformed value, from one read of the storage.
    fn value(&self) -> Self::Value;

    /// Conjugate of the proxy as a value.
    fn conj(&self) -> Self::Value;

    /// Absolute value of the transformed value.
    fn abs(&self) -> <Self::Value as AbsIfNeeded>::Output
    where
        Self::Value: AbsIfNeeded;
}

/// Free-function form of [`ProxyScalar::abs`].
pub fn abs<P>(p: &P) -> <P::Value as AbsIfNeeded>::Output
where
    P: ProxyScalar,
    P::Value: AbsIfNeeded,
{
    p.abs()
}

/// Free-function form of [`ProxyScalar::conj`].
pub fn conj<P: ProxyScalar>(p: &P) -> P::Value {
    p.conj()
}
