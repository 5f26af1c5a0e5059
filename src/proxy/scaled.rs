//! Read-through view of a scalar multiplied by a fixed factor on every read.

use crate::core::traits::{AbsIfNeeded, ConjIfNeeded, ScalarRef};
use crate::proxy::ProxyScalar;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Mul;

/// A scalar seen through multiplication by `scaling_factor`.
///
/// The factor is copied in at construction and never changes. Reading yields
/// `scaling_factor * read(reference)`; the storage is never written.
#[derive(Clone, Copy)]
pub struct ScaledScalar<S, R, V> {
    scaling_factor: S,
    reference: R,
    _value: PhantomData<V>,
}

impl<S, R, V> ScaledScalar<S, R, V>
where
    S: Copy + Mul<V, Output = V>,
    R: ScalarRef<V>,
{
    pub fn new(scaling_factor: S, reference: R) -> Self {
        Self { scaling_factor, reference, _value: PhantomData }
    }

    pub fn scaling_factor(&self) -> S {
        self.scaling_factor
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    #[inline]
    pub fn value(&self) -> V {
        self.scaling_factor * self.reference.read()
    }
}

impl<S, R, V> ProxyScalar for ScaledScalar<S, R, V>
where
    S: Copy + Mul<V, Output = V>,
    R: ScalarRef<V>,
    V: ConjIfNeeded,
{
    type Value = V;

    #[inline]
    fn value(&self) -> V {
        ScaledScalar::value(self)
    }

    /// Scaling is not undone by conjugation: this is `conj_if_needed(s * z)`.
    #[inline]
    fn conj(&self) -> V {
        self.value().conj_if_needed()
    }

    // Unsigned value types register `abs_if_needed` as the identity, so `s * z`
    // comes back unchanged for them.
    #[inline]
    fn abs(&self) -> V::Output
    where
        V: AbsIfNeeded,
    {
        self.value().abs_if_needed()
    }
}

impl<S, R, V> ScalarRef<V> for ScaledScalar<S, R, V>
where
    S: Copy + Mul<V, Output = V>,
    R: ScalarRef<V>,
{
    #[inline]
    fn read(&self) -> V {
        self.value()
    }
}

impl<S, R, V> fmt::Debug for ScaledScalar<S, R, V>
where
    S: Copy + Mul<V, Output = V> + fmt::Debug,
    R: ScalarRef<V>,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaledScalar")
            .field("scaling_factor", &self.scaling_factor)
            .field("value", &self.value())
            .finish()
    }
}

impl<S, R, V> fmt::Display for ScaledScalar<S, R, V>
where
    S: Copy + Mul<V, Output = V>,
    R: ScalarRef<V>,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn complex_value_scaled_by_real_factor() {
        let z = Complex::new(-1.0f64, -2.0);
        let p = ScaledScalar::new(3.0, &z);
        assert_eq!(p.value(), Complex::new(-3.0, -6.0));
        assert_eq!(p.scaling_factor(), 3.0);
    }

    #[test]
    fn conj_keeps_scaling() {
        let z = Complex::new(2.0f64, -3.0);
        let s = Complex::new(4.0, 5.0);
        let p = ScaledScalar::new(s, &z);
        assert_eq!(p.conj(), (s * z).conj());
    }

    #[test]
    fn unsigned_abs_returns_scaled_value() {
        let z = 7u32;
        let p = ScaledScalar::new(3u32, &z);
        assert_eq!(p.abs(), 21);
    }

    #[test]
    fn mutable_reference_is_only_read() {
        let mut z = 5i32;
        {
            let p = ScaledScalar::new(-2, &mut z);
            assert_eq!(p.abs(), 10);
            assert_eq!(p.value(), -10);
        }
        assert_eq!(z, 5);
    }
}
