//! Read-through view of a scalar with conjugation applied on every read.

use crate::core::traits::{AbsIfNeeded, ConjIfNeeded, ScalarRef};
use crate::proxy::ProxyScalar;
use std::fmt;
use std::marker::PhantomData;

/// A scalar seen through complex conjugation.
///
/// `R` is the storage reference (plain, mutable, or [`AtomicRef`](crate::core::AtomicRef)),
/// `V` the value type it yields. The proxy never writes through `R`; all arithmetic
/// produces a plain `V`.
///
/// ```
/// use mdlinalg::proxy::{ConjugatedScalar, ProxyScalar};
/// use num_complex::Complex;
///
/// let z = Complex::new(2.0, -3.0);
/// let p = ConjugatedScalar::new(&z);
/// assert_eq!(p + z, Complex::new(4.0, 0.0));
/// assert_eq!(p.conj(), z);
/// ```
#[derive(Clone, Copy)]
pub struct ConjugatedScalar<R, V> {
    reference: R,
    _value: PhantomData<V>,
}

impl<R, V> ConjugatedScalar<R, V>
where
    R: ScalarRef<V>,
    V: ConjIfNeeded,
{
    pub fn new(reference: R) -> Self {
        Self { reference, _value: PhantomData }
    }

    /// The wrapped storage reference.
    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// `conj_if_needed(read())`, from a single read of the storage.
    #[inline]
    pub fn value(&self) -> V {
        self.reference.read().conj_if_needed()
    }
}

impl<R, V> ProxyScalar for ConjugatedScalar<R, V>
where
    R: ScalarRef<V>,
    V: ConjIfNeeded,
{
    type Value = V;

    #[inline]
    fn value(&self) -> V {
        ConjugatedScalar::value(self)
    }

    /// Conjugating a conjugated view gives back the stored value.
    #[inline]
    fn conj(&self) -> V {
        self.reference.read()
    }

    #[inline]
    fn abs(&self) -> V::Output
    where
        V: AbsIfNeeded,
    {
        self.value().abs_if_needed()
    }
}

impl<R, V> ScalarRef<V> for ConjugatedScalar<R, V>
where
    R: ScalarRef<V>,
    V: ConjIfNeeded,
{
    #[inline]
    fn read(&self) -> V {
        self.value()
    }
}

impl<R, V> fmt::Debug for ConjugatedScalar<R, V>
where
    R: ScalarRef<V>,
    V: ConjIfNeeded + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConjugatedScalar").field(&self.value()).finish()
    }
}

impl<R, V> fmt::Display for ConjugatedScalar<R, V>
where
    R: ScalarRef<V>,
    V: ConjIfNeeded + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
