//! Transformed views: conjugated, scaled and transposed.
//!
//! None of these allocate. Each element read goes through the matching proxy
//! over an [`ElementRef`] into the wrapped view, so nesting works the same way
//! proxies nest.

use crate::core::traits::{ConjIfNeeded, ScalarRef};
use crate::matrix::view::{MatrixStorage, MatrixView, MatrixViewMut};
use crate::proxy::{ConjugatedScalar, ScaledScalar};
use std::ops::Mul;

/// Reference to element `(row, col)` of a view.
pub struct ElementRef<'a, M: ?Sized> {
    view: &'a M,
    row: usize,
    col: usize,
}

impl<M: ?Sized> Clone for ElementRef<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for ElementRef<'_, M> {}

impl<'a, M: MatrixView + ?Sized> ElementRef<'a, M> {
    pub fn new(view: &'a M, row: usize, col: usize) -> Self {
        Self { view, row, col }
    }
}

impl<M: MatrixView + ?Sized> ScalarRef<M::Elem> for ElementRef<'_, M> {
    #[inline]
    fn read(&self) -> M::Elem {
        self.view.read(self.row, self.col)
    }
}

/// A view whose elements read as their conjugates.
#[derive(Clone, Copy, Debug)]
pub struct Conjugated<M> {
    inner: M,
}

impl<M> Conjugated<M>
where
    M: MatrixView,
    M::Elem: ConjIfNeeded,
{
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Element `(i, j)` as a proxy.
    #[inline]
    pub fn proxy(&self, i: usize, j: usize) -> ConjugatedScalar<ElementRef<'_, M>, M::Elem> {
        ConjugatedScalar::new(ElementRef::new(&self.inner, i, j))
    }

    /// Undo the conjugation, returning the wrapped view.
    pub fn conjugated(self) -> M {
        self.inner
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M> MatrixView for Conjugated<M>
where
    M: MatrixView,
    M::Elem: ConjIfNeeded,
{
    type Elem = M::Elem;
    #[inline]
    fn extent(&self, dim: usize) -> usize {
        self.inner.extent(dim)
    }
    #[inline]
    fn read(&self, i: usize, j: usize) -> M::Elem {
        self.proxy(i, j).value()
    }
}

/// A view whose elements read multiplied by a fixed factor.
#[derive(Clone, Copy, Debug)]
pub struct Scaled<S, M> {
    scaling_factor: S,
    inner: M,
}

impl<S, M> Scaled<S, M>
where
    M: MatrixView,
    S: Copy + Mul<M::Elem, Output = M::Elem>,
{
    pub fn new(scaling_factor: S, inner: M) -> Self {
        Self { scaling_factor, inner }
    }

    #[inline]
    pub fn proxy(&self, i: usize, j: usize) -> ScaledScalar<S, ElementRef<'_, M>, M::Elem> {
        ScaledScalar::new(self.scaling_factor, ElementRef::new(&self.inner, i, j))
    }

    pub fn scaling_factor(&self) -> S {
        self.scaling_factor
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<S, M> MatrixView for Scaled<S, M>
where
    M: MatrixView,
    S: Copy + Mul<M::Elem, Output = M::Elem>,
{
    type Elem = M::Elem;
    #[inline]
    fn extent(&self, dim: usize) -> usize {
        self.inner.extent(dim)
    }
    #[inline]
    fn read(&self, i: usize, j: usize) -> M::Elem {
        self.proxy(i, j).value()
    }
}

/// Layout transpose: `(i, j)` addresses `(j, i)` of the wrapped view.
///
/// Unlike the other transforms this one keeps writes and element addresses, so
/// a transposed output view can be handed to a kernel.
#[derive(Clone, Copy, Debug)]
pub struct Transposed<M> {
    inner: M,
}

impl<M: MatrixView> Transposed<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn transposed(self) -> M {
        self.inner
    }
}

impl<M: MatrixView> MatrixView for Transposed<M> {
    type Elem = M::Elem;
    #[inline]
    fn extent(&self, dim: usize) -> usize {
        match dim {
            0 => self.inner.extent(1),
            1 => self.inner.extent(0),
            _ => 1,
        }
    }
    #[inline]
    fn read(&self, i: usize, j: usize) -> M::Elem {
        self.inner.read(j, i)
    }
}

impl<M: MatrixViewMut> MatrixViewMut for Transposed<M> {
    #[inline]
    fn write(&mut self, i: usize, j: usize, value: M::Elem) {
        self.inner.write(j, i, value)
    }
}

impl<M: MatrixStorage> MatrixStorage for Transposed<M> {
    #[inline]
    fn element(&self, i: usize, j: usize) -> &M::Elem {
        self.inner.element(j, i)
    }
}

pub fn conjugated<M>(view: M) -> Conjugated<M>
where
    M: MatrixView,
    M::Elem: ConjIfNeeded,
{
    Conjugated::new(view)
}

pub fn scaled<S, M>(scaling_factor: S, view: M) -> Scaled<S, M>
where
    M: MatrixView,
    S: Copy + Mul<M::Elem, Output = M::Elem>,
{
    Scaled::new(scaling_factor, view)
}

pub fn transposed<M: MatrixView>(view: M) -> Transposed<M> {
    Transposed::new(view)
}

/// `conjugated(transposed(view))`.
pub fn conjugate_transposed<M>(view: M) -> Conjugated<Transposed<M>>
where
    M: MatrixView,
    M::Elem: ConjIfNeeded,
{
    Conjugated::new(Transposed::new(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::ProxyScalar;
    use faer::Mat;
    use num_complex::Complex;

    fn sample() -> Mat<Complex<f64>> {
        Mat::from_fn(2, 3, |i, j| Complex::new(i as f64 + 1.0, j as f64 - 1.0))
    }

    #[test]
    fn conjugated_reads_conjugates() {
        let a = sample();
        let c = conjugated(&a);
        assert_eq!(c.shape(), (2, 3));
        assert_eq!(c.read(1, 2), a[(1, 2)].conj());
        assert_eq!(c.proxy(1, 2).conj(), a[(1, 2)]);
    }

    #[test]
    fn double_conjugation_reads_stored_values() {
        let a = sample();
        let cc = conjugated(conjugated(&a));
        for j in 0..3 {
            for i in 0..2 {
                assert_eq!(cc.read(i, j), a[(i, j)]);
            }
        }
        let back = conjugated(&a).conjugated();
        assert_eq!(MatrixView::read(&back, 0, 1), a[(0, 1)]);
    }

    #[test]
    fn scaled_proxy_arithmetic() {
        let a = Mat::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
        let s = scaled(3.0, &a);
        assert_eq!(s.read(1, 1), 9.0);
        assert_eq!(s.proxy(1, 0) + 1.0, 7.0);
    }

    #[test]
    fn transposed_swaps_extents_and_writes() {
        let mut a = Mat::<f64>::zeros(2, 3);
        let mut t = transposed(&mut a);
        assert_eq!(t.shape(), (3, 2));
        t.write(2, 1, 5.0);
        assert_eq!(a[(1, 2)], 5.0);
    }

    #[test]
    fn conjugate_transpose() {
        let a = sample();
        let h = conjugate_transposed(&a);
        assert_eq!(h.shape(), (3, 2));
        assert_eq!(h.read(2, 0), a[(0, 2)].conj());
    }
}
