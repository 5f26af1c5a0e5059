//! Execution policies.
//!
//! Every kernel is a provided method of [`ExecutionPolicy`] whose default body
//! is the sequential reference implementation. A backend overrides the kernels
//! it accelerates; everything else falls back to the default at compile time.

use crate::core::traits::{ConjIfNeeded, Scalar};
use crate::error::LinalgError;
use crate::kernel::{Triangle, matvec, rank_k};
use crate::matrix::view::{MatrixView, MatrixViewMut, VectorView, VectorViewMut};
use std::ops::Mul;

#[cfg(feature = "rayon")]
pub mod rayon_exec;
#[cfg(feature = "rayon")]
pub use rayon_exec::Parallel;

pub trait ExecutionPolicy {
    /// Short name used in log records.
    fn name(&self) -> &'static str;

    fn symmetric_matrix_rank_k_update<S, A, C>(
        &self,
        alpha: Option<S>,
        a: A,
        c: C,
        triangle: Triangle,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        C: MatrixViewMut<Elem = A::Elem> + Sync,
        A::Elem: Scalar,
        S: Copy + Send + Sync + Mul<A::Elem, Output = A::Elem>,
    {
        log::trace!("{}: {} policy", rank_k::SYRK, self.name());
        rank_k::symmetric(alpha, a, c, triangle)
    }

    fn hermitian_matrix_rank_k_update<S, A, C>(
        &self,
        alpha: Option<S>,
        a: A,
        c: C,
        triangle: Triangle,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        C: MatrixViewMut<Elem = A::Elem> + Sync,
        A::Elem: Scalar + ConjIfNeeded,
        S: Copy + Send + Sync + Mul<A::Elem, Output = A::Elem>,
    {
        log::trace!("{}: {} policy", rank_k::HERK, self.name());
        rank_k::hermitian(alpha, a, c, triangle)
    }

    fn matrix_vector_product<A, X, Y>(&self, a: A, x: X, y: Y) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        X: VectorView<Elem = A::Elem> + Sync,
        Y: VectorViewMut<Elem = A::Elem>,
        A::Elem: Scalar,
    {
        log::trace!("{}: {} policy", matvec::GEMV, self.name());
        matvec::product(a, x, y)
    }

    fn matrix_vector_product_update<A, X, Y, Z>(
        &self,
        a: A,
        x: X,
        y: Y,
        z: Z,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        X: VectorView<Elem = A::Elem> + Sync,
        Y: VectorView<Elem = A::Elem> + Sync,
        Z: VectorViewMut<Elem = A::Elem>,
        A::Elem: Scalar,
    {
        log::trace!("{}: {} policy", matvec::GEMV_UPDATE, self.name());
        matvec::product_update(a, x, y, z)
    }

    fn symmetric_matrix_vector_product<A, X, Y>(
        &self,
        a: A,
        triangle: Triangle,
        x: X,
        y: Y,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        X: VectorView<Elem = A::Elem> + Sync,
        Y: VectorViewMut<Elem = A::Elem>,
        A::Elem: Scalar,
    {
        log::trace!("{}: {} policy", matvec::SYMV, self.name());
        matvec::symmetric(a, triangle, x, y)
    }

    fn hermitian_matrix_vector_product<A, X, Y>(
        &self,
        a: A,
        triangle: Triangle,
        x: X,
        y: Y,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        X: VectorView<Elem = A::Elem> + Sync,
        Y: VectorViewMut<Elem = A::Elem>,
        A::Elem: Scalar + ConjIfNeeded,
    {
        log::trace!("{}: {} policy", matvec::HEMV, self.name());
        matvec::hermitian(a, triangle, x, y)
    }
}

/// Runs the reference kernels on the calling thread. Backends call into this
/// when they decline a problem.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inline;

impl ExecutionPolicy for Inline {
    fn name(&self) -> &'static str {
        "inline"
    }
}

/// The policy behind the crate's free kernel functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl ExecutionPolicy for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;
    use std::cell::Cell;

    /// Overrides only the symmetric rank-k update.
    struct Counting {
        calls: Cell<usize>,
    }

    impl ExecutionPolicy for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn symmetric_matrix_rank_k_update<S, A, C>(
            &self,
            alpha: Option<S>,
            a: A,
            c: C,
            triangle: Triangle,
        ) -> Result<(), LinalgError>
        where
            A: MatrixView + Sync,
            C: MatrixViewMut<Elem = A::Elem> + Sync,
            A::Elem: Scalar,
            S: Copy + Send + Sync + Mul<A::Elem, Output = A::Elem>,
        {
            self.calls.set(self.calls.get() + 1);
            Inline.symmetric_matrix_rank_k_update(alpha, a, c, triangle)
        }
    }

    #[test]
    fn override_is_used_and_rest_falls_back() {
        let exec = Counting { calls: Cell::new(0) };
        let a = Mat::from_fn(3, 2, |i, j| (i + 2 * j) as f64);
        let mut c = Mat::<f64>::zeros(3, 3);
        exec.symmetric_matrix_rank_k_update(None::<f64>, &a, &mut c, Triangle::Lower).unwrap();
        assert_eq!(exec.calls.get(), 1);

        let mut h = Mat::<f64>::zeros(3, 3);
        exec.hermitian_matrix_rank_k_update(None::<f64>, &a, &mut h, Triangle::Lower).unwrap();
        assert_eq!(exec.calls.get(), 1);
        assert_eq!(c, h);
    }

    #[test]
    fn inline_and_sequential_agree() {
        let a = Mat::from_fn(3, 3, |i, j| (i * 3 + j) as f64 - 4.0);
        let x = vec![1.0, -2.0, 0.5];
        let mut y1 = vec![0.0; 3];
        let mut y2 = vec![0.0; 3];
        Inline.matrix_vector_product(&a, &x, &mut y1).unwrap();
        Sequential.matrix_vector_product(&a, &x, &mut y2).unwrap();
        assert_eq!(y1, y2);
    }
}
