//! BLAS-style kernels over matrix and vector views.
//!
//! The free functions here run on the default [`Sequential`] policy. To pick a
//! different backend, call the same-named method on an
//! [`ExecutionPolicy`] value instead.

pub mod matvec;
pub mod rank_k;

use crate::core::traits::{ConjIfNeeded, Scalar};
use crate::error::LinalgError;
use crate::matrix::view::{MatrixView, MatrixViewMut, VectorView, VectorViewMut};
use crate::parallel::{ExecutionPolicy, Sequential};
use std::ops::{Mul, Range};

/// Which triangle of a square matrix a kernel reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Triangle {
    /// Entries with `i >= j`.
    Lower,
    /// Entries with `i <= j`.
    Upper,
}

impl Triangle {
    /// Rows of column `j` inside the triangle of an `n x n` matrix.
    #[inline]
    pub fn rows(self, j: usize, n: usize) -> Range<usize> {
        match self {
            Triangle::Lower => j..n,
            Triangle::Upper => 0..j + 1,
        }
    }

    #[inline]
    pub fn contains(self, i: usize, j: usize) -> bool {
        match self {
            Triangle::Lower => i >= j,
            Triangle::Upper => i <= j,
        }
    }

    pub fn opposite(self) -> Triangle {
        match self {
            Triangle::Lower => Triangle::Upper,
            Triangle::Upper => Triangle::Lower,
        }
    }
}

/// `C += A * Aᵀ` on `triangle` of `C`.
pub fn symmetric_matrix_rank_k_update<A, C>(a: A, c: C, triangle: Triangle) -> Result<(), LinalgError>
where
    A: MatrixView + Sync,
    C: MatrixViewMut<Elem = A::Elem> + Sync,
    A::Elem: Scalar,
{
    Sequential.symmetric_matrix_rank_k_update(None::<A::Elem>, a, c, triangle)
}

/// `C += alpha * A * Aᵀ` on `triangle` of `C`.
pub fn symmetric_matrix_rank_k_update_scaled<S, A, C>(
    alpha: S,
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
    Sequential.symmetric_matrix_rank_k_update(Some(alpha), a, c, triangle)
}

/// `C += A * conj(A)ᵀ` on `triangle` of `C`.
pub fn hermitian_matrix_rank_k_update<A, C>(a: A, c: C, triangle: Triangle) -> Result<(), LinalgError>
where
    A: MatrixView + Sync,
    C: MatrixViewMut<Elem = A::Elem> + Sync,
    A::Elem: Scalar + ConjIfNeeded,
{
    Sequential.hermitian_matrix_rank_k_update(None::<A::Elem>, a, c, triangle)
}

/// `C += alpha * A * conj(A)ᵀ` on `triangle` of `C`.
pub fn hermitian_matrix_rank_k_update_scaled<S, A, C>(
    alpha: S,
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
    Sequential.hermitian_matrix_rank_k_update(Some(alpha), a, c, triangle)
}

/// `y = A * x`.
pub fn matrix_vector_product<A, X, Y>(a: A, x: X, y: Y) -> Result<(), LinalgError>
where
    A: MatrixView + Sync,
    X: VectorView<Elem = A::Elem> + Sync,
    Y: VectorViewMut<Elem = A::Elem>,
    A::Elem: Scalar,
{
    Sequential.matrix_vector_product(a, x, y)
}

/// `z = y + A * x`.
pub fn matrix_vector_product_update<A, X, Y, Z>(a: A, x: X, y: Y, z: Z) -> Result<(), LinalgError>
where
    A: MatrixView + Sync,
    X: VectorView<Elem = A::Elem> + Sync,
    Y: VectorView<Elem = A::Elem> + Sync,
    Z: VectorViewMut<Elem = A::Elem>,
    A::Elem: Scalar,
{
    Sequential.matrix_vector_product_update(a, x, y, z)
}

/// `y = A * x` with `A` symmetric and stored in `triangle`.
pub fn symmetric_matrix_vector_product<A, X, Y>(
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
    Sequential.symmetric_matrix_vector_product(a, triangle, x, y)
}

/// `y = A * x` with `A` Hermitian and stored in `triangle`.
pub fn hermitian_matrix_vector_product<A, X, Y>(
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
    Sequential.hermitian_matrix_vector_product(a, triangle, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_row_ranges() {
        assert_eq!(Triangle::Lower.rows(1, 4), 1..4);
        assert_eq!(Triangle::Upper.rows(1, 4), 0..2);
        assert_eq!(Triangle::Upper.rows(3, 4), 0..4);
        assert!(Triangle::Lower.contains(2, 2));
        assert!(!Triangle::Upper.contains(2, 1));
        assert_eq!(Triangle::Lower.opposite(), Triangle::Upper);
    }
}
