//! Symmetric and Hermitian rank-k updates, sequential reference bodies.
//!
//! `C += alpha * A * op(A)ᵀ` on one triangle of square `C`, where `op` is the
//! identity (symmetric) or `conj_if_needed` (Hermitian). Column `j` is the outer
//! loop, rows of the triangle the middle loop and the contraction index `k`
//! the inner loop.

use crate::core::traits::{ConjIfNeeded, Scalar};
use crate::error::LinalgError;
use crate::kernel::Triangle;
use crate::matrix::view::{MatrixView, MatrixViewMut};
use std::ops::Mul;

pub(crate) const SYRK: &str = "symmetric_matrix_rank_k_update";
pub(crate) const HERK: &str = "hermitian_matrix_rank_k_update";

/// `C` square and `A.extent(0) == C.extent(0)`.
pub(crate) fn check<A: MatrixView, C: MatrixView>(
    op: &'static str,
    a: &A,
    c: &C,
) -> Result<(), LinalgError> {
    let (rows, cols) = c.shape();
    if rows != cols {
        return Err(LinalgError::NotSquare { op, rows, cols });
    }
    LinalgError::check(op, (rows, a.extent(1)), a.shape())
}

/// Updated value of `C(i, j)` given its current value `c_ij`.
#[inline]
pub(crate) fn entry<S, A, F>(alpha: Option<S>, a: &A, c_ij: A::Elem, i: usize, j: usize, op: F) -> A::Elem
where
    A: MatrixView,
    A::Elem: Scalar,
    S: Copy + Mul<A::Elem, Output = A::Elem>,
    F: Fn(A::Elem) -> A::Elem,
{
    let mut acc = c_ij;
    for k in 0..a.extent(1) {
        let lhs = match alpha {
            Some(alpha) => alpha * a.read(i, k),
            None => a.read(i, k),
        };
        acc = acc + lhs * op(a.read(j, k));
    }
    acc
}

#[inline]
pub(crate) fn identity<T>(t: T) -> T {
    t
}

#[inline]
pub(crate) fn conjugate<T: ConjIfNeeded>(t: T) -> T {
    t.conj_if_needed()
}

fn update<S, A, C, F>(
    op_name: &'static str,
    alpha: Option<S>,
    a: A,
    mut c: C,
    triangle: Triangle,
    op: F,
) -> Result<(), LinalgError>
where
    A: MatrixView,
    C: MatrixViewMut<Elem = A::Elem>,
    A::Elem: Scalar,
    S: Copy + Mul<A::Elem, Output = A::Elem>,
    F: Fn(A::Elem) -> A::Elem + Copy,
{
    check(op_name, &a, &c)?;
    let n = c.extent(0);
    for j in 0..n {
        for i in triangle.rows(j, n) {
            let value = entry(alpha, &a, c.read(i, j), i, j, op);
            c.write(i, j, value);
        }
    }
    Ok(())
}

pub(crate) fn symmetric<S, A, C>(alpha: Option<S>, a: A, c: C, triangle: Triangle) -> Result<(), LinalgError>
where
    A: MatrixView,
    C: MatrixViewMut<Elem = A::Elem>,
    A::Elem: Scalar,
    S: Copy + Mul<A::Elem, Output = A::Elem>,
{
    update(SYRK, alpha, a, c, triangle, identity)
}

pub(crate) fn hermitian<S, A, C>(alpha: Option<S>, a: A, c: C, triangle: Triangle) -> Result<(), LinalgError>
where
    A: MatrixView,
    C: MatrixViewMut<Elem = A::Elem>,
    A::Elem: Scalar + ConjIfNeeded,
    S: Copy + Mul<A::Elem, Output = A::Elem>,
{
    update(HERK, alpha, a, c, triangle, conjugate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;
    use num_complex::Complex;

    #[test]
    fn lower_identity_fills_lower_triangle_only() {
        let a = Mat::from_fn(2, 2, |i, j| if i == j { 1.0 } else { 0.0 });
        let mut c = Mat::<f64>::zeros(2, 2);
        symmetric(None::<f64>, &a, &mut c, Triangle::Lower).unwrap();
        assert_eq!(c[(0, 0)], 1.0);
        assert_eq!(c[(1, 1)], 1.0);
        assert_eq!(c[(1, 0)], 0.0);
        assert_eq!(c[(0, 1)], 0.0);
    }

    #[test]
    fn upper_leaves_strict_lower_untouched() {
        let a = Mat::from_fn(3, 2, |i, j| (i + j + 1) as f64);
        let mut c = Mat::from_fn(3, 3, |_, _| -7.0);
        symmetric(Some(2.0), &a, &mut c, Triangle::Upper).unwrap();
        for j in 0..3 {
            for i in 0..3 {
                let dot: f64 = (0..2).map(|k| a[(i, k)] * a[(j, k)]).sum();
                if i <= j {
                    assert_eq!(c[(i, j)], -7.0 + 2.0 * dot);
                } else {
                    assert_eq!(c[(i, j)], -7.0);
                }
            }
        }
    }

    #[test]
    fn hermitian_conjugates_second_factor() {
        let a = Mat::from_fn(2, 1, |i, _| Complex::new(1.0, i as f64 + 1.0));
        let mut c = Mat::from_fn(2, 2, |_, _| Complex::new(0.0, 0.0));
        hermitian(None::<Complex<f64>>, &a, &mut c, Triangle::Lower).unwrap();
        // (1+2i)(1-i) = 3+i
        assert_eq!(c[(1, 0)], Complex::new(3.0, 1.0));
        assert_eq!(c[(0, 0)], Complex::new(2.0, 0.0));
        assert_eq!(c[(0, 1)], Complex::new(0.0, 0.0));
    }

    #[test]
    fn rejects_bad_shapes_without_writing() {
        let a = Mat::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
        let mut c = Mat::from_fn(2, 2, |_, _| 5.0);
        let err = symmetric(None::<f64>, &a, &mut c, Triangle::Lower).unwrap_err();
        assert!(matches!(err, LinalgError::DimensionMismatch { .. }));
        assert!((0..2).all(|i| (0..2).all(|j| c[(i, j)] == 5.0)));

        let mut rect = Mat::<f64>::zeros(3, 2);
        let err = hermitian(None::<f64>, &a, &mut rect, Triangle::Upper).unwrap_err();
        assert_eq!(err, LinalgError::NotSquare { op: HERK, rows: 3, cols: 2 });
    }

    #[test]
    fn empty_problem_is_a_no_op() {
        let a = Mat::<f64>::zeros(0, 4);
        let mut c = Mat::<f64>::zeros(0, 0);
        assert!(symmetric(None::<f64>, &a, &mut c, Triangle::Lower).is_ok());
    }
}
