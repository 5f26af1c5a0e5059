//! Matrix-vector products, sequential reference bodies.
//!
//! Each output entry is one row reduction, accumulated left to right from an
//! initial value (zero, or `y(i)` for the update form).

use crate::core::traits::{ConjIfNeeded, Scalar};
use crate::error::LinalgError;
use crate::kernel::Triangle;
use crate::kernel::rank_k::{conjugate, identity};
use crate::matrix::view::{MatrixView, VectorView, VectorViewMut};
use num_traits::Zero;

pub(crate) const GEMV: &str = "matrix_vector_product";
pub(crate) const GEMV_UPDATE: &str = "matrix_vector_product_update";
pub(crate) const SYMV: &str = "symmetric_matrix_vector_product";
pub(crate) const HEMV: &str = "hermitian_matrix_vector_product";

/// `x.len() == A.ncols()` and every output length equals `A.nrows()`.
pub(crate) fn check<A: MatrixView>(
    op: &'static str,
    a: &A,
    x_len: usize,
    out_lens: &[usize],
) -> Result<(), LinalgError> {
    let (rows, cols) = a.shape();
    LinalgError::check(op, (cols, 1), (x_len, 1))?;
    for &len in out_lens {
        LinalgError::check(op, (rows, 1), (len, 1))?;
    }
    Ok(())
}

pub(crate) fn check_square<A: MatrixView>(
    op: &'static str,
    a: &A,
    x_len: usize,
    y_len: usize,
) -> Result<(), LinalgError> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(LinalgError::NotSquare { op, rows, cols });
    }
    check(op, a, x_len, &[y_len])
}

/// `init + Σ_j A(i, j) x(j)`.
#[inline]
pub(crate) fn row<A, X>(a: &A, x: &X, i: usize, init: A::Elem) -> A::Elem
where
    A: MatrixView,
    X: VectorView<Elem = A::Elem>,
    A::Elem: Scalar,
{
    let mut acc = init;
    for j in 0..a.extent(1) {
        acc = acc + a.read(i, j) * x.read(j);
    }
    acc
}

/// Row `i` of a matrix stored in one triangle; entries outside it are
/// `op(A(j, i))`.
#[inline]
pub(crate) fn triangle_row<A, X, F>(a: &A, triangle: Triangle, x: &X, i: usize, op: F) -> A::Elem
where
    A: MatrixView,
    X: VectorView<Elem = A::Elem>,
    A::Elem: Scalar,
    F: Fn(A::Elem) -> A::Elem,
{
    let mut acc = A::Elem::zero();
    for j in 0..a.extent(1) {
        let a_ij = if triangle.contains(i, j) {
            a.read(i, j)
        } else {
            op(a.read(j, i))
        };
        acc = acc + a_ij * x.read(j);
    }
    acc
}

pub(crate) fn product<A, X, Y>(a: A, x: X, mut y: Y) -> Result<(), LinalgError>
where
    A: MatrixView,
    X: VectorView<Elem = A::Elem>,
    Y: VectorViewMut<Elem = A::Elem>,
    A::Elem: Scalar,
{
    check(GEMV, &a, x.len(), &[y.len()])?;
    for i in 0..a.extent(0) {
        y.write(i, row(&a, &x, i, A::Elem::zero()));
    }
    Ok(())
}

pub(crate) fn product_update<A, X, Y, Z>(a: A, x: X, y: Y, mut z: Z) -> Result<(), LinalgError>
where
    A: MatrixView,
    X: VectorView<Elem = A::Elem>,
    Y: VectorView<Elem = A::Elem>,
    Z: VectorViewMut<Elem = A::Elem>,
    A::Elem: Scalar,
{
    check(GEMV_UPDATE, &a, x.len(), &[y.len(), z.len()])?;
    for i in 0..a.extent(0) {
        z.write(i, row(&a, &x, i, y.read(i)));
    }
    Ok(())
}

pub(crate) fn symmetric<A, X, Y>(a: A, triangle: Triangle, x: X, mut y: Y) -> Result<(), LinalgError>
where
    A: MatrixView,
    X: VectorView<Elem = A::Elem>,
    Y: VectorViewMut<Elem = A::Elem>,
    A::Elem: Scalar,
{
    check_square(SYMV, &a, x.len(), y.len())?;
    for i in 0..a.extent(0) {
        y.write(i, triangle_row(&a, triangle, &x, i, identity));
    }
    Ok(())
}

pub(crate) fn hermitian<A, X, Y>(a: A, triangle: Triangle, x: X, mut y: Y) -> Result<(), LinalgError>
where
    A: MatrixView,
    X: VectorView<Elem = A::Elem>,
    Y: VectorViewMut<Elem = A::Elem>,
    A::Elem: Scalar + ConjIfNeeded,
{
    check_square(HEMV, &a, x.len(), y.len())?;
    for i in 0..a.extent(0) {
        y.write(i, triangle_row(&a, triangle, &x, i, conjugate));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;
    use num_complex::Complex;

    #[test]
    fn product_overwrites_output() {
        let a = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let x = vec![1.0, 0.0, -1.0];
        let mut y = vec![99.0; 2];
        product(&a, &x, &mut y).unwrap();
        assert_eq!(y, vec![-2.0, -2.0]);
    }

    #[test]
    fn update_adds_to_separate_vector() {
        let a = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 1.0 });
        let x = [1.0, 1.0];
        let y = [10.0, 20.0];
        let mut z = [0.0; 2];
        product_update(&a, &x[..], &y[..], &mut z[..]).unwrap();
        assert_eq!(z, [13.0, 23.0]);
        assert_eq!(y, [10.0, 20.0]);
    }

    #[test]
    fn symmetric_ignores_other_triangle() {
        // Strict upper triangle holds garbage; only lower is meaningful.
        let a = Mat::from_fn(2, 2, |i, j| match (i, j) {
            (0, 1) => 1.0e6,
            (1, 0) => 3.0,
            _ => 1.0,
        });
        let x = vec![1.0, 2.0];
        let mut y = vec![0.0; 2];
        symmetric(&a, Triangle::Lower, &x, &mut y).unwrap();
        assert_eq!(y, vec![7.0, 5.0]);
    }

    #[test]
    fn hermitian_conjugates_mirrored_entries() {
        let i1 = Complex::new(0.0, 1.0);
        let a = Mat::from_fn(2, 2, |i, j| match (i, j) {
            (0, 1) => i1,
            (1, 0) => Complex::new(f64::NAN, 0.0),
            _ => Complex::new(1.0, 0.0),
        });
        let x = vec![Complex::new(1.0, 0.0); 2];
        let mut y = vec![Complex::new(0.0, 0.0); 2];
        hermitian(&a, Triangle::Upper, &x, &mut y).unwrap();
        assert_eq!(y[0], Complex::new(1.0, 1.0));
        assert_eq!(y[1], Complex::new(1.0, -1.0));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let a = Mat::<f64>::zeros(2, 3);
        let x = vec![0.0; 2];
        let mut y = vec![5.0; 2];
        let err = product(&a, &x, &mut y).unwrap_err();
        assert_eq!(err, LinalgError::DimensionMismatch { op: GEMV, expected: (3, 1), got: (2, 1) });
        assert_eq!(y, vec![5.0; 2]);

        let err = symmetric(&a, Triangle::Lower, &x, &mut y).unwrap_err();
        assert!(matches!(err, LinalgError::NotSquare { .. }));
    }
}
