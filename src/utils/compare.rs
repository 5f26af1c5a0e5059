//! Tolerance-based comparison of scalars, vectors and matrices.
//!
//! Complex values are compared componentwise: the difference of two complex
//! numbers is the larger of the real and imaginary differences.

use crate::matrix::view::{MatrixView, VectorView};
use num_complex::Complex;
use num_traits::Float;

/// Magnitude of the difference between two values.
pub trait ValueDiff: Copy {
    type Real: Float;
    fn value_diff(self, other: Self) -> Self::Real;
}

impl ValueDiff for f32 {
    type Real = f32;
    fn value_diff(self, other: f32) -> f32 {
        (self - other).abs()
    }
}

impl ValueDiff for f64 {
    type Real = f64;
    fn value_diff(self, other: f64) -> f64 {
        (self - other).abs()
    }
}

impl<T: Float> ValueDiff for Complex<T> {
    type Real = T;
    fn value_diff(self, other: Complex<T>) -> T {
        let (re, im) = ((self.re - other.re).abs(), (self.im - other.im).abs());
        if re.is_nan() || im.is_nan() { T::nan() } else { re.max(im) }
    }
}

pub fn value_diff<T: ValueDiff>(a: T, b: T) -> T::Real {
    a.value_diff(b)
}

/// Largest elementwise difference, or `None` if the shapes differ.
///
/// A NaN difference is returned as soon as it is seen, so it never compares
/// as within tolerance.
pub fn max_matrix_diff<A, B>(a: A, b: B) -> Option<<A::Elem as ValueDiff>::Real>
where
    A: MatrixView,
    B: MatrixView<Elem = A::Elem>,
    A::Elem: ValueDiff,
{
    if a.shape() != b.shape() {
        return None;
    }
    let (rows, cols) = a.shape();
    let mut max: <A::Elem as ValueDiff>::Real = num_traits::Zero::zero();
    for j in 0..cols {
        for i in 0..rows {
            let d = a.read(i, j).value_diff(b.read(i, j));
            if d.is_nan() {
                return Some(d);
            }
            max = max.max(d);
        }
    }
    Some(max)
}

/// Same shape and every element within `tol`.
pub fn is_same_matrix<A, B>(a: A, b: B, tol: <A::Elem as ValueDiff>::Real) -> bool
where
    A: MatrixView,
    B: MatrixView<Elem = A::Elem>,
    A::Elem: ValueDiff,
{
    max_matrix_diff(a, b).is_some_and(|d| d <= tol)
}

/// Same length and every element within `tol`.
pub fn is_same_vector<X, Y>(x: X, y: Y, tol: <X::Elem as ValueDiff>::Real) -> bool
where
    X: VectorView,
    Y: VectorView<Elem = X::Elem>,
    X::Elem: ValueDiff,
{
    x.len() == y.len() && (0..x.len()).all(|i| x.read(i).value_diff(y.read(i)) <= tol)
}
