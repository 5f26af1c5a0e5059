//! View traits on top of Faer.
//!
//! `Mat<T>`, `MatRef<'_, T>` and `MatMut<'_, T>` are the concrete dense views the
//! kernels are tested and benchmarked against. Elements are addressed by
//! `(row, col)` as in Faer itself.

use crate::matrix::view::{MatrixStorage, MatrixView, MatrixViewMut};
use faer::{Mat, MatMut, MatRef};

/// Construct a `Mat<T>` from raw column-major storage.
///
/// # Panics
/// If `data.len() != nrows * ncols`.
pub fn from_col_major<T: Copy>(nrows: usize, ncols: usize, data: &[T]) -> Mat<T> {
    assert_eq!(data.len(), nrows * ncols, "Column-major data length does not match nrows * ncols");
    Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])
}

impl<T: Copy> MatrixView for Mat<T> {
    type Elem = T;
    #[inline]
    fn extent(&self, dim: usize) -> usize {
        match dim {
            0 => self.nrows(),
            1 => self.ncols(),
            _ => 1,
        }
    }
    #[inline]
    fn read(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Copy> MatrixViewMut for Mat<T> {
    #[inline]
    fn write(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
    }
}

impl<T: Copy> MatrixStorage for Mat<T> {
    #[inline]
    fn element(&self, i: usize, j: usize) -> &T {
        &self[(i, j)]
    }
}

impl<T: Copy> MatrixView for MatRef<'_, T> {
    type Elem = T;
    #[inline]
    fn extent(&self, dim: usize) -> usize {
        match dim {
            0 => self.nrows(),
            1 => self.ncols(),
            _ => 1,
        }
    }
    #[inline]
    fn read(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Copy> MatrixStorage for MatRef<'_, T> {
    #[inline]
    fn element(&self, i: usize, j: usize) -> &T {
        &self[(i, j)]
    }
}

impl<T: Copy> MatrixView for MatMut<'_, T> {
    type Elem = T;
    #[inline]
    fn extent(&self, dim: usize) -> usize {
        match dim {
            0 => self.nrows(),
            1 => self.ncols(),
            _ => 1,
        }
    }
    #[inline]
    fn read(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Copy> MatrixViewMut for MatMut<'_, T> {
    #[inline]
    fn write(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
    }
}

impl<T: Copy> MatrixStorage for MatMut<'_, T> {
    #[inline]
    fn element(&self, i: usize, j: usize) -> &T {
        &self[(i, j)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn col_major_layout() {
        let m = from_col_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(MatrixView::read(&m, 1, 0), 2.0);
        assert_eq!(MatrixView::read(&m, 0, 2), 5.0);
        assert_eq!(m.extent(2), 1);
    }

    #[test]
    #[should_panic(expected = "does not match nrows * ncols")]
    fn col_major_rejects_short_data() {
        from_col_major(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn writes_through_mat_mut() {
        let mut m = Mat::<f64>::zeros(2, 2);
        {
            let mut v = m.as_mut();
            v.write(1, 0, 7.0);
        }
        assert_eq!(m[(1, 0)], 7.0);
        assert_eq!(*m.as_ref().element(1, 0), 7.0);
    }
}
