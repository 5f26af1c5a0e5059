//! View traits consumed by the kernels.
//!
//! A view exposes an extent per dimension and reads elements by value. Kernels
//! only ever read through [`MatrixView`]/[`VectorView`] and write through the
//! `*Mut` variants, so any storage (faer matrices, slices, transformed
//! accessors) can participate.

/// Read-only rank-2 view.
pub trait MatrixView {
    type Elem: Copy;

    /// Number of entries along `dim` (0 = rows, 1 = columns). Dimensions past
    /// the rank have extent 1.
    fn extent(&self, dim: usize) -> usize;

    /// Element `(i, j)`. Indices must lie within the extents.
    fn read(&self, i: usize, j: usize) -> Self::Elem;

    /// `(extent(0), extent(1))`.
    fn shape(&self) -> (usize, usize) {
        (self.extent(0), self.extent(1))
    }
}

/// Rank-2 view that can be written.
pub trait MatrixViewMut: MatrixView {
    fn write(&mut self, i: usize, j: usize, value: Self::Elem);
}

/// Rank-2 view backed by addressable storage.
pub trait MatrixStorage: MatrixView {
    fn element(&self, i: usize, j: usize) -> &Self::Elem;
}

/// Read-only rank-1 view.
pub trait VectorView {
    type Elem: Copy;
    fn len(&self) -> usize;
    fn read(&self, i: usize) -> Self::Elem;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rank-1 view that can be written.
pub trait VectorViewMut: VectorView {
    fn write(&mut self, i: usize, value: Self::Elem);
}

impl<M: MatrixView + ?Sized> MatrixView for &M {
    type Elem = M::Elem;
    #[inline]
    fn extent(&self, dim: usize) -> usize {
        (**self).extent(dim)
    }
    #[inline]
    fn read(&self, i: usize, j: usize) -> M::Elem {
        (**self).read(i, j)
    }
}

impl<M: MatrixView + ?Sized> MatrixView for &mut M {
    type Elem = M::Elem;
    #[inline]
    fn extent(&self, dim: usize) -> usize {
        (**self).extent(dim)
    }
    #[inline]
    fn read(&self, i: usize, j: usize) -> M::Elem {
        (**self).read(i, j)
    }
}

impl<M: MatrixViewMut + ?Sized> MatrixViewMut for &mut M {
    #[inline]
    fn write(&mut self, i: usize, j: usize, value: M::Elem) {
        (**self).write(i, j, value)
    }
}

impl<M: MatrixStorage + ?Sized> MatrixStorage for &M {
    #[inline]
    fn element(&self, i: usize, j: usize) -> &M::Elem {
        (**self).element(i, j)
    }
}

impl<M: MatrixStorage + ?Sized> MatrixStorage for &mut M {
    #[inline]
    fn element(&self, i: usize, j: usize) -> &M::Elem {
        (**self).element(i, j)
    }
}

impl<T: Copy> VectorView for [T] {
    type Elem = T;
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
    #[inline]
    fn read(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Copy> VectorViewMut for [T] {
    #[inline]
    fn write(&mut self, i: usize, value: T) {
        self[i] = value;
    }
}

impl<T: Copy> VectorView for Vec<T> {
    type Elem = T;
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
    #[inline]
    fn read(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Copy> VectorViewMut for Vec<T> {
    #[inline]
    fn write(&mut self, i: usize, value: T) {
        self[i] = value;
    }
}

impl<V: VectorView + ?Sized> VectorView for &V {
    type Elem = V::Elem;
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
    #[inline]
    fn read(&self, i: usize) -> V::Elem {
        (**self).read(i)
    }
}

impl<V: VectorView + ?Sized> VectorView for &mut V {
    type Elem = V::Elem;
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
    #[inline]
    fn read(&self, i: usize) -> V::Elem {
        (**self).read(i)
    }
}

impl<V: VectorViewMut + ?Sized> VectorViewMut for &mut V {
    #[inline]
    fn write(&mut self, i: usize, value: V::Elem) {
        (**self).write(i, value)
    }
}
