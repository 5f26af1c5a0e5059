//! Matrix module: view traits, Faer-backed views and transformed accessors.

pub mod accessor;
pub mod dense;
pub mod view;

pub use accessor::{
    Conjugated, ElementRef, Scaled, Transposed, conjugate_transposed, conjugated, scaled,
    transposed,
};
pub use view::{MatrixStorage, MatrixView, MatrixViewMut, VectorView, VectorViewMut};
