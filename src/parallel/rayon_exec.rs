// rayon-based parallel execution

use crate::config::ParallelOptions;
use crate::core::traits::{ConjIfNeeded, Scalar};
use crate::error::LinalgError;
use crate::kernel::{Triangle, matvec, rank_k};
use crate::matrix::view::{MatrixView, MatrixViewMut, VectorView, VectorViewMut};
use crate::parallel::{ExecutionPolicy, Inline};
use num_traits::Zero;
use rayon::prelude::*;
use std::ops::Mul;

/// Splits kernels across a dedicated rayon pool.
///
/// Rank-k updates are split by column of `C`, matrix-vector products by row of
/// the output. Every output element is reduced in the same order as the
/// sequential kernels, so results match them bit for bit. All reads finish
/// before the output view is written.
pub struct Parallel {
    pool: rayon::ThreadPool,
    options: ParallelOptions,
}

impl Parallel {
    pub fn new() -> Result<Self, LinalgError> {
        Self::with_options(ParallelOptions::default())
    }

    pub fn with_options(options: ParallelOptions) -> Result<Self, LinalgError> {
        let threads = options.num_threads.unwrap_or_else(num_cpus::get);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| LinalgError::Backend(e.to_string()))?;
        log::debug!("parallel policy: {} threads, min_work {}", threads, options.min_work);
        Ok(Parallel { pool, options })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn options(&self) -> &ParallelOptions {
        &self.options
    }

    fn runs_inline(&self, op: &str, work: usize) -> bool {
        if work < self.options.min_work {
            log::debug!("{}: {} multiply-adds below min_work, running inline", op, work);
            true
        } else {
            false
        }
    }

    fn rank_k<S, A, C, F>(
        &self,
        alpha: Option<S>,
        a: &A,
        c: &mut C,
        triangle: Triangle,
        op: F,
    ) where
        A: MatrixView + Sync,
        C: MatrixViewMut<Elem = A::Elem> + Sync,
        A::Elem: Scalar,
        S: Copy + Send + Sync + Mul<A::Elem, Output = A::Elem>,
        F: Fn(A::Elem) -> A::Elem + Copy + Send + Sync,
    {
        let n = c.extent(0);
        let columns: Vec<Vec<A::Elem>> = {
            let c = &*c;
            self.pool.install(|| {
                (0..n)
                    .into_par_iter()
                    .map(|j| {
                        triangle
                            .rows(j, n)
                            .map(|i| rank_k::entry(alpha, a, c.read(i, j), i, j, op))
                            .collect::<Vec<_>>()
                    })
                    .collect()
            })
        };
        for (j, column) in columns.into_iter().enumerate() {
            for (i, value) in triangle.rows(j, n).zip(column) {
                c.write(i, j, value);
            }
        }
    }

    fn rows<T, F, Y>(&self, m: usize, row: F, y: &mut Y)
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
        Y: VectorViewMut<Elem = T>,
    {
        let values: Vec<T> = self.pool.install(|| (0..m).into_par_iter().map(row).collect());
        for (i, value) in values.into_iter().enumerate() {
            y.write(i, value);
        }
    }
}

fn rank_k_work<A: MatrixView>(a: &A) -> usize {
    let (n, k) = a.shape();
    n * (n + 1) / 2 * k
}

fn matvec_work<A: MatrixView>(a: &A) -> usize {
    let (m, n) = a.shape();
    m * n
}

impl ExecutionPolicy for Parallel {
    fn name(&self) -> &'static str {
        "rayon"
    }

    fn symmetric_matrix_rank_k_update<S, A, C>(
        &self,
        alpha: Option<S>,
        a: A,
        mut c: C,
        triangle: Triangle,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        C: MatrixViewMut<Elem = A::Elem> + Sync,
        A::Elem: Scalar,
        S: Copy + Send + Sync + Mul<A::Elem, Output = A::Elem>,
    {
        if self.runs_inline(rank_k::SYRK, rank_k_work(&a)) {
            return Inline.symmetric_matrix_rank_k_update(alpha, a, c, triangle);
        }
        rank_k::check(rank_k::SYRK, &a, &c)?;
        self.rank_k(alpha, &a, &mut c, triangle, rank_k::identity);
        Ok(())
    }

    fn hermitian_matrix_rank_k_update<S, A, C>(
        &self,
        alpha: Option<S>,
        a: A,
        mut c: C,
        triangle: Triangle,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        C: MatrixViewMut<Elem = A::Elem> + Sync,
        A::Elem: Scalar + ConjIfNeeded,
        S: Copy + Send + Sync + Mul<A::Elem, Output = A::Elem>,
    {
        if self.runs_inline(rank_k::HERK, rank_k_work(&a)) {
            return Inline.hermitian_matrix_rank_k_update(alpha, a, c, triangle);
        }
        rank_k::check(rank_k::HERK, &a, &c)?;
        self.rank_k(alpha, &a, &mut c, triangle, rank_k::conjugate);
        Ok(())
    }

    fn matrix_vector_product<A, X, Y>(&self, a: A, x: X, mut y: Y) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        X: VectorView<Elem = A::Elem> + Sync,
        Y: VectorViewMut<Elem = A::Elem>,
        A::Elem: Scalar,
    {
        if self.runs_inline(matvec::GEMV, matvec_work(&a)) {
            return Inline.matrix_vector_product(a, x, y);
        }
        matvec::check(matvec::GEMV, &a, x.len(), &[y.len()])?;
        let m = a.extent(0);
        self.rows(m, |i| matvec::row(&a, &x, i, A::Elem::zero()), &mut y);
        Ok(())
    }

    fn matrix_vector_product_update<A, X, Y, Z>(
        &self,
        a: A,
        x: X,
        y: Y,
        mut z: Z,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        X: VectorView<Elem = A::Elem> + Sync,
        Y: VectorView<Elem = A::Elem> + Sync,
        Z: VectorViewMut<Elem = A::Elem>,
        A::Elem: Scalar,
    {
        if self.runs_inline(matvec::GEMV_UPDATE, matvec_work(&a)) {
            return Inline.matrix_vector_product_update(a, x, y, z);
        }
        matvec::check(matvec::GEMV_UPDATE, &a, x.len(), &[y.len(), z.len()])?;
        let m = a.extent(0);
        self.rows(m, |i| matvec::row(&a, &x, i, y.read(i)), &mut z);
        Ok(())
    }

    fn symmetric_matrix_vector_product<A, X, Y>(
        &self,
        a: A,
        triangle: Triangle,
        x: X,
        mut y: Y,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        X: VectorView<Elem = A::Elem> + Sync,
        Y: VectorViewMut<Elem = A::Elem>,
        A::Elem: Scalar,
    {
        if self.runs_inline(matvec::SYMV, matvec_work(&a)) {
            return Inline.symmetric_matrix_vector_product(a, triangle, x, y);
        }
        matvec::check_square(matvec::SYMV, &a, x.len(), y.len())?;
        let m = a.extent(0);
        self.rows(m, |i| matvec::triangle_row(&a, triangle, &x, i, rank_k::identity), &mut y);
        Ok(())
    }

    fn hermitian_matrix_vector_product<A, X, Y>(
        &self,
        a: A,
        triangle: Triangle,
        x: X,
        mut y: Y,
    ) -> Result<(), LinalgError>
    where
        A: MatrixView + Sync,
        X: VectorView<Elem = A::Elem> + Sync,
        Y: VectorViewMut<Elem = A::Elem>,
        A::Elem: Scalar + ConjIfNeeded,
    {
        if self.runs_inline(matvec::HEMV, matvec_work(&a)) {
            return Inline.hermitian_matrix_vector_product(a, triangle, x, y);
        }
        matvec::check_square(matvec::HEMV, &a, x.len(), y.len())?;
        let m = a.extent(0);
        self.rows(m, |i| matvec::triangle_row(&a, triangle, &x, i, rank_k::conjugate), &mut y);
        Ok(())
    }
}
