use faer::Mat;
use mdlinalg::matrix::{conjugated, scaled};
use mdlinalg::proxy::{ConjugatedScalar, ScaledScalar};
use mdlinalg::{ExecutionPolicy, Sequential, Triangle, hermitian_matrix_rank_k_update, symmetric_matrix_rank_k_update};
use num_complex::Complex;
use rand::Rng;

fn main() -> Result<(), mdlinalg::LinalgError> {
    let (n, k) = (6, 3);
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * k).map(|_| rng.r#gen()).collect();
    let a = Mat::from_fn(n, k, |i, j| data[j * n + i]);

    // lower triangle of A Aᵀ, then of (2A)(2A)ᵀ through a scaled view
    let mut c = Mat::<f64>::zeros(n, n);
    symmetric_matrix_rank_k_update(&a, &mut c, Triangle::Lower)?;
    let mut c4 = Mat::<f64>::zeros(n, n);
    symmetric_matrix_rank_k_update(scaled(2.0, &a), &mut c4, Triangle::Lower)?;
    println!("C(1,0) = {:.6}, scaled-view C(1,0) / 4 = {:.6}", c[(1, 0)], c4[(1, 0)] / 4.0);

    // Hermitian update of a conjugated complex view
    let z = Mat::from_fn(n, k, |i, j| Complex::new(data[j * n + i], (i + j) as f64));
    let mut h = Mat::from_fn(n, n, |_, _| Complex::new(0.0, 0.0));
    hermitian_matrix_rank_k_update(conjugated(&z), &mut h, Triangle::Upper)?;
    println!("H(0,1) = {}", h[(0, 1)]);

    // proxies behave like values
    let v = Complex::new(2.0, -3.0);
    let p = ConjugatedScalar::new(&v);
    let s = ScaledScalar::new(3.0, &v);
    println!("conj proxy + v = {}, 3v - conj proxy = {}", p + v, s - p);

    let mut y = vec![0.0; n];
    let x = vec![1.0; k];
    Sequential.matrix_vector_product(&a, &x, &mut y)?;
    println!("row sums of A = {:?}", y);

    #[cfg(feature = "rayon")]
    {
        let exec = mdlinalg::Parallel::new()?;
        let mut cp = Mat::<f64>::zeros(n, n);
        exec.symmetric_matrix_rank_k_update(None::<f64>, &a, &mut cp, Triangle::Lower)?;
        println!("{} threads, matches sequential: {}", exec.num_threads(), cp == c);
    }
    Ok(())
}
