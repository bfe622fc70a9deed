//! Design-of-experiments helpers for drawing points in the unit hypercube.

use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

/// Latin hypercube sample of `n` points in `[0, 1)^ndim`.
///
/// Each dimension is split into `n` equal strata holding exactly one
/// point; strata are shuffled independently per dimension.
pub fn latin_hypercube<R: Rng + ?Sized>(n: usize, ndim: usize, rng: &mut R) -> Array2<f64> {
    let mut samples = Array2::<f64>::zeros((n, ndim));
    for j in 0..ndim {
        let mut vals: Vec<f64> = (0..n)
            .map(|k| (k as f64 + rng.random::<f64>()) / n as f64)
            .collect();
        vals.shuffle(rng);
        for (i, v) in vals.into_iter().enumerate() {
            samples[(i, j)] = v;
        }
    }
    samples
}

/// `n` independent uniform points in `[0, 1)^ndim`.
pub fn uniform<R: Rng + ?Sized>(n: usize, ndim: usize, rng: &mut R) -> Array2<f64> {
    Array2::from_shape_fn((n, ndim), |_| rng.random::<f64>())
}
