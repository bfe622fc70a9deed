//! Six-hump camel-back multi-fidelity problem

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Zip};
use std::sync::LazyLock;

/// Six-hump camel-back function, high fidelity - 2D multimodal
/// Global minimum: f(x) = -1.0316 at x = (0.0898, -0.7126) and (-0.0898, 0.7126)
/// Bounds: x_i in [-2, 2]
pub fn six_hump_camelback_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| {
            4.0 * x1.powi(2) - 2.1 * x1.powi(4) + x1.powi(6) / 3.0 + x1 * x2 - 4.0 * x2.powi(2)
                + 4.0 * x2.powi(4)
        })
}

/// Six-hump camel-back function, low fidelity (Dong et al. 2015)
/// f_lf(x) = f_hf(0.7 x1, 0.7 x2) + x1 x2 - 15
pub fn six_hump_camelback_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    let scaled = x.mapv(|v| 0.7 * v);
    let correction = Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| x1 * x2 - 15.0);
    six_hump_camelback_hf(scaled.view()) + correction
}

static SIX_HUMP_CAMELBACK: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "six_hump_camelback",
        vec![-2.0, -2.0],
        vec![2.0, 2.0],
        vec![
            batch_fn(six_hump_camelback_hf),
            batch_fn(six_hump_camelback_lf),
        ],
        Some(&["high", "low"]),
    )
    .expect("six-hump camel-back definition is consistent")
});

/// Six-hump camel-back problem with fidelities `high` and `low`.
pub fn six_hump_camelback() -> &'static MultiFidelityProblem {
    &SIX_HUMP_CAMELBACK
}
