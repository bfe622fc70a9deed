//! Park (1991) function B, multi-fidelity problem

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Zip};
use std::sync::LazyLock;

/// Park91b function, high fidelity - 4D
/// f(x) = 2/3 exp(x1 + x2) - x4 sin(x3) + x3
pub fn park91b_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .and(x.column(2))
        .and(x.column(3))
        .map_collect(|&x1, &x2, &x3, &x4| 2.0 / 3.0 * (x1 + x2).exp() - x4 * x3.sin() + x3)
}

/// Park91b function, low fidelity (Xiong et al. 2013): a linear map of the high fidelity
pub fn park91b_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    park91b_hf(x).mapv_into(|yh| 1.2 * yh - 1.0)
}

static PARK91B: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "park91b",
        vec![0.0; 4],
        vec![1.0; 4],
        vec![batch_fn(park91b_hf), batch_fn(park91b_lf)],
        Some(&["high", "low"]),
    )
    .expect("park91b definition is consistent")
});

/// Park91b problem with fidelities `high` and `low`.
pub fn park91b() -> &'static MultiFidelityProblem {
    &PARK91B
}
