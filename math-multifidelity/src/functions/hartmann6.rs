//! Hartmann 6D multi-fidelity problem

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use std::sync::LazyLock;

const A: [[f64; 6]; 4] = [
    [10.0, 3.0, 17.0, 3.5, 1.7, 8.0],
    [0.05, 10.0, 17.0, 0.1, 8.0, 14.0],
    [3.0, 3.5, 1.7, 10.0, 17.0, 8.0],
    [17.0, 8.0, 0.05, 10.0, 0.1, 14.0],
];

const P: [[f64; 6]; 4] = [
    [0.1312, 0.1696, 0.5569, 0.0124, 0.8283, 0.5886],
    [0.2329, 0.4135, 0.8307, 0.3736, 0.1004, 0.9991],
    [0.2348, 0.1451, 0.3522, 0.2883, 0.3047, 0.6650],
    [0.4047, 0.8828, 0.8732, 0.5743, 0.1091, 0.0381],
];

const ALPHA_HIGH: [f64; 4] = [1.0, 1.2, 3.0, 3.2];
const ALPHA_LOW: [f64; 4] = [0.5, 0.5, 2.0, 4.0];

/// Rescaled Hartmann sum `-(2.58 + sum_i alpha_i exp(-sum_j A_ij (x_j - P_ij)^2)) / 1.94`.
fn hartmann6_sum(row: ArrayView1<'_, f64>, alpha: &[f64; 4]) -> f64 {
    let sum: f64 = alpha
        .iter()
        .zip(A.iter().zip(P.iter()))
        .map(|(&ai, (a_row, p_row))| {
            let exponent: f64 = a_row
                .iter()
                .zip(p_row)
                .zip(row.iter())
                .map(|((&aij, &pij), &xj)| aij * (xj - pij).powi(2))
                .sum();
            ai * (-exponent).exp()
        })
        .sum();
    -(2.58 + sum) / 1.94
}

/// Hartmann 6-D function, high fidelity (rescaled)
/// Global minimum: f(x) = -3.04246 at x = (0.20169, 0.150011, 0.476874, 0.275332, 0.311652, 0.6573)
/// Bounds: x_i in [0.1, 1]
pub fn hartmann6_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    x.map_axis(Axis(1), |row| hartmann6_sum(row, &ALPHA_HIGH))
}

/// Hartmann 6-D function, low fidelity: same kernel with perturbed weights alpha
pub fn hartmann6_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    x.map_axis(Axis(1), |row| hartmann6_sum(row, &ALPHA_LOW))
}

static HARTMANN6: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "hartmann6",
        vec![0.1; 6],
        vec![1.0; 6],
        vec![batch_fn(hartmann6_hf), batch_fn(hartmann6_lf)],
        Some(&["high", "low"]),
    )
    .expect("hartmann6 definition is consistent")
});

/// Hartmann 6-D problem with fidelities `high` and `low`.
pub fn hartmann6() -> &'static MultiFidelityProblem {
    &HARTMANN6
}
