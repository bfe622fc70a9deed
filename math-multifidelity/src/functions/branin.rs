//! Branin multi-fidelity problem with three fidelity levels

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Zip};
use std::f64::consts::PI;
use std::sync::LazyLock;

/// Branin function with an adjustable quadratic coefficient `b`.
pub(crate) fn branin_with_coefficient(x1: f64, x2: f64, b: f64) -> f64 {
    let c = 5.0 / PI;
    let t = 1.0 / (8.0 * PI);
    (x2 - b * x1.powi(2) + c * x1 - 6.0).powi(2) + 10.0 * (1.0 - t) * x1.cos() + 10.0
}

/// Quadratic coefficient of the standard Branin function.
pub(crate) const BRANIN_B: f64 = 5.1 / (4.0 * PI * PI);

/// Standard Branin function - 2D multimodal
/// Global minimum: f(x) = 0.397887 at x = (-π, 12.275), (π, 2.275), (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
pub fn branin_base(x: ArrayView2<'_, f64>) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| branin_with_coefficient(x1, x2, BRANIN_B))
}

/// Branin function, high fidelity: f_base(x) - 22.5 x2
pub fn branin_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    let base = branin_base(x);
    Zip::from(&base)
        .and(x.column(1))
        .map_collect(|&b, &x2| b - 22.5 * x2)
}

/// Branin function, medium fidelity
/// f_mf(x) = 10 sqrt(f_base(x - 2)) + 2 (x1 - 0.5) - 3 (3 x2 - 1) - 1
pub fn branin_mf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    let shifted = x.mapv(|v| v - 2.0);
    let base = branin_base(shifted.view());
    Zip::from(&base)
        .and(x.column(0))
        .and(x.column(1))
        .map_collect(|&b, &x1, &x2| {
            10.0 * b.sqrt() + 2.0 * (x1 - 0.5) - 3.0 * (3.0 * x2 - 1.0) - 1.0
        })
}

/// Branin function, low fidelity: f_mf(1.2 (x + 2)) - 3 x2 + 1
pub fn branin_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    let stretched = x.mapv(|v| 1.2 * (v + 2.0));
    let medium = branin_mf(stretched.view());
    Zip::from(&medium)
        .and(x.column(1))
        .map_collect(|&m, &x2| m - 3.0 * x2 + 1.0)
}

static BRANIN: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "branin",
        vec![-5.0, 0.0],
        vec![10.0, 15.0],
        vec![batch_fn(branin_hf), batch_fn(branin_mf), batch_fn(branin_lf)],
        Some(&["high", "medium", "low"]),
    )
    .expect("branin definition is consistent")
});

/// Branin problem with fidelities `high`, `medium` and `low`.
pub fn branin() -> &'static MultiFidelityProblem {
    &BRANIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::test_helpers::{assert_fidelity_values, assert_finite_on_domain};
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_branin_base_global_minima() {
        let minima = array![[-PI, 12.275], [PI, 2.275], [9.42478, 2.475]];
        for value in branin_base(minima.view()).iter() {
            assert_relative_eq!(*value, 0.397887, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_branin_known_values() {
        assert_fidelity_values(
            branin(),
            &[2.5, 7.5],
            &[-144.62003558637772, -18.49294525477319, -38.63298966019056],
        );
        assert_fidelity_values(
            branin(),
            &[-3.0, 12.0],
            &[-269.50208929021267, -32.76166854444131, -162.90458597434093],
        );
    }

    #[test]
    fn test_branin_fidelity_order() {
        assert_eq!(branin().fidelity_names(), vec!["high", "medium", "low"]);
        assert_eq!(branin().fidelity_at(1).expect("medium").name(), "medium");
    }

    #[test]
    fn test_branin_finite_on_domain() {
        assert_finite_on_domain(branin());
    }
}
