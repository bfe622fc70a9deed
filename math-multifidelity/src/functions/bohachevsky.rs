//! Bohachevsky multi-fidelity problem

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Zip};
use std::f64::consts::PI;
use std::sync::LazyLock;

/// Bohachevsky function 1, high fidelity - 2D multimodal
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-5, 5]
pub fn bohachevsky_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| {
            x1.powi(2) + 2.0 * x2.powi(2)
                - 0.3 * (3.0 * PI * x1).cos()
                - 0.4 * (4.0 * PI * x2).cos()
                + 0.7
        })
}

/// Bohachevsky function, low fidelity (Dong et al. 2015)
/// f_lf(x) = f_hf(0.7 x1, x2) + x1 x2 - 12
pub fn bohachevsky_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    let mut scaled = x.to_owned();
    scaled.column_mut(0).mapv_inplace(|v| 0.7 * v);
    let correction = Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| x1 * x2 - 12.0);
    bohachevsky_hf(scaled.view()) + correction
}

static BOHACHEVSKY: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "bohachevsky",
        vec![-5.0, -5.0],
        vec![5.0, 5.0],
        vec![batch_fn(bohachevsky_hf), batch_fn(bohachevsky_lf)],
        Some(&["high", "low"]),
    )
    .expect("bohachevsky definition is consistent")
});

/// Bohachevsky problem with fidelities `high` and `low`.
pub fn bohachevsky() -> &'static MultiFidelityProblem {
    &BOHACHEVSKY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::test_helpers::{assert_fidelity_values, assert_finite_on_domain};

    #[test]
    fn test_bohachevsky_known_values() {
        assert_fidelity_values(bohachevsky(), &[0.0, 0.0], &[0.0, -12.0]);
        assert_fidelity_values(bohachevsky(), &[1.5, -2.0], &[10.55, -5.330198042743492]);
    }

    #[test]
    fn test_bohachevsky_finite_on_domain() {
        assert_finite_on_domain(bohachevsky());
    }
}
