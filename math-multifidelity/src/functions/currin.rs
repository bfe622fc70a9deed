//! Currin exponential multi-fidelity problem

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Zip};
use std::sync::LazyLock;

/// Currin exponential function, high fidelity - 2D
/// Bounds: x_i in [0, 1]; at x2 = 0 the exponential factor tends to 1.
pub fn currin_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| {
            let factor = 1.0 - (-1.0 / (2.0 * x2)).exp();
            let numerator = 2300.0 * x1.powi(3) + 1900.0 * x1.powi(2) + 2092.0 * x1 + 60.0;
            let denominator = 100.0 * x1.powi(3) + 500.0 * x1.powi(2) + 4.0 * x1 + 20.0;
            factor * numerator / denominator
        })
}

/// Currin exponential function, low fidelity (Xiong et al. 2013)
///
/// Average of the high fidelity over the four corners of a small box
/// around `x`, with the lower `x2` edge clipped at zero.
pub fn currin_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    const H: f64 = 1.0 / 20.0;
    let corner = |dx1: f64, upper_x2: bool| {
        let mut shifted = x.to_owned();
        shifted.column_mut(0).mapv_inplace(|v| v + dx1);
        if upper_x2 {
            shifted.column_mut(1).mapv_inplace(|v| v + H);
        } else {
            shifted.column_mut(1).mapv_inplace(|v| (v - H).max(0.0));
        }
        currin_hf(shifted.view())
    };
    (corner(H, true) + corner(H, false) + corner(-H, true) + corner(-H, false)) / 4.0
}

static CURRIN: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "currin",
        vec![0.0, 0.0],
        vec![1.0, 1.0],
        vec![batch_fn(currin_hf), batch_fn(currin_lf)],
        Some(&["high", "low"]),
    )
    .expect("currin definition is consistent")
});

/// Currin problem with fidelities `high` and `low`.
pub fn currin() -> &'static MultiFidelityProblem {
    &CURRIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::test_helpers::{assert_fidelity_values, assert_finite_on_domain};

    #[test]
    fn test_currin_known_values() {
        assert_fidelity_values(currin(), &[0.5, 0.5], &[7.40512391329881, 7.442479583871107]);
        assert_fidelity_values(
            currin(),
            &[0.25, 0.0],
            &[13.708478513356562, 13.565729787268873],
        );
    }

    #[test]
    fn test_currin_finite_on_domain() {
        assert_finite_on_domain(currin());
    }
}
