//! Booth multi-fidelity problem

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Zip};
use std::sync::LazyLock;

/// Booth function, high fidelity - 2D unimodal
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub fn booth_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| (x1 + 2.0 * x2 - 7.0).powi(2) + (2.0 * x1 + x2 - 5.0).powi(2))
}

/// Booth function, low fidelity (Dong et al. 2015)
/// f_lf(x) = f_hf(0.4 x1, x2) + 1.7 x1 x2 - x1 + 2 x2
pub fn booth_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    let mut scaled = x.to_owned();
    scaled.column_mut(0).mapv_inplace(|v| 0.4 * v);
    let correction = Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| 1.7 * x1 * x2 - x1 + 2.0 * x2);
    booth_hf(scaled.view()) + correction
}

static BOOTH: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "booth",
        vec![-10.0, -10.0],
        vec![10.0, 10.0],
        vec![batch_fn(booth_hf), batch_fn(booth_lf)],
        Some(&["high", "low"]),
    )
    .expect("booth definition is consistent")
});

/// Booth problem with fidelities `high` and `low`.
pub fn booth() -> &'static MultiFidelityProblem {
    &BOOTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::test_helpers::{assert_fidelity_values, assert_finite_on_domain};

    #[test]
    fn test_booth_known_values() {
        assert_fidelity_values(booth(), &[1.0, 3.0], &[0.0, 11.9]);
        assert_fidelity_values(booth(), &[-2.5, 4.0], &[38.25, 2.5]);
    }

    #[test]
    fn test_booth_batch_matches_points() {
        let high = booth().fidelity("high").expect("high fidelity");
        let batch = high
            .evaluate(&vec![vec![1.0, 3.0], vec![-2.5, 4.0]])
            .expect("batch evaluation");
        assert_eq!(batch.to_vec(), vec![0.0, 38.25]);
    }

    #[test]
    fn test_booth_finite_on_domain() {
        assert_finite_on_domain(booth());
    }
}
