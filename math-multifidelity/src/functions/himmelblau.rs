//! Himmelblau multi-fidelity problem

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Zip};
use std::sync::LazyLock;

/// Himmelblau function, high fidelity - 2D multimodal
/// Global minima: f(x) = 0 at x = (3, 2), (-2.805118, 3.131312), (-3.779310, -3.283186), (3.584428, -1.848126)
/// Bounds: x_i in [-4, 4]
pub fn himmelblau_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| (x1.powi(2) + x2 - 11.0).powi(2) + (x2.powi(2) + x1 - 7.0).powi(2))
}

/// Himmelblau function, low fidelity (Dong et al. 2015)
/// f_lf(x) = f_hf(0.5 x1, 0.8 x2) + x2^3 - (x1 + 1)^2
pub fn himmelblau_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    let mut scaled = x.to_owned();
    scaled.column_mut(0).mapv_inplace(|v| 0.5 * v);
    scaled.column_mut(1).mapv_inplace(|v| 0.8 * v);
    let correction = Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| x2.powi(3) - (x1 + 1.0).powi(2));
    himmelblau_hf(scaled.view()) + correction
}

static HIMMELBLAU: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "himmelblau",
        vec![-4.0, -4.0],
        vec![4.0, 4.0],
        vec![batch_fn(himmelblau_hf), batch_fn(himmelblau_lf)],
        Some(&["high", "low"]),
    )
    .expect("himmelblau definition is consistent")
});

/// Himmelblau problem with fidelities `high` and `low`.
pub fn himmelblau() -> &'static MultiFidelityProblem {
    &HIMMELBLAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::test_helpers::{assert_fidelity_values, assert_finite_on_domain};

    #[test]
    fn test_himmelblau_known_values() {
        assert_fidelity_values(himmelblau(), &[3.0, 2.0], &[0.0, 51.766099999999994]);
        assert_fidelity_values(himmelblau(), &[-1.0, 2.5], &[59.3125, 104.4375]);
    }

    #[test]
    fn test_himmelblau_all_minima_are_zero() {
        let high = himmelblau().fidelity("high").expect("high fidelity");
        let minima = vec![
            vec![3.0, 2.0],
            vec![-2.805118, 3.131312],
            vec![-3.779310, -3.283186],
            vec![3.584428, -1.848126],
        ];
        let values = high.evaluate(&minima).expect("batch evaluation");
        for v in values.iter() {
            assert!(v.abs() < 1e-8, "expected a zero minimum, got {}", v);
        }
    }

    #[test]
    fn test_himmelblau_finite_on_domain() {
        assert_finite_on_domain(himmelblau());
    }
}
