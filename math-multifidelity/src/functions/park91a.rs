//! Park (1991) function A, multi-fidelity problem

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Zip};
use std::sync::LazyLock;

/// Park91a function, high fidelity - 4D
/// Bounds: x_i in [0, 1]
///
/// The first term `x1/2 (sqrt(1 + (x2 + x3^2) x4 / x1^2) - 1)` is evaluated as
/// `(sqrt(x1^2 + (x2 + x3^2) x4) - x1) / 2`, which is finite at x1 = 0.
pub fn park91a_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .and(x.column(2))
        .and(x.column(3))
        .map_collect(|&x1, &x2, &x3, &x4| {
            let term1 = ((x1.powi(2) + (x2 + x3.powi(2)) * x4).sqrt() - x1) / 2.0;
            let term2 = (x1 + 3.0 * x4) * (1.0 + x3.sin()).exp();
            term1 + term2
        })
}

/// Park91a function, low fidelity (Xiong et al. 2013)
/// f_lf(x) = (1 + sin(x1) / 10) f_hf(x) - 2 x1 + x2^2 + x3^2 + 0.5
pub fn park91a_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    let high = park91a_hf(x);
    Zip::from(&high)
        .and(x.column(0))
        .and(x.column(1))
        .and(x.column(2))
        .map_collect(|&yh, &x1, &x2, &x3| {
            (1.0 + x1.sin() / 10.0) * yh - 2.0 * x1 + x2.powi(2) + x3.powi(2) + 0.5
        })
}

static PARK91A: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "park91a",
        vec![0.0; 4],
        vec![1.0; 4],
        vec![batch_fn(park91a_hf), batch_fn(park91a_lf)],
        Some(&["high", "low"]),
    )
    .expect("park91a definition is consistent")
});

/// Park91a problem with fidelities `high` and `low`.
pub fn park91a() -> &'static MultiFidelityProblem {
    &PARK91A
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::test_helpers::{assert_fidelity_values, assert_finite_on_domain};

    #[test]
    fn test_park91a_known_values() {
        assert_fidelity_values(
            park91a(),
            &[0.5, 0.5, 0.5, 0.5],
            &[8.926130363363933, 9.354071849074643],
        );
        assert_fidelity_values(
            park91a(),
            &[1.0, 1.0, 1.0, 1.0],
            &[25.589254158606547, 28.24251564834077],
        );
    }

    #[test]
    fn test_park91a_at_zero_x1() {
        assert_fidelity_values(
            park91a(),
            &[0.0, 0.5, 0.5, 0.5],
            &[6.891820459730061, 7.891820459730061],
        );
        let near = park91a()
            .high_fidelity()
            .evaluate_point(&[1e-9, 0.5, 0.5, 0.5])
            .expect("eval");
        assert!((near - 6.891820459730061).abs() < 1e-8);
        let tiny = park91a()
            .high_fidelity()
            .evaluate_point(&[1e-300, 0.5, 0.5, 0.5])
            .expect("eval");
        assert!(tiny.is_finite());
    }

    #[test]
    fn test_park91a_lower_bound_is_zero() {
        assert_eq!(park91a().bounds(), vec![(0.0, 1.0); 4]);
    }

    #[test]
    fn test_park91a_finite_on_domain() {
        assert_finite_on_domain(park91a());
    }
}
