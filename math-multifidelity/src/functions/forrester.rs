//! Forrester multi-fidelity problem, generalized to any dimensionality
//!
//! In one dimension these are the functions of Forrester et al. (2007). For
//! `D > 1` both fidelities average their one-dimensional terms over the
//! coordinates, so every dimensionality shares the same range of values.

use crate::batch::batch_fn;
use crate::error::{MfError, Result};
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Axis};
use std::sync::LazyLock;

fn mean_over_coordinates(x: ArrayView2<'_, f64>, term: impl Fn(f64) -> f64) -> Array1<f64> {
    x.map_axis(Axis(1), |row| {
        row.iter().map(|&xi| term(xi)).sum::<f64>() / row.len() as f64
    })
}

/// Forrester function, high fidelity
/// f(x) = mean_i (6 x_i - 2)^2 sin(12 x_i - 4)
/// Global minimum (1D): f(x) = -6.02074 at x = 0.757249
pub fn forrester_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    mean_over_coordinates(x, |xi| (6.0 * xi - 2.0).powi(2) * (12.0 * xi - 4.0).sin())
}

/// Forrester function, low fidelity
/// f_lf(x) = 0.5 f_hf(x) + mean_i 10 (x_i - 0.5) - 5
pub fn forrester_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    let high = forrester_hf(x);
    let trend = mean_over_coordinates(x, |xi| 10.0 * (xi - 0.5));
    0.5 * high + trend - 5.0
}

/// Builds a Forrester problem over `[0, 1]^ndim`.
///
/// # Errors
///
/// Fails with [`MfError::InvalidDimension`] when `ndim` is zero.
pub fn forrester_nd(ndim: usize) -> Result<MultiFidelityProblem> {
    if ndim == 0 {
        return Err(MfError::InvalidDimension { ndim });
    }
    MultiFidelityProblem::new(
        "forrester",
        vec![0.0; ndim],
        vec![1.0; ndim],
        vec![batch_fn(forrester_hf), batch_fn(forrester_lf)],
        Some(&["high", "low"]),
    )
}

static FORRESTER: LazyLock<MultiFidelityProblem> =
    LazyLock::new(|| forrester_nd(1).expect("forrester definition is consistent"));

/// One-dimensional Forrester problem with fidelities `high` and `low`.
pub fn forrester() -> &'static MultiFidelityProblem {
    &FORRESTER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::test_helpers::{assert_fidelity_values, assert_finite_on_domain};

    #[test]
    fn test_forrester_known_values() {
        assert_fidelity_values(forrester(), &[0.5], &[0.9092974268256817, -4.5453512865871595]);
        assert_fidelity_values(
            forrester(),
            &[0.757249],
            &[-6.020740055735769, -5.437880027867886],
        );
    }

    #[test]
    fn test_forrester_two_dimensions() {
        let problem = forrester_nd(2).expect("2D forrester");
        assert_eq!(problem.ndim(), 2);
        assert_fidelity_values(
            &problem,
            &[0.25, 0.75],
            &[-3.1018222314232946, -6.5509111157116475],
        );
    }

    #[test]
    fn test_forrester_repeated_coordinate_matches_1d() {
        let one = forrester().high_fidelity().evaluate_point(&[0.3]).expect("1D");
        let problem = forrester_nd(6).expect("6D forrester");
        let six = problem.high_fidelity().evaluate_point(&[0.3; 6]).expect("6D");
        assert!((one - six).abs() < 1e-12);
    }

    #[test]
    fn test_forrester_dimension_is_enforced() {
        let err = forrester().high_fidelity().evaluate(&[0.1, 0.2]).unwrap_err();
        assert!(err.is_shape_error());
        assert!(forrester_nd(0).unwrap_err().is_config_error());
    }

    #[test]
    fn test_forrester_finite_on_domain() {
        assert_finite_on_domain(forrester());
        for ndim in [2, 4, 8] {
            assert_finite_on_domain(&forrester_nd(ndim).expect("valid dimension"));
        }
    }
}
