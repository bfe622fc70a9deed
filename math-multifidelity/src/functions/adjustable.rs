//! Problems with a tunable correlation between fidelities (Toal, 2015)
//!
//! A parameter in `[0, 1]` controls how closely the low fidelity follows the
//! high fidelity. Since each parameter value gives a different problem,
//! these are built on demand rather than exposed as shared instances.

use super::branin::{BRANIN_B, branin_base, branin_with_coefficient};
use crate::batch::batch_fn;
use crate::error::{MfError, Result};
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView2, Zip};

fn check_parameter(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MfError::InvalidParameter {
            name,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Adjustable Branin, low fidelity
///
/// The quadratic coefficient becomes `5.1 / (4π²) - 0.1 (1 - a1)`, so that
/// `a1 = 1` reproduces the standard Branin function.
pub fn adjustable_branin_lf(x: ArrayView2<'_, f64>, a1: f64) -> Array1<f64> {
    let b = BRANIN_B - 0.1 * (1.0 - a1);
    Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| branin_with_coefficient(x1, x2, b))
}

/// Adjustable Branin problem: standard Branin as `high`, tuned variant as `low`.
///
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
pub fn adjustable_branin(a1: f64) -> Result<MultiFidelityProblem> {
    check_parameter("a1", a1)?;
    MultiFidelityProblem::new(
        "adjustable_branin",
        vec![-5.0, 0.0],
        vec![10.0, 15.0],
        vec![
            batch_fn(branin_base),
            batch_fn(move |x| adjustable_branin_lf(x, a1)),
        ],
        Some(&["high", "low"]),
    )
}

/// Paciorek function, high fidelity: sin(1 / (x1 x2))
/// Bounds: x_i in [0.3, 1]
pub fn paciorek_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| (1.0 / (x1 * x2)).sin())
}

/// Adjustable Paciorek, low fidelity: f_hf(x) - 9 a2^2 cos(1 / (x1 x2))
pub fn adjustable_paciorek_lf(x: ArrayView2<'_, f64>, a2: f64) -> Array1<f64> {
    Zip::from(x.column(0))
        .and(x.column(1))
        .map_collect(|&x1, &x2| {
            let inv = 1.0 / (x1 * x2);
            inv.sin() - 9.0 * a2.powi(2) * inv.cos()
        })
}

/// Adjustable Paciorek problem; `a2 = 0` makes both fidelities identical.
pub fn adjustable_paciorek(a2: f64) -> Result<MultiFidelityProblem> {
    check_parameter("a2", a2)?;
    MultiFidelityProblem::new(
        "adjustable_paciorek",
        vec![0.3, 0.3],
        vec![1.0, 1.0],
        vec![
            batch_fn(paciorek_hf),
            batch_fn(move |x| adjustable_paciorek_lf(x, a2)),
        ],
        Some(&["high", "low"]),
    )
}
