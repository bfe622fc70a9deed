//! Borehole multi-fidelity problem
//!
//! Water flow rate through a borehole drilled between two aquifers. The eight
//! inputs are, in order: borehole radius `rw`, radius of influence `r`,
//! transmissivity of the upper aquifer `Tu`, potentiometric head of the upper
//! aquifer `Hu`, transmissivity of the lower aquifer `Tl`, potentiometric head
//! of the lower aquifer `Hl`, borehole length `L` and hydraulic conductivity
//! `Kw`. The low fidelity is the approximation of Xiong et al. (2013).

use crate::batch::batch_fn;
use crate::problem::MultiFidelityProblem;
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use std::f64::consts::PI;
use std::sync::LazyLock;

/// Shared shape of both fidelities: `numerator * Tu (Hu - Hl) / (ln(r/rw) (offset + ...))`.
fn flow_rate(row: ArrayView1<'_, f64>, numerator: f64, offset: f64) -> f64 {
    let (rw, r, tu, hu) = (row[0], row[1], row[2], row[3]);
    let (tl, hl, l, kw) = (row[4], row[5], row[6], row[7]);
    let log_ratio = (r / rw).ln();
    let leakage = 2.0 * l * tu / (log_ratio * rw.powi(2) * kw);
    numerator * tu * (hu - hl) / (log_ratio * (offset + leakage + tu / tl))
}

/// Borehole function, high fidelity - 8D
pub fn borehole_hf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    x.map_axis(Axis(1), |row| flow_rate(row, 2.0 * PI, 1.0))
}

/// Borehole function, low fidelity
pub fn borehole_lf(x: ArrayView2<'_, f64>) -> Array1<f64> {
    x.map_axis(Axis(1), |row| flow_rate(row, 5.0, 1.5))
}

static BOREHOLE: LazyLock<MultiFidelityProblem> = LazyLock::new(|| {
    MultiFidelityProblem::new(
        "borehole",
        vec![0.05, 100.0, 63070.0, 990.0, 63.1, 700.0, 1120.0, 9855.0],
        vec![0.15, 50000.0, 115600.0, 1110.0, 116.0, 820.0, 1680.0, 12045.0],
        vec![batch_fn(borehole_hf), batch_fn(borehole_lf)],
        Some(&["high", "low"]),
    )
    .expect("borehole definition is consistent")
});

/// Borehole problem with fidelities `high` and `low`.
pub fn borehole() -> &'static MultiFidelityProblem {
    &BOREHOLE
}
