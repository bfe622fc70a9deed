//! Linear rescaling of sample points between hyper-rectangles.
//!
//! Harnesses usually draw points in the unit hypercube and map them into a
//! problem domain before evaluation; [`rescale`] does that column by column.

use crate::error::{MfError, Result};
use ndarray::{Array2, ArrayView2, Axis};

/// Per-dimension interval `[lower, upper]`.
///
/// A range holding a single interval applies to every dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRange {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl ValueRange {
    /// Creates a range from per-dimension bounds.
    ///
    /// # Errors
    ///
    /// Fails if the bounds differ in length, are empty, or if some lower
    /// bound is not strictly below its upper bound.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(MfError::BoundsMismatch {
                lower_len: lower.len(),
                upper_len: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(MfError::InvalidDimension { ndim: 0 });
        }
        if let Some((index, (&l, &u))) = lower
            .iter()
            .zip(&upper)
            .enumerate()
            .find(|(_, (l, u))| !(l < u))
        {
            return Err(MfError::InvalidBounds {
                index,
                lower: l,
                upper: u,
            });
        }
        Ok(Self { lower, upper })
    }

    /// The same interval for every dimension.
    pub fn uniform(lower: f64, upper: f64) -> Result<Self> {
        Self::new(vec![lower], vec![upper])
    }

    /// The unit interval `[0, 1]` for every dimension.
    pub fn unit() -> Self {
        Self {
            lower: vec![0.0],
            upper: vec![1.0],
        }
    }

    /// Lower bounds.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper bounds.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Expands the range to `ndim` explicit intervals.
    fn broadcast(&self, ndim: usize) -> Result<(Vec<f64>, Vec<f64>)> {
        match self.lower.len() {
            1 => Ok((vec![self.lower[0]; ndim], vec![self.upper[0]; ndim])),
            n if n == ndim => Ok((self.lower.clone(), self.upper.clone())),
            n => Err(MfError::DimensionMismatch {
                expected: ndim,
                got: n,
            }),
        }
    }
}

/// Maps `points` (one per row) linearly from `range_in` to `range_out`.
///
/// ```
/// use math_audio_multifidelity::{ValueRange, rescale};
/// use ndarray::array;
///
/// let out = ValueRange::new(vec![-5.0, 0.0], vec![10.0, 15.0]).unwrap();
/// let x = rescale(array![[0.0, 1.0]].view(), &ValueRange::unit(), &out).unwrap();
/// assert_eq!(x, array![[-5.0, 15.0]]);
/// ```
pub fn rescale(
    points: ArrayView2<'_, f64>,
    range_in: &ValueRange,
    range_out: &ValueRange,
) -> Result<Array2<f64>> {
    let ndim = points.ncols();
    let (in_lower, in_upper) = range_in.broadcast(ndim)?;
    let (out_lower, out_upper) = range_out.broadcast(ndim)?;

    let mut scaled = points.to_owned();
    for (j, mut column) in scaled.axis_iter_mut(Axis(1)).enumerate() {
        let scale = (out_upper[j] - out_lower[j]) / (in_upper[j] - in_lower[j]);
        column.mapv_inplace(|v| out_lower[j] + (v - in_lower[j]) * scale);
    }
    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_unit_to_domain() {
        let domain = ValueRange::new(vec![-10.0, 0.0], vec![10.0, 4.0]).expect("valid range");
        let unit = array![[0.0, 0.0], [1.0, 1.0], [0.5, 0.25]];
        let scaled = rescale(unit.view(), &ValueRange::unit(), &domain).expect("rescale");
        assert_eq!(scaled, array![[-10.0, 0.0], [10.0, 4.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_round_trip_back_to_unit() {
        let domain = ValueRange::new(vec![0.05, 100.0], vec![0.15, 50000.0]).expect("valid range");
        let unit = array![[0.1, 0.9], [0.3, 0.7]];
        let scaled = rescale(unit.view(), &ValueRange::unit(), &domain).expect("forward");
        let back = rescale(scaled.view(), &domain, &ValueRange::unit()).expect("backward");
        for (a, b) in unit.iter().zip(back.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_uniform_range_broadcasts() {
        let out = ValueRange::uniform(-2.0, 2.0).expect("valid range");
        let scaled = rescale(array![[0.0, 0.5, 1.0]].view(), &ValueRange::unit(), &out)
            .expect("rescale");
        assert_eq!(scaled, array![[-2.0, 0.0, 2.0]]);
    }

    #[test]
    fn test_range_dimension_mismatch() {
        let out = ValueRange::new(vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]).expect("valid range");
        let err = rescale(array![[0.5, 0.5]].view(), &ValueRange::unit(), &out).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(ValueRange::new(vec![0.0], vec![1.0, 2.0]).is_err());
        assert!(ValueRange::uniform(1.0, 1.0).is_err());
        assert!(ValueRange::uniform(f64::NAN, 1.0).is_err());
    }
}
