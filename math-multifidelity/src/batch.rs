//! Batched evaluation of fidelity formulas.
//!
//! Formulas are written once, against an `N x D` table of points, and return
//! one value per row. [`Fidelity`] wraps such a formula and accepts a single
//! point, a list of points or an already-built table interchangeably: all of
//! them are normalized to a table before the formula runs.

use crate::error::{MfError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, CowArray, Ix2};
use std::fmt;
use std::sync::Arc;

/// A batched formula: `N x D` points in, `N` values out, in row order.
pub type BatchFn = Arc<dyn Fn(ArrayView2<'_, f64>) -> Array1<f64> + Send + Sync>;

/// Wraps a batched formula (function or closure) into a shareable [`BatchFn`].
pub fn batch_fn<F>(f: F) -> BatchFn
where
    F: Fn(ArrayView2<'_, f64>) -> Array1<f64> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The accepted input representations.
#[derive(Debug, Clone, Copy)]
pub enum Samples<'a> {
    /// A single point of length `D`, evaluated as a `1 x D` batch.
    Point(ArrayView1<'a, f64>),
    /// A list of points, each of length `D`.
    Rows(&'a [Vec<f64>]),
    /// An `N x D` table, one point per row.
    Table(ArrayView2<'a, f64>),
}

impl<'a> Samples<'a> {
    /// Number of points described by this input.
    pub fn len(&self) -> usize {
        match self {
            Samples::Point(_) => 1,
            Samples::Rows(rows) => rows.len(),
            Samples::Table(table) => table.nrows(),
        }
    }

    /// Returns `true` if there is no point to evaluate.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalizes the input to an `N x D` table.
    ///
    /// Points and tables are borrowed; only a list of rows is copied. An
    /// empty list of rows becomes a `0 x ndim` table.
    pub fn into_table(self, ndim: usize) -> Result<CowArray<'a, f64, Ix2>> {
        match self {
            Samples::Point(point) => Ok(CowArray::from(point.insert_axis(Axis(0)))),
            Samples::Table(table) => Ok(CowArray::from(table)),
            Samples::Rows(rows) => {
                let ncols = rows.first().map_or(ndim, Vec::len);
                let mut table = Array2::zeros((rows.len(), ncols));
                for (i, row) in rows.iter().enumerate() {
                    if row.len() != ncols {
                        return Err(MfError::RaggedRows {
                            row: i,
                            expected: ncols,
                            got: row.len(),
                        });
                    }
                    table.row_mut(i).assign(&ArrayView1::from(row.as_slice()));
                }
                Ok(CowArray::from(table))
            }
        }
    }
}

impl<'a> From<&'a [f64]> for Samples<'a> {
    fn from(point: &'a [f64]) -> Self {
        Samples::Point(ArrayView1::from(point))
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Samples<'a> {
    fn from(point: &'a [f64; N]) -> Self {
        Samples::Point(ArrayView1::from(&point[..]))
    }
}

impl<'a> From<&'a Vec<f64>> for Samples<'a> {
    fn from(point: &'a Vec<f64>) -> Self {
        Samples::Point(ArrayView1::from(point.as_slice()))
    }
}

impl<'a> From<ArrayView1<'a, f64>> for Samples<'a> {
    fn from(point: ArrayView1<'a, f64>) -> Self {
        Samples::Point(point)
    }
}

impl<'a> From<&'a Array1<f64>> for Samples<'a> {
    fn from(point: &'a Array1<f64>) -> Self {
        Samples::Point(point.view())
    }
}

impl<'a> From<&'a [Vec<f64>]> for Samples<'a> {
    fn from(rows: &'a [Vec<f64>]) -> Self {
        Samples::Rows(rows)
    }
}

impl<'a> From<&'a Vec<Vec<f64>>> for Samples<'a> {
    fn from(rows: &'a Vec<Vec<f64>>) -> Self {
        Samples::Rows(rows.as_slice())
    }
}

impl<'a> From<ArrayView2<'a, f64>> for Samples<'a> {
    fn from(table: ArrayView2<'a, f64>) -> Self {
        Samples::Table(table)
    }
}

impl<'a> From<&'a Array2<f64>> for Samples<'a> {
    fn from(table: &'a Array2<f64>) -> Self {
        Samples::Table(table.view())
    }
}

/// One fidelity level of a problem: a named batched formula of fixed arity.
#[derive(Clone)]
pub struct Fidelity {
    name: String,
    ndim: usize,
    func: BatchFn,
}

impl fmt::Debug for Fidelity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fidelity")
            .field("name", &self.name)
            .field("ndim", &self.ndim)
            .finish_non_exhaustive()
    }
}

impl Fidelity {
    /// Creates a fidelity expecting points of dimensionality `ndim`.
    pub fn new(name: impl Into<String>, ndim: usize, func: BatchFn) -> Self {
        Self {
            name: name.into(),
            ndim,
            func,
        }
    }

    /// Name under which the fidelity is registered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input dimensionality.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Evaluates the formula on any supported input representation.
    ///
    /// Returns one value per point, in input order.
    ///
    /// ```
    /// use math_audio_multifidelity::booth;
    ///
    /// let high = booth().fidelity("high").unwrap();
    /// let one = high.evaluate(&[1.0, 3.0]).unwrap();
    /// let many = high.evaluate(&vec![vec![1.0, 3.0], vec![0.0, 0.0]]).unwrap();
    /// assert_eq!(one[0], 0.0);
    /// assert_eq!(many.len(), 2);
    /// ```
    pub fn evaluate<'a>(&self, samples: impl Into<Samples<'a>>) -> Result<Array1<f64>> {
        let samples: Samples<'a> = samples.into();
        let table = samples.into_table(self.ndim)?;
        self.evaluate_batch(table.view())
    }

    /// Evaluates a single point and returns its scalar value.
    pub fn evaluate_point(&self, point: &[f64]) -> Result<f64> {
        let values = self.evaluate(point)?;
        values.get(0).copied().ok_or(MfError::OutputLengthMismatch {
            expected: 1,
            got: 0,
        })
    }

    /// Evaluates an `N x D` table of points.
    pub fn evaluate_batch(&self, table: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        if table.ncols() != self.ndim {
            return Err(MfError::DimensionMismatch {
                expected: self.ndim,
                got: table.ncols(),
            });
        }
        let n = table.nrows();
        let values = (self.func)(table);
        if values.len() != n {
            return Err(MfError::OutputLengthMismatch {
                expected: n,
                got: values.len(),
            });
        }
        log::trace!("evaluated fidelity '{}' on {} points", self.name, n);
        Ok(values)
    }
}
