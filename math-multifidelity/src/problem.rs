//! Multi-fidelity problem container.

use crate::batch::{BatchFn, Fidelity};
use crate::error::{MfError, Result};
use crate::scaling::{ValueRange, rescale};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::collections::HashMap;

/// Key used to look up a fidelity, either by name or by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FidelityKey<'a> {
    /// Registered fidelity name, e.g. `"high"`
    Name(&'a str),
    /// Position in registration order, `0` being the highest fidelity
    Index(usize),
}

impl<'a> From<&'a str> for FidelityKey<'a> {
    fn from(name: &'a str) -> Self {
        FidelityKey::Name(name)
    }
}

impl<'a> From<&'a String> for FidelityKey<'a> {
    fn from(name: &'a String) -> Self {
        FidelityKey::Name(name.as_str())
    }
}

impl From<usize> for FidelityKey<'_> {
    fn from(index: usize) -> Self {
        FidelityKey::Index(index)
    }
}

/// A named group of fidelity formulas sharing one input domain.
///
/// Fidelities are kept in registration order, conventionally from the
/// highest to the lowest fidelity. The container is immutable once built and
/// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct MultiFidelityProblem {
    name: String,
    lower_bound: Array1<f64>,
    upper_bound: Array1<f64>,
    fidelities: Vec<Fidelity>,
    by_name: HashMap<String, usize>,
}

impl MultiFidelityProblem {
    /// Creates a problem from its bounds and formulas.
    ///
    /// When `names` is `None`, fidelities are named after their position
    /// (`"0"`, `"1"`, ...). Every formula must accept points with as many
    /// coordinates as there are bounds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bounds differ in length or are
    /// not strictly ordered, if no formula is given, or if the names do not
    /// match the formulas one to one.
    pub fn new(
        name: impl Into<String>,
        lower_bound: Vec<f64>,
        upper_bound: Vec<f64>,
        functions: Vec<BatchFn>,
        names: Option<&[&str]>,
    ) -> Result<Self> {
        let name = name.into();
        if lower_bound.len() != upper_bound.len() {
            return Err(MfError::BoundsMismatch {
                lower_len: lower_bound.len(),
                upper_len: upper_bound.len(),
            });
        }
        if lower_bound.is_empty() {
            return Err(MfError::InvalidDimension { ndim: 0 });
        }
        for (index, (&lower, &upper)) in lower_bound.iter().zip(&upper_bound).enumerate() {
            // also rejects NaN bounds
            if !(lower < upper) {
                return Err(MfError::InvalidBounds {
                    index,
                    lower,
                    upper,
                });
            }
        }
        if functions.is_empty() {
            return Err(MfError::NoFidelities);
        }

        let names: Vec<String> = match names {
            Some(names) if names.len() != functions.len() => {
                return Err(MfError::FidelityNamesMismatch {
                    names: names.len(),
                    functions: functions.len(),
                });
            }
            Some(names) => names.iter().map(|n| n.to_string()).collect(),
            None => (0..functions.len()).map(|i| i.to_string()).collect(),
        };

        let ndim = lower_bound.len();
        let mut by_name = HashMap::with_capacity(names.len());
        let mut fidelities = Vec::with_capacity(names.len());
        for (index, (fid_name, func)) in names.into_iter().zip(functions).enumerate() {
            if by_name.insert(fid_name.clone(), index).is_some() {
                return Err(MfError::DuplicateFidelity { name: fid_name });
            }
            fidelities.push(Fidelity::new(fid_name, ndim, func));
        }

        log::debug!(
            "built problem '{}' ({}D) with fidelities [{}]",
            name,
            ndim,
            fidelities
                .iter()
                .map(Fidelity::name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            name,
            lower_bound: Array1::from_vec(lower_bound),
            upper_bound: Array1::from_vec(upper_bound),
            fidelities,
            by_name,
        })
    }

    /// Problem identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input dimensionality shared by all fidelities.
    pub fn ndim(&self) -> usize {
        self.lower_bound.len()
    }

    /// Per-dimension lower bounds of the domain.
    pub fn lower_bound(&self) -> ArrayView1<'_, f64> {
        self.lower_bound.view()
    }

    /// Per-dimension upper bounds of the domain.
    pub fn upper_bound(&self) -> ArrayView1<'_, f64> {
        self.upper_bound.view()
    }

    /// Domain as `(lower, upper)` pairs, one per dimension.
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        self.lower_bound
            .iter()
            .zip(self.upper_bound.iter())
            .map(|(&l, &u)| (l, u))
            .collect()
    }

    /// Number of fidelities.
    pub fn len(&self) -> usize {
        self.fidelities.len()
    }

    /// Always `false`: a problem holds at least one fidelity.
    pub fn is_empty(&self) -> bool {
        self.fidelities.is_empty()
    }

    /// Fidelity names in registration order.
    pub fn fidelity_names(&self) -> Vec<&str> {
        self.fidelities.iter().map(Fidelity::name).collect()
    }

    /// Iterates over the fidelities in registration order.
    pub fn fidelities(&self) -> impl Iterator<Item = &Fidelity> {
        self.fidelities.iter()
    }

    /// Looks up a fidelity by name.
    pub fn fidelity(&self, name: &str) -> Result<&Fidelity> {
        self.by_name
            .get(name)
            .map(|&index| &self.fidelities[index])
            .ok_or_else(|| MfError::UnknownFidelity {
                name: name.to_string(),
                available: self
                    .fidelities
                    .iter()
                    .map(|f| f.name().to_string())
                    .collect(),
            })
    }

    /// Looks up a fidelity by position, `0` being the highest fidelity.
    pub fn fidelity_at(&self, index: usize) -> Result<&Fidelity> {
        self.fidelities
            .get(index)
            .ok_or(MfError::FidelityIndexOutOfRange {
                index,
                len: self.fidelities.len(),
            })
    }

    /// Looks up a fidelity by name or by position.
    ///
    /// ```
    /// use math_audio_multifidelity::booth;
    ///
    /// let problem = booth();
    /// let by_name = problem.get("low").unwrap();
    /// let by_index = problem.get(1usize).unwrap();
    /// assert_eq!(by_name.name(), by_index.name());
    /// ```
    pub fn get<'k>(&self, key: impl Into<FidelityKey<'k>>) -> Result<&Fidelity> {
        match key.into() {
            FidelityKey::Name(name) => self.fidelity(name),
            FidelityKey::Index(index) => self.fidelity_at(index),
        }
    }

    /// The first registered fidelity.
    pub fn high_fidelity(&self) -> &Fidelity {
        &self.fidelities[0]
    }

    /// Maps points from the unit hypercube into the problem domain.
    pub fn rescale_from_unit(&self, points: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        let domain = ValueRange::new(self.lower_bound.to_vec(), self.upper_bound.to_vec())?;
        rescale(points, &ValueRange::unit(), &domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::batch_fn;
    use ndarray::{Array1, Axis, array};

    fn sum(x: ArrayView2<'_, f64>) -> Array1<f64> {
        x.sum_axis(Axis(1))
    }

    fn twice_sum(x: ArrayView2<'_, f64>) -> Array1<f64> {
        2.0 * x.sum_axis(Axis(1))
    }

    fn two_level(names: Option<&[&str]>) -> Result<MultiFidelityProblem> {
        MultiFidelityProblem::new(
            "sum",
            vec![-1.0, -1.0],
            vec![1.0, 1.0],
            vec![batch_fn(sum), batch_fn(twice_sum)],
            names,
        )
    }

    #[test]
    fn test_lookup_by_name_and_index() {
        let problem = two_level(Some(&["high", "low"])).expect("valid problem");
        assert_eq!(problem.name(), "sum");
        assert_eq!(problem.ndim(), 2);
        assert_eq!(problem.len(), 2);
        assert_eq!(problem.fidelity_names(), vec!["high", "low"]);

        let low = problem.fidelity("low").expect("low exists");
        let also_low = problem.fidelity_at(1).expect("index 1 exists");
        assert_eq!(low.name(), also_low.name());
        assert_eq!(
            low.evaluate(&[1.0, 0.5]).expect("eval"),
            also_low.evaluate(&[1.0, 0.5]).expect("eval")
        );
        assert_eq!(problem.high_fidelity().name(), "high");
        assert_eq!(problem.get(0usize).expect("index 0").name(), "high");
    }

    #[test]
    fn test_default_names_are_positions() {
        let problem = two_level(None).expect("valid problem");
        assert_eq!(problem.fidelity_names(), vec!["0", "1"]);
        let y = problem.get("1").expect("positional name").evaluate(&[1.0, 2.0]);
        assert_eq!(y.expect("eval"), array![6.0]);
    }

    #[test]
    fn test_unknown_name() {
        let problem = two_level(Some(&["high", "low"])).expect("valid problem");
        let err = problem.fidelity("ultra").unwrap_err();
        assert!(err.is_lookup_error());
        assert_eq!(
            err,
            MfError::UnknownFidelity {
                name: "ultra".to_string(),
                available: vec!["high".to_string(), "low".to_string()],
            }
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let problem = two_level(Some(&["high", "low"])).expect("valid problem");
        assert_eq!(
            problem.get(2usize).unwrap_err(),
            MfError::FidelityIndexOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_bounds_length_mismatch() {
        let err = MultiFidelityProblem::new(
            "bad",
            vec![0.0, 0.0],
            vec![1.0, 1.0, 1.0],
            vec![batch_fn(sum)],
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            MfError::BoundsMismatch {
                lower_len: 2,
                upper_len: 3
            }
        );
        assert!(err.is_config_error());
    }

    #[test]
    fn test_names_count_mismatch() {
        let err = two_level(Some(&["high"])).unwrap_err();
        assert_eq!(
            err,
            MfError::FidelityNamesMismatch {
                names: 1,
                functions: 2
            }
        );
    }

    #[test]
    fn test_other_configuration_errors() {
        let inverted = MultiFidelityProblem::new(
            "inverted",
            vec![0.0, 2.0],
            vec![1.0, 1.0],
            vec![batch_fn(sum)],
            None,
        );
        assert_eq!(
            inverted.unwrap_err(),
            MfError::InvalidBounds {
                index: 1,
                lower: 2.0,
                upper: 1.0
            }
        );

        let empty = MultiFidelityProblem::new("empty", vec![0.0], vec![1.0], vec![], None);
        assert_eq!(empty.unwrap_err(), MfError::NoFidelities);

        let duplicate = two_level(Some(&["high", "high"]));
        assert_eq!(
            duplicate.unwrap_err(),
            MfError::DuplicateFidelity {
                name: "high".to_string()
            }
        );
    }

    #[test]
    fn test_bounds_accessors() {
        let problem = two_level(None).expect("valid problem");
        assert_eq!(problem.lower_bound(), array![-1.0, -1.0]);
        assert_eq!(problem.upper_bound(), array![1.0, 1.0]);
        assert_eq!(problem.bounds(), vec![(-1.0, 1.0), (-1.0, 1.0)]);
    }

    #[test]
    fn test_rescale_from_unit() {
        let problem = two_level(None).expect("valid problem");
        let unit = array![[0.0, 1.0], [0.5, 0.25]];
        let scaled = problem.rescale_from_unit(unit.view()).expect("rescale");
        assert_eq!(scaled, array![[-1.0, 1.0], [0.0, -0.5]]);
    }

    #[test]
    fn test_problem_is_shareable_across_threads() {
        let problem = two_level(Some(&["high", "low"])).expect("valid problem");
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let problem = &problem;
                    s.spawn(move || {
                        problem
                            .fidelity("low")
                            .and_then(|f| f.evaluate_point(&[i as f64 * 0.1, 0.0]))
                    })
                })
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                let y = handle.join().expect("thread").expect("eval");
                assert!((y - 0.2 * i as f64).abs() < 1e-12);
            }
        });
    }
}
