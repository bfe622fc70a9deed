//! Error types for multi-fidelity problems.
//!
//! Every failure is reported synchronously through [`MfError`]. The variants
//! fall into three families (shape, lookup and configuration) that can be
//! queried with the `is_*` helpers. Numeric domain problems (NaN or infinite
//! outputs outside the stated bounds) are not errors: they propagate as the
//! arithmetic produces them.

use thiserror::Error;

/// Errors that can occur while building or evaluating multi-fidelity problems.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MfError {
    /// The input points do not have the dimensionality the formula expects.
    #[error("dimension mismatch: expected {expected} columns, got {got}")]
    DimensionMismatch {
        /// Dimensionality of the formula
        expected: usize,
        /// Dimensionality of the supplied points
        got: usize,
    },

    /// A list of points contains rows of different lengths.
    #[error("ragged input: row {row} has {got} values, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// A formula returned a different number of values than it received points.
    #[error("output length mismatch: expected {expected} values, got {got}")]
    OutputLengthMismatch {
        /// Number of input points
        expected: usize,
        /// Number of values produced
        got: usize,
    },

    /// No fidelity is registered under the requested name.
    #[error("unknown fidelity '{name}' (available: {})", available.join(", "))]
    UnknownFidelity {
        /// Requested fidelity name
        name: String,
        /// Registered fidelity names, in order
        available: Vec<String>,
    },

    /// The requested fidelity position does not exist.
    #[error("fidelity index {index} out of range for {len} fidelities")]
    FidelityIndexOutOfRange {
        /// Requested position
        index: usize,
        /// Number of registered fidelities
        len: usize,
    },

    /// No problem in the catalog carries the requested name.
    #[error("unknown problem '{name}'")]
    UnknownProblem {
        /// Requested problem name
        name: String,
    },

    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds
        lower_len: usize,
        /// Length of the upper bounds
        upper_len: usize,
    },

    /// A lower bound is not strictly below its upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) >= upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// The number of fidelity names differs from the number of formulas.
    #[error("got {names} fidelity names for {functions} fidelity functions")]
    FidelityNamesMismatch {
        /// Number of names supplied
        names: usize,
        /// Number of formulas supplied
        functions: usize,
    },

    /// A problem was built without any fidelity.
    #[error("a multi-fidelity problem needs at least one fidelity")]
    NoFidelities,

    /// Two fidelities share the same name.
    #[error("duplicate fidelity name '{name}'")]
    DuplicateFidelity {
        /// The repeated name
        name: String,
    },

    /// A problem dimensionality of zero was requested.
    #[error("invalid dimensionality: {ndim}")]
    InvalidDimension {
        /// The requested dimensionality
        ndim: usize,
    },

    /// A tunable problem parameter lies outside its admissible range.
    #[error("invalid parameter {name} = {value} (must be in [{min}, {max}])")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Supplied value
        value: f64,
        /// Smallest admissible value
        min: f64,
        /// Largest admissible value
        max: f64,
    },
}

/// A specialized `Result` type for multi-fidelity operations.
pub type Result<T> = std::result::Result<T, MfError>;

impl MfError {
    /// Returns `true` if the input or output of an evaluation had the wrong shape.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            MfError::DimensionMismatch { .. }
                | MfError::RaggedRows { .. }
                | MfError::OutputLengthMismatch { .. }
        )
    }

    /// Returns `true` if a fidelity or problem lookup failed.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            MfError::UnknownFidelity { .. }
                | MfError::FidelityIndexOutOfRange { .. }
                | MfError::UnknownProblem { .. }
        )
    }

    /// Returns `true` if a problem could not be constructed.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MfError::BoundsMismatch { .. }
                | MfError::InvalidBounds { .. }
                | MfError::FidelityNamesMismatch { .. }
                | MfError::NoFidelities
                | MfError::DuplicateFidelity { .. }
                | MfError::InvalidDimension { .. }
                | MfError::InvalidParameter { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MfError::BoundsMismatch {
            lower_len: 2,
            upper_len: 3,
        };
        assert_eq!(
            err.to_string(),
            "bounds mismatch: lower has 2 elements, upper has 3"
        );

        let err = MfError::UnknownFidelity {
            name: "ultra".to_string(),
            available: vec!["high".to_string(), "low".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown fidelity 'ultra' (available: high, low)"
        );
    }

    #[test]
    fn test_is_shape_error() {
        let shape_err = MfError::DimensionMismatch {
            expected: 2,
            got: 3,
        };
        let lookup_err = MfError::FidelityIndexOutOfRange { index: 4, len: 2 };

        assert!(shape_err.is_shape_error());
        assert!(!lookup_err.is_shape_error());
    }

    #[test]
    fn test_is_lookup_error() {
        let lookup_err = MfError::UnknownProblem {
            name: "rosenbrock".to_string(),
        };
        let config_err = MfError::NoFidelities;

        assert!(lookup_err.is_lookup_error());
        assert!(!config_err.is_lookup_error());
    }

    #[test]
    fn test_is_config_error() {
        let config_err = MfError::InvalidBounds {
            index: 1,
            lower: 5.0,
            upper: 3.0,
        };
        let shape_err = MfError::OutputLengthMismatch {
            expected: 4,
            got: 1,
        };

        assert!(config_err.is_config_error());
        assert!(!shape_err.is_config_error());
        assert!(!config_err.is_shape_error());
    }
}
