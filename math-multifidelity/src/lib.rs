#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]

use std::collections::HashMap;

pub mod batch;
pub mod error;
pub mod functions;
pub mod problem;
pub mod sampling;
pub mod scaling;

pub use batch::{BatchFn, Fidelity, Samples, batch_fn};
pub use error::{MfError, Result};
pub use functions::*;
pub use problem::{FidelityKey, MultiFidelityProblem};
pub use scaling::{ValueRange, rescale};

/// Descriptive metadata for a catalog problem
#[derive(Debug, Clone)]
pub struct ProblemMetadata {
    /// Problem name, as used by [`get_problem`]
    pub name: String,
    /// Short description of the problem
    pub description: String,
    /// Input dimensionality
    pub ndim: usize,
    /// Whether the high fidelity is multimodal
    pub multimodal: bool,
    /// Literature source of the fidelity definitions
    pub reference: String,
    /// Known global minima of the high fidelity: locations and values
    pub high_fidelity_minima: Vec<(Vec<f64>, f64)>,
}

/// Names of all shared catalog problems, sorted alphabetically
pub const PROBLEM_NAMES: [&str; 11] = [
    "bohachevsky",
    "booth",
    "borehole",
    "branin",
    "currin",
    "forrester",
    "hartmann6",
    "himmelblau",
    "park91a",
    "park91b",
    "six_hump_camelback",
];

/// Names of the parameterized problems accepted by [`get_adjustable_problem`]
pub const ADJUSTABLE_PROBLEM_NAMES: [&str; 2] = ["adjustable_branin", "adjustable_paciorek"];

/// Returns the shared catalog problem called `name`.
///
/// ```
/// use math_audio_multifidelity::get_problem;
///
/// let branin = get_problem("branin").unwrap();
/// assert_eq!(branin.fidelity_names(), vec!["high", "medium", "low"]);
/// assert!(get_problem("rosenbrock").is_err());
/// ```
pub fn get_problem(name: &str) -> Result<&'static MultiFidelityProblem> {
    match name {
        "bohachevsky" => Ok(bohachevsky()),
        "booth" => Ok(booth()),
        "borehole" => Ok(borehole()),
        "branin" => Ok(branin()),
        "currin" => Ok(currin()),
        "forrester" => Ok(forrester()),
        "hartmann6" => Ok(hartmann6()),
        "himmelblau" => Ok(himmelblau()),
        "park91a" => Ok(park91a()),
        "park91b" => Ok(park91b()),
        "six_hump_camelback" => Ok(six_hump_camelback()),
        _ => Err(MfError::UnknownProblem {
            name: name.to_string(),
        }),
    }
}

/// Builds the parameterized problem called `name` with tuning `parameter`.
pub fn get_adjustable_problem(name: &str, parameter: f64) -> Result<MultiFidelityProblem> {
    match name {
        "adjustable_branin" => adjustable_branin(parameter),
        "adjustable_paciorek" => adjustable_paciorek(parameter),
        _ => Err(MfError::UnknownProblem {
            name: name.to_string(),
        }),
    }
}

/// All shared catalog problems, in alphabetical order
pub fn all_problems() -> Vec<&'static MultiFidelityProblem> {
    PROBLEM_NAMES
        .iter()
        .filter_map(|name| get_problem(name).ok())
        .collect()
}

/// Get metadata for all catalog problems (explicit definitions)
pub fn get_problem_metadata() -> HashMap<String, ProblemMetadata> {
    let mut metadata = HashMap::new();

    let mut insert = |name: &str,
                      description: &str,
                      ndim: usize,
                      multimodal: bool,
                      reference: &str,
                      high_fidelity_minima: Vec<(Vec<f64>, f64)>| {
        metadata.insert(
            name.to_string(),
            ProblemMetadata {
                name: name.to_string(),
                description: description.to_string(),
                ndim,
                multimodal,
                reference: reference.to_string(),
                high_fidelity_minima,
            },
        );
    };

    insert(
        "bohachevsky",
        "Bohachevsky function with a scaled and shifted low fidelity",
        2,
        true,
        "Dong et al. (2015)",
        vec![(vec![0.0, 0.0], 0.0)],
    );
    insert(
        "booth",
        "Booth function with a scaled and bilinear-corrected low fidelity",
        2,
        false,
        "Dong et al. (2015)",
        vec![(vec![1.0, 3.0], 0.0)],
    );
    insert(
        "borehole",
        "Water flow rate through a borehole, with a simplified low fidelity",
        8,
        false,
        "Xiong et al. (2013)",
        vec![],
    );
    insert(
        "branin",
        "Branin function with medium and low fidelities",
        2,
        true,
        "Dong et al. (2015)",
        vec![],
    );
    insert(
        "currin",
        "Currin exponential function with a local-averaging low fidelity",
        2,
        false,
        "Xiong et al. (2013)",
        vec![],
    );
    insert(
        "forrester",
        "Forrester function with a linearly corrected low fidelity",
        1,
        true,
        "Forrester et al. (2007)",
        vec![(vec![0.757249], -6.02074)],
    );
    insert(
        "hartmann6",
        "Rescaled 6-D Hartmann function with perturbed weights as low fidelity",
        6,
        true,
        "Hartmann (1973)",
        vec![(
            vec![0.20169, 0.150011, 0.476874, 0.275332, 0.311652, 0.6573],
            -3.04246,
        )],
    );
    insert(
        "himmelblau",
        "Himmelblau function with a scaled and cubic-corrected low fidelity",
        2,
        true,
        "Dong et al. (2015)",
        vec![
            (vec![3.0, 2.0], 0.0),
            (vec![-2.805118, 3.131312], 0.0),
            (vec![-3.779310, -3.283186], 0.0),
            (vec![3.584428, -1.848126], 0.0),
        ],
    );
    insert(
        "park91a",
        "Park (1991) function A with a multiplicative low fidelity",
        4,
        false,
        "Xiong et al. (2013)",
        vec![],
    );
    insert(
        "park91b",
        "Park (1991) function B with a linear low fidelity",
        4,
        false,
        "Xiong et al. (2013)",
        vec![],
    );
    insert(
        "six_hump_camelback",
        "Six-hump camel-back function with a scaled and shifted low fidelity",
        2,
        true,
        "Dong et al. (2015)",
        vec![
            (vec![0.0898, -0.7126], -1.0316),
            (vec![-0.0898, 0.7126], -1.0316),
        ],
    );

    log::debug!("loaded metadata for {} problems", metadata.len());
    metadata
}
