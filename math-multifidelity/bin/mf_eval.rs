use clap::{Parser, ValueEnum};
use math_audio_multifidelity::sampling::{latin_hypercube, uniform};
use math_audio_multifidelity::{
    ADJUSTABLE_PROBLEM_NAMES, MfError, MultiFidelityProblem, PROBLEM_NAMES,
    get_adjustable_problem, get_problem, get_problem_metadata,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::process;

/// CLI arguments for sampling and evaluating multi-fidelity problems
#[derive(Parser, Debug)]
#[command(
    name = "mf_eval",
    about = "Evaluate multi-fidelity benchmark problems on sampled points and write CSV"
)]
struct Cli {
    /// Name of the problem to evaluate (use --list to see available options)
    #[arg(long)]
    problem: Option<String>,

    /// Tuning parameter in [0, 1] for adjustable problems
    #[arg(long, default_value_t = 0.0)]
    parameter: f64,

    /// Restrict the output to one fidelity (name or index)
    #[arg(long)]
    fidelity: Option<String>,

    /// Number of points to sample
    #[arg(long, default_value_t = 10)]
    samples: usize,

    /// Sampling scheme in the unit hypercube
    #[arg(long, value_enum, default_value_t = SamplingChoice::LatinHypercube)]
    sampling: SamplingChoice,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write the CSV to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// List all available problems and exit
    #[arg(long)]
    list: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SamplingChoice {
    LatinHypercube,
    Uniform,
}

fn list_available_problems() {
    let metadata = get_problem_metadata();
    println!("Available problems:");
    for name in PROBLEM_NAMES {
        let Ok(problem) = get_problem(name) else {
            continue;
        };
        let description = metadata
            .get(name)
            .map(|m| m.description.as_str())
            .unwrap_or("");
        println!(
            "  {:<20} {}D  [{}]  {}",
            name,
            problem.ndim(),
            problem.fidelity_names().join(", "),
            description
        );
    }
    println!("Adjustable problems (use --parameter):");
    for name in ADJUSTABLE_PROBLEM_NAMES {
        println!("  {}", name);
    }
}

fn resolve_problem(name: &str, parameter: f64) -> Result<MultiFidelityProblem, MfError> {
    if ADJUSTABLE_PROBLEM_NAMES.contains(&name) {
        get_adjustable_problem(name, parameter)
    } else {
        get_problem(name).cloned()
    }
}

fn evaluate_to_csv(
    problem: &MultiFidelityProblem,
    fidelity: Option<&str>,
    cli: &Cli,
) -> Result<String, MfError> {
    let fidelities = match fidelity {
        Some(key) => match key.parse::<usize>() {
            Ok(index) => vec![problem.fidelity_at(index)?],
            Err(_) => vec![problem.fidelity(key)?],
        },
        None => problem.fidelities().collect(),
    };

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let unit = match cli.sampling {
        SamplingChoice::LatinHypercube => latin_hypercube(cli.samples, problem.ndim(), &mut rng),
        SamplingChoice::Uniform => uniform(cli.samples, problem.ndim(), &mut rng),
    };
    let points = problem.rescale_from_unit(unit.view())?;

    let mut columns = Vec::with_capacity(fidelities.len());
    for f in &fidelities {
        columns.push(f.evaluate(&points)?);
    }

    let header: Vec<String> = (0..problem.ndim())
        .map(|j| format!("x{}", j))
        .chain(fidelities.iter().map(|f| f.name().to_string()))
        .collect();
    let mut csv = format!("{}\n", header.join(","));
    for (i, row) in points.rows().into_iter().enumerate() {
        let fields: Vec<String> = row
            .iter()
            .map(|v| v.to_string())
            .chain(columns.iter().map(|c| c[i].to_string()))
            .collect();
        csv.push_str(&fields.join(","));
        csv.push('\n');
    }
    Ok(csv)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        list_available_problems();
        return;
    }

    let name = match &cli.problem {
        Some(name) => name.trim(),
        None => {
            eprintln!("Error: --problem must be provided unless --list is used.");
            process::exit(2);
        }
    };

    let problem = match resolve_problem(name, cli.parameter) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Error: {e}. Use --list to inspect available names.");
            process::exit(2);
        }
    };

    log::info!(
        "evaluating '{}' on {} {:?} samples (seed {})",
        problem.name(),
        cli.samples,
        cli.sampling,
        cli.seed
    );

    let csv = match evaluate_to_csv(&problem, cli.fidelity.as_deref(), &cli) {
        Ok(csv) => csv,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, csv) {
                eprintln!("Error: failed to write '{path}': {e}");
                process::exit(1);
            }
            println!("Wrote {} rows to {}", cli.samples, path);
        }
        None => print!("{csv}"),
    }
}
