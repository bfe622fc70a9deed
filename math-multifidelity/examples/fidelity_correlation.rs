//! Compare low and high fidelities of every catalog problem on a Latin hypercube

use math_audio_multifidelity::all_problems;
use math_audio_multifidelity::sampling::latin_hypercube;
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pearson(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let n = a.len() as f64;
    let (ma, mb) = (a.sum() / n, b.sum() / n);
    let cov: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - ma) * (y - mb)).sum();
    let va: f64 = a.iter().map(|x| (x - ma).powi(2)).sum();
    let vb: f64 = b.iter().map(|y| (y - mb).powi(2)).sum();
    cov / (va * vb).sqrt()
}

fn main() {
    let n = 200;
    println!("Correlation of each fidelity with the high fidelity ({} LHS points):", n);

    for problem in all_problems() {
        let mut rng = StdRng::seed_from_u64(0);
        let unit = latin_hypercube(n, problem.ndim(), &mut rng);
        let points = match problem.rescale_from_unit(unit.view()) {
            Ok(points) => points,
            Err(e) => {
                eprintln!("{}: {}", problem.name(), e);
                continue;
            }
        };
        let high = match problem.high_fidelity().evaluate(&points) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("{}: {}", problem.name(), e);
                continue;
            }
        };

        for fidelity in problem.fidelities().skip(1) {
            match fidelity.evaluate(&points) {
                Ok(values) => println!(
                    "{:<20} {:<8} r = {:+.4}",
                    problem.name(),
                    fidelity.name(),
                    pearson(&high, &values)
                ),
                Err(e) => eprintln!("{}[{}]: {}", problem.name(), fidelity.name(), e),
            }
        }
    }
}
