use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use tsp_population::config::{self, RunConfig, NUM_CITIES};
use tsp_population::error::TSPError;
use tsp_population::{generate, report};

fn run<W: Write>(seed: u64, population_size: usize, out: &mut W) -> Result<(), TSPError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let distance_matrix = generate::generate_random_distance_matrix(NUM_CITIES, &mut rng)?;
    let population =
        generate::generate_population(&distance_matrix, population_size, &mut rng)?;

    report::write_report(out, &distance_matrix, &population)?;
    out.flush()?;

    return Ok(());
}

fn main() {
    let matches = config::build_cli().get_matches();
    let run_config = RunConfig::from_matches(&matches);

    let seed = run_config.resolve_seed();
    eprintln!("Using seed {}", seed);
    eprintln!(
        "Generating {} random routes over {} cities",
        run_config.population_size, NUM_CITIES
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(seed, run_config.population_size, &mut out) {
        eprintln!("Failed to generate routes: {}", e);
        std::process::exit(1);
    }
}
