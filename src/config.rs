use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rand::Rng;

/// Number of cities in every generated problem.
pub const NUM_CITIES: u64 = 8;
pub const DEFAULT_POPULATION_SIZE: usize = 5;
pub const MAX_POPULATION_SIZE: u64 = 1_000_000;
pub const MIN_CITY_COST: u32 = 1;
pub const MAX_CITY_COST: u32 = 10;

pub struct RunConfig {
    pub seed: Option<u64>,
    pub population_size: usize,
}

pub fn build_cli() -> Command {
    // Seed for the random source
    let seed_arg = Arg::new("seed")
        .short('s')
        .long("seed")
        .action(ArgAction::Set)
        .required(false)
        .value_parser(value_parser!(u64))
        .help(
            "Seed for the random number generator. Runs with the same seed print the same matrix and routes. If omitted, a seed is drawn from system entropy."
        );
    // Number of routes in the population
    let population_arg = Arg::new("population")
        .short('p')
        .long("population")
        .action(ArgAction::Set)
        .required(false)
        .value_parser(value_parser!(u64).range(1..=MAX_POPULATION_SIZE))
        .help("Number of random routes to generate, between 1 and 1000000. Defaults to 5.");

    return Command::new("tsp-population")
        .about("Generates a random symmetric distance matrix and a population of random routes over it.")
        .arg(seed_arg)
        .arg(population_arg);
}

impl RunConfig {
    pub fn from_matches(matches: &ArgMatches) -> RunConfig {
        let population_size = match matches.get_one::<u64>("population") {
            Some(size) => *size as usize,
            None => DEFAULT_POPULATION_SIZE,
        };

        return RunConfig {
            seed: matches.get_one::<u64>("seed").copied(),
            population_size,
        };
    }

    /// The configured seed, or a fresh one from the entropy-seeded thread RNG.
    pub fn resolve_seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => rand::thread_rng().gen(),
        }
    }
}
