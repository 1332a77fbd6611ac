mod random;

use rand::Rng;

pub use random::generate_random_distance_matrix;

use crate::error::TSPError;
use crate::route::generate_random_route;
use crate::types::{DistanceMatrix, Population};

/// Draws `population_size` independent random routes over `distance_matrix`.
pub fn generate_population<R: Rng + ?Sized>(
    distance_matrix: &DistanceMatrix,
    population_size: usize,
    rng: &mut R,
) -> Result<Population, TSPError> {
    if population_size == 0 {
        return Err(TSPError::EmptyPopulation);
    }

    let mut routes = Vec::with_capacity(population_size);
    for _ in 0..population_size {
        routes.push(generate_random_route(distance_matrix, rng));
    }

    return Population::new(routes);
}
