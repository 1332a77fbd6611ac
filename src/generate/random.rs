use ndarray::Array2;
use rand::Rng;

use crate::config::{MAX_CITY_COST, MIN_CITY_COST};
use crate::error::TSPError;
use crate::types::DistanceMatrix;

/// Fills a symmetric cost matrix with integer costs in
/// `MIN_CITY_COST..=MAX_CITY_COST` and zeros on the diagonal.
///
/// One value is drawn per unordered city pair, walking the upper triangle row
/// by row, and mirrored to the lower triangle.
pub fn generate_random_distance_matrix<R: Rng + ?Sized>(
    num_cities: u64,
    rng: &mut R,
) -> Result<DistanceMatrix, TSPError> {
    if num_cities == 0 {
        return Err(TSPError::EmptyDimension);
    }

    let mut cost_matrix = Array2::<u32>::zeros((num_cities as usize, num_cities as usize));
    for i in 0..num_cities as usize {
        cost_matrix[[i, i]] = 0;

        for j in i + 1..num_cities as usize {
            let cost: u32 = rng.gen_range(MIN_CITY_COST..=MAX_CITY_COST);
            cost_matrix[[i, j]] = cost;
            cost_matrix[[j, i]] = cost;
        }
    }

    return DistanceMatrix::from_array(cost_matrix);
}
