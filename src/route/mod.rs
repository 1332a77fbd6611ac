pub mod utils;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{DistanceMatrix, Route};
use utils::calculate_cost_of_tour;

/// Uniformly random visiting order of the cities `0..num_cities`.
pub fn generate_random_tour<R: Rng + ?Sized>(num_cities: u64, rng: &mut R) -> Vec<u64> {
    let mut tour: Vec<u64> = (0..num_cities).collect();
    tour.shuffle(rng);

    return tour;
}

/// Draws a random tour over every city of `distance_matrix` and prices it.
pub fn generate_random_route<R: Rng + ?Sized>(
    distance_matrix: &DistanceMatrix,
    rng: &mut R,
) -> Route {
    let tour = generate_random_tour(distance_matrix.num_cities(), rng);
    let tot_cost = calculate_cost_of_tour(&tour, distance_matrix);

    return Route::new(tour, tot_cost);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::check_tour_is_permutation;
    use ndarray::array;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_tour_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let tour = generate_random_tour(8, &mut rng);
        assert!(check_tour_is_permutation(&tour, 8).is_ok());
    }

    #[test]
    fn test_tour_of_zero_cities_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_random_tour(0, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_tours() {
        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);
        for _ in 0..10 {
            assert_eq!(
                generate_random_tour(8, &mut rng_a),
                generate_random_tour(8, &mut rng_b)
            );
        }
    }

    #[test]
    fn test_all_orderings_are_reached_evenly() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts: HashMap<Vec<u64>, u32> = HashMap::new();
        for _ in 0..6000 {
            *counts.entry(generate_random_tour(3, &mut rng)).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (tour, count) in counts {
            assert!(
                (800..=1200).contains(&count),
                "tour {:?} drawn {} times",
                tour,
                count
            );
        }
    }

    #[test]
    fn test_route_cost_matches_its_path() {
        let matrix = DistanceMatrix::from_array(array![[0, 2, 9], [2, 0, 4], [9, 4, 0]])
            .expect("valid matrix");
        let mut rng = StdRng::seed_from_u64(3);
        let route = generate_random_route(&matrix, &mut rng);

        assert!(check_tour_is_permutation(route.path(), 3).is_ok());
        // Every 3-city cycle uses all three edges
        assert_eq!(route.tot_cost(), 15);
    }

    proptest! {
        #[test]
        fn prop_tour_is_permutation(seed in any::<u64>(), num_cities in 1u64..40) {
            let mut rng = StdRng::seed_from_u64(seed);
            let tour = generate_random_tour(num_cities, &mut rng);
            prop_assert!(check_tour_is_permutation(&tour, num_cities).is_ok());
        }
    }
}
