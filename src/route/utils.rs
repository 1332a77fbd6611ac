use crate::types::DistanceMatrix;

/// Total cost of visiting `tour` in order and returning to its first city.
///
/// An empty tour costs nothing and a single city only pays its self-loop.
/// Every city must be in range for `distance_matrix`.
pub fn calculate_cost_of_tour(tour: &[u64], distance_matrix: &DistanceMatrix) -> u64 {
    let mut tot_cost: u64 = 0;
    for (i, city) in tour.iter().enumerate() {
        if i == 0 {
            // Closing edge back to the start
            let last_city = tour[tour.len() - 1];
            tot_cost += distance_matrix.cost_between(last_city, *city) as u64;
        } else {
            tot_cost += distance_matrix.cost_between(tour[i - 1], *city) as u64;
        }
    }

    return tot_cost;
}
