use ndarray::Array2;

mod helpers;
mod struct_functionality;

pub use helpers::check_tour_is_permutation;

/// Symmetric cost matrix between cities with a zero diagonal.
///
/// The fields are private so a matrix can only be produced by the random
/// generator or by [`DistanceMatrix::from_array`], both of which uphold the
/// invariants. Once built it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    num_cities: u64,
    city_connections_w_costs: Array2<u32>,
}

/// A closed tour over every city together with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: Vec<u64>,
    tot_cost: u64,
}

/// The routes generated for one run, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    routes: Vec<Route>,
}
