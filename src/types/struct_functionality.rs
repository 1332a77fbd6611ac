use ndarray::{Array2, ArrayView1};

use super::{check_tour_is_permutation, DistanceMatrix, Population, Route};
use crate::error::TSPError;
use crate::route::utils::calculate_cost_of_tour;

impl DistanceMatrix {
    /// Wraps an existing cost grid after checking that it is non-empty, square,
    /// has a zero diagonal and is symmetric.
    pub fn from_array(city_connections_w_costs: Array2<u32>) -> Result<DistanceMatrix, TSPError> {
        let (rows, cols) = city_connections_w_costs.dim();
        if rows != cols {
            return Err(TSPError::NotSquare { rows, cols });
        }
        if rows == 0 {
            return Err(TSPError::EmptyDimension);
        }

        for i in 0..rows {
            let self_cost = city_connections_w_costs[[i, i]];
            if self_cost != 0 {
                return Err(TSPError::NonZeroDiagonal {
                    city: i as u64,
                    cost: self_cost,
                });
            }

            for j in i + 1..cols {
                if city_connections_w_costs[[i, j]] != city_connections_w_costs[[j, i]] {
                    return Err(TSPError::Asymmetric {
                        city_a: i as u64,
                        city_b: j as u64,
                    });
                }
            }
        }

        return Ok(DistanceMatrix {
            num_cities: rows as u64,
            city_connections_w_costs,
        });
    }

    pub fn num_cities(&self) -> u64 {
        return self.num_cities;
    }

    /// # Panics
    ///
    /// Panics if either city is out of range.
    pub fn cost_between(&self, city_a: u64, city_b: u64) -> u32 {
        return self.city_connections_w_costs[[city_a as usize, city_b as usize]];
    }

    pub fn row(&self, city: u64) -> ArrayView1<'_, u32> {
        return self.city_connections_w_costs.row(city as usize);
    }
}

impl Route {
    // Callers must pass a permutation and its matching cost.
    pub(crate) fn new(path: Vec<u64>, tot_cost: u64) -> Route {
        debug_assert!(check_tour_is_permutation(&path, path.len() as u64).is_ok());
        Route { path, tot_cost }
    }

    /// Builds a route from an explicit visiting order, pricing it against `distance_matrix`.
    pub fn from_path(path: Vec<u64>, distance_matrix: &DistanceMatrix) -> Result<Route, TSPError> {
        check_tour_is_permutation(&path, distance_matrix.num_cities())?;
        let tot_cost = calculate_cost_of_tour(&path, distance_matrix);

        return Ok(Route { path, tot_cost });
    }

    pub fn path(&self) -> &[u64] {
        return &self.path;
    }

    pub fn tot_cost(&self) -> u64 {
        return self.tot_cost;
    }
}

impl Population {
    pub fn new(routes: Vec<Route>) -> Result<Population, TSPError> {
        if routes.is_empty() {
            return Err(TSPError::EmptyPopulation);
        }

        return Ok(Population { routes });
    }

    pub fn routes(&self) -> &[Route] {
        return &self.routes;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        return self.routes.iter();
    }

    pub fn len(&self) -> usize {
        return self.routes.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.routes.is_empty();
    }
}
