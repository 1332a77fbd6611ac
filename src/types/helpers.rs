use crate::error::TSPError;

/// Verifies that `tour` visits each of the `num_cities` cities exactly once.
pub fn check_tour_is_permutation(tour: &[u64], num_cities: u64) -> Result<(), TSPError> {
    if tour.len() as u64 != num_cities {
        return Err(TSPError::TourLengthMismatch {
            expected: num_cities,
            actual: tour.len() as u64,
        });
    }

    let mut visited = vec![false; num_cities as usize];
    for &city in tour {
        if city >= num_cities {
            return Err(TSPError::CityOutOfRange { city, num_cities });
        }
        match visited[city as usize] {
            true => {
                return Err(TSPError::RepeatedCity { city });
            }
            false => {
                visited[city as usize] = true;
            }
        }
    }

    return Ok(());
}
