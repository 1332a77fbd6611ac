use thiserror::Error;

#[derive(Debug, Error)]
pub enum TSPError {
    #[error("A distance matrix needs at least one city")]
    EmptyDimension,

    #[error("Distance matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("City {city} has a non-zero cost ({cost}) to itself")]
    NonZeroDiagonal { city: u64, cost: u32 },

    #[error("Cost from city {city_a} to {city_b} differs from the reverse direction")]
    Asymmetric { city_a: u64, city_b: u64 },

    #[error("A population needs at least one route")]
    EmptyPopulation,

    #[error("Tour visits {actual} cities but the problem has {expected}")]
    TourLengthMismatch { expected: u64, actual: u64 },

    #[error("City {city} is out of range for a problem of {num_cities} cities")]
    CityOutOfRange { city: u64, num_cities: u64 },

    #[error("City {city} appears more than once in the tour")]
    RepeatedCity { city: u64 },

    #[error("Failed to write the report: {0}")]
    Io(#[from] std::io::Error),
}
