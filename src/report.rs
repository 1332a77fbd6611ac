use std::io::{Result, Write};

use crate::types::{DistanceMatrix, Population, Route};

const CELL_WIDTH: usize = 4;

/// Writes the matrix one row per line. Every cell, the last included, is
/// right-aligned to a fixed width and followed by a space.
pub fn write_distance_matrix<W: Write + ?Sized>(
    out: &mut W,
    distance_matrix: &DistanceMatrix,
) -> Result<()> {
    for city in 0..distance_matrix.num_cities() {
        for cost in distance_matrix.row(city).iter() {
            write!(out, "{:>width$} ", cost, width = CELL_WIDTH)?;
        }
        writeln!(out)?;
    }

    return Ok(());
}

fn format_route(route: &Route) -> String {
    let cities: Vec<String> = route.path().iter().map(|city| city.to_string()).collect();
    return format!("{} | Cost: {}", cities.join(" "), route.tot_cost());
}

/// Writes a header followed by one `<cities> | Cost: <cost>` line per route.
pub fn write_population<W: Write + ?Sized>(out: &mut W, population: &Population) -> Result<()> {
    writeln!(out, "Generated routes:")?;
    for route in population.iter() {
        writeln!(out, "{}", format_route(route))?;
    }

    return Ok(());
}

pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    distance_matrix: &DistanceMatrix,
    population: &Population,
) -> Result<()> {
    write_distance_matrix(out, distance_matrix)?;
    writeln!(out)?;
    write_population(out, population)?;

    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn fixture() -> (DistanceMatrix, Population) {
        let matrix = DistanceMatrix::from_array(array![[0, 2, 10], [2, 0, 4], [10, 4, 0]])
            .expect("valid matrix");
        let population = Population::new(vec![
            Route::from_path(vec![0, 1, 2], &matrix).expect("valid path"),
            Route::from_path(vec![2, 0, 1], &matrix).expect("valid path"),
        ])
        .expect("non-empty");
        (matrix, population)
    }

    fn render<F: Fn(&mut Vec<u8>) -> Result<()>>(write: F) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).expect("writing to a Vec cannot fail");
        String::from_utf8(buffer).expect("report is UTF-8")
    }

    #[test]
    fn test_matrix_uses_fixed_width_cells() {
        let (matrix, _) = fixture();
        let text = render(|out| write_distance_matrix(out, &matrix));
        assert_eq!(text, "   0    2   10 \n   2    0    4 \n  10    4    0 \n");
    }

    #[test]
    fn test_population_lists_paths_and_costs() {
        let (_, population) = fixture();
        let text = render(|out| write_population(out, &population));
        assert_eq!(text, "Generated routes:\n0 1 2 | Cost: 16\n2 0 1 | Cost: 16\n");
    }

    #[test]
    fn test_report_separates_sections_with_blank_line() {
        let (matrix, population) = fixture();
        let text = render(|out| write_report(out, &matrix, &population));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3 + 1 + 1 + 2);
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Generated routes:");
    }
}
