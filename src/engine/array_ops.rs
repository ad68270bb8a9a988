//! Array Operation Demos
//!
//! The 1D and 2D array screens are direct-manipulation demos rather than
//! animations: each operation mutates the array/matrix and returns the
//! explanation line, or an error message for the alert dialog.

use crate::engine::parse::{parse_int_array, random_value};

/// Append the comma-separated elements in `input` to the array.
pub fn append_elements(array: &mut Vec<i64>, input: &str) -> Result<String, String> {
    if input.trim().is_empty() {
        return Err("Enter comma-separated values like \"1,2,3\"".to_string());
    }
    let elements = parse_int_array(input);
    if elements.is_empty() {
        return Err("No valid numbers entered".to_string());
    }
    let description = elements
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    array.extend_from_slice(&elements);
    Ok(format!("Added elements: [{description}]"))
}

/// Overwrite one index after bounds-checking both inputs.
pub fn update_at(array: &mut [i64], index_input: &str, value_input: &str) -> Result<String, String> {
    let index: usize = index_input
        .trim()
        .parse()
        .map_err(|_| "Enter valid index and value".to_string())?;
    let value: i64 = value_input
        .trim()
        .parse()
        .map_err(|_| "Enter valid index and value".to_string())?;
    if index >= array.len() {
        return Err("Index out of range".to_string());
    }
    array[index] = value;
    Ok(format!("Updated index {index} to {value}"))
}

/// Linear scan for a value; returns the found index (if any) and the
/// explanation line.
pub fn search_value(array: &[i64], value_input: &str) -> Result<(Option<usize>, String), String> {
    let value: i64 = value_input
        .trim()
        .parse()
        .map_err(|_| "Enter a number to search".to_string())?;
    match array.iter().position(|&v| v == value) {
        Some(index) => Ok((Some(index), format!("Found {value} at index {index}"))),
        None => Ok((None, format!("{value} not found in array"))),
    }
}

/// Append a row to the matrix; a non-empty matrix fixes the column count.
pub fn add_row(matrix: &mut Vec<Vec<i64>>, input: &str) -> Result<String, String> {
    if input.trim().is_empty() {
        return Err("Enter comma-separated values like \"1,2,3\"".to_string());
    }
    let row = parse_int_array(input);
    if row.is_empty() {
        return Err("No valid numbers entered".to_string());
    }
    if let Some(first) = matrix.first() {
        if first.len() != row.len() {
            return Err(format!("New row must have {} columns", first.len()));
        }
    }
    let description = row
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    matrix.push(row);
    Ok(format!("Added new row: [{description}]"))
}

/// Append `value` as a new trailing column on every row.
pub fn add_column(matrix: &mut [Vec<i64>], value_input: &str) -> Result<String, String> {
    let value: i64 = value_input
        .trim()
        .parse()
        .map_err(|_| "Enter a value for the new column".to_string())?;
    for row in matrix.iter_mut() {
        row.push(value);
    }
    Ok(format!("Added new column with value {value}"))
}

pub fn update_cell(
    matrix: &mut [Vec<i64>],
    row_input: &str,
    col_input: &str,
    value_input: &str,
) -> Result<String, String> {
    let invalid = || "Provide valid row, column, and new value".to_string();
    let row: usize = row_input.trim().parse().map_err(|_| invalid())?;
    let col: usize = col_input.trim().parse().map_err(|_| invalid())?;
    let value: i64 = value_input.trim().parse().map_err(|_| invalid())?;
    let cols = matrix.first().map(|r| r.len()).unwrap_or(0);
    if row >= matrix.len() || col >= cols {
        return Err("Invalid matrix indices".to_string());
    }
    matrix[row][col] = value;
    Ok(format!("Updated cell [{row}, {col}] to {value}"))
}

/// Random matrix of 2-5 rows by 2-5 columns, values in `1..=20`.
pub fn random_matrix() -> (Vec<Vec<i64>>, String) {
    let rows = (js_sys::Math::random() * 4.0) as usize + 2;
    let cols = (js_sys::Math::random() * 4.0) as usize + 2;
    let matrix = (0..rows)
        .map(|_| (0..cols).map(|_| random_value(20)).collect())
        .collect();
    (matrix, format!("Generated {rows}x{cols} random matrix"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_parses_and_reports() {
        let mut array = vec![1];
        let status = append_elements(&mut array, "2, 3,x").unwrap();
        assert_eq!(array, vec![1, 2, 3]);
        assert_eq!(status, "Added elements: [2, 3]");
        assert!(append_elements(&mut array, "  ").is_err());
        assert!(append_elements(&mut array, "a,b").is_err());
    }

    #[test]
    fn update_checks_bounds() {
        let mut array = vec![1, 2, 3];
        assert_eq!(update_at(&mut array, "1", "9").unwrap(), "Updated index 1 to 9");
        assert_eq!(array, vec![1, 9, 3]);
        assert!(update_at(&mut array, "3", "0").is_err());
        assert!(update_at(&mut array, "x", "0").is_err());
    }

    #[test]
    fn search_reports_first_index() {
        let array = vec![5, 7, 5];
        assert_eq!(
            search_value(&array, "5").unwrap(),
            (Some(0), "Found 5 at index 0".to_string())
        );
        assert_eq!(search_value(&array, "8").unwrap().0, None);
        assert!(search_value(&array, "nope").is_err());
    }

    #[test]
    fn add_row_enforces_width() {
        let mut matrix = vec![vec![1, 2, 3]];
        assert!(add_row(&mut matrix, "4,5").is_err());
        add_row(&mut matrix, "4,5,6").unwrap();
        assert_eq!(matrix.len(), 2);

        // An empty matrix accepts any width.
        let mut empty: Vec<Vec<i64>> = Vec::new();
        add_row(&mut empty, "1,2").unwrap();
        assert_eq!(empty, vec![vec![1, 2]]);
    }

    #[test]
    fn add_column_extends_every_row() {
        let mut matrix = vec![vec![1, 2], vec![3, 4]];
        add_column(&mut matrix, "9").unwrap();
        assert_eq!(matrix, vec![vec![1, 2, 9], vec![3, 4, 9]]);
    }

    #[test]
    fn update_cell_checks_both_axes() {
        let mut matrix = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(
            update_cell(&mut matrix, "1", "0", "7").unwrap(),
            "Updated cell [1, 0] to 7"
        );
        assert!(update_cell(&mut matrix, "2", "0", "7").is_err());
        assert!(update_cell(&mut matrix, "0", "2", "7").is_err());
        assert!(update_cell(&mut matrix, "0", "oops", "7").is_err());
    }
}
