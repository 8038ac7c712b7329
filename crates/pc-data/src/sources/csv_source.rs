use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use csv::ReaderBuilder;
use pc_core::DataTable;
use tracing::{info, warn};

use crate::config::{Cell, NullConfig};
use crate::table::NumericTable;
use crate::DataError;

/// Load a CSV file with headers into a numeric table
pub fn load_csv(path: &Path, nulls: &NullConfig) -> Result<NumericTable, DataError> {
    let file = File::open(path)?;
    let table = read_csv(BufReader::new(file), nulls)?;
    info!("Loaded {} from {}", describe(&table), path.display());
    Ok(table)
}

/// Read CSV with headers from any reader.
///
/// Cells matching a null pattern become NaN. A column holding any other
/// non-numeric cell is dropped.
pub fn read_csv<R: Read>(reader: R, nulls: &NullConfig) -> Result<NumericTable, DataError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    let mut numeric = vec![true; headers.len()];

    for result in csv_reader.records() {
        let record = result?;
        for (idx, raw) in record.iter().enumerate() {
            if !numeric[idx] {
                continue;
            }
            match nulls.classify(raw) {
                Cell::Number(v) => columns[idx].push(v),
                Cell::Missing => columns[idx].push(f64::NAN),
                Cell::Text => numeric[idx] = false,
            }
        }
    }

    let columns: Vec<(String, Vec<f64>)> = headers
        .iter()
        .zip(columns)
        .zip(&numeric)
        .filter_map(|((name, values), &keep)| {
            if keep {
                Some((name.to_string(), values))
            } else {
                warn!("Skipping non-numeric column '{}'", name);
                None
            }
        })
        .collect();

    if columns.is_empty() {
        return Err(DataError::NoNumericColumns);
    }

    NumericTable::new(columns)
}

fn describe(table: &NumericTable) -> String {
    format!("{} rows x {} columns", table.row_count(), table.width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_with_missing_values() {
        let input = "mpg,name,weight\n21.0,a,2.6\nNA,b,2.8\n18.5,c,\n";
        let table = read_csv(input.as_bytes(), &NullConfig::default()).unwrap();

        assert_eq!(table.width(), 2);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_name(0), "mpg");
        assert_eq!(table.column_name(1), "weight");
        assert!(table.value(1, 0).is_nan());
        assert!(table.value(2, 1).is_nan());
        assert_eq!(table.value(0, 1), 2.6);
    }

    #[test]
    fn test_read_csv_without_numbers() {
        let input = "name\nfoo\nbar\n";
        assert!(matches!(
            read_csv(input.as_bytes(), &NullConfig::default()),
            Err(DataError::NoNumericColumns)
        ));
    }

    #[test]
    fn test_ragged_rows_fail() {
        let input = "a,b\n1,2\n3\n";
        assert!(matches!(
            read_csv(input.as_bytes(), &NullConfig::default()),
            Err(DataError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_csv(Path::new("/nonexistent/pc-data-test.csv"), &NullConfig::default());
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
