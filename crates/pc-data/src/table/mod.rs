//! In-memory numeric table

use arrow::array::{Array, Float64Array};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use pc_core::DataTable;
use tracing::{debug, warn};

use crate::DataError;

/// Column-major table of `f64` values with NaN for missing cells
#[derive(Debug, Clone, Default)]
pub struct NumericTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    row_count: usize,
}

impl NumericTable {
    /// Build a table from named columns of equal length
    pub fn new(columns: Vec<(String, Vec<f64>)>) -> Result<Self, DataError> {
        let row_count = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        let mut names = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());

        for (name, column) in columns {
            if column.len() != row_count {
                return Err(DataError::RaggedColumn {
                    name,
                    len: column.len(),
                    expected: row_count,
                });
            }
            names.push(name);
            values.push(column);
        }

        Ok(Self {
            names,
            columns: values,
            row_count,
        })
    }

    /// Build a table from every numeric column of a record batch.
    ///
    /// Integer and float columns are cast to `f64`; nulls become NaN.
    /// Other column types are skipped.
    pub fn from_record_batch(batch: &RecordBatch) -> Result<Self, DataError> {
        let schema = batch.schema();
        let mut columns = Vec::new();

        for (field, column) in schema.fields().iter().zip(batch.columns()) {
            if !field.data_type().is_numeric() {
                warn!("Skipping non-numeric column '{}' ({:?})", field.name(), field.data_type());
                continue;
            }

            let floats = cast(column, &DataType::Float64)?;
            let Some(floats) = floats.as_any().downcast_ref::<Float64Array>() else {
                warn!("Column '{}' did not cast to Float64", field.name());
                continue;
            };

            let values = (0..floats.len())
                .map(|i| if floats.is_null(i) { f64::NAN } else { floats.value(i) })
                .collect();
            columns.push((field.name().to_string(), values));
        }

        if columns.is_empty() {
            return Err(DataError::NoNumericColumns);
        }

        debug!("Extracted {} numeric columns from {} rows", columns.len(), batch.num_rows());
        Self::new(columns)
    }

    /// Index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl DataTable for NumericTable {
    fn width(&self) -> usize {
        self.columns.len()
    }

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn value(&self, row: usize, column: usize) -> f64 {
        self.columns[column][row]
    }

    fn column_name(&self, column: usize) -> &str {
        &self.names[column]
    }
}
