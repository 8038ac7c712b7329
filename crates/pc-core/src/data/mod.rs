//! Tabular data access

/// Read-only rectangular table of numeric values.
///
/// Missing cells are reported as `f64::NAN`. Row indices are the stable
/// global record indices shared with [`crate::LinkedSelection`].
pub trait DataTable: Send + Sync {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn row_count(&self) -> usize;

    /// Value at (row, column), NaN when missing
    fn value(&self, row: usize, column: usize) -> f64;

    /// Name of a column
    fn column_name(&self, column: usize) -> &str;
}

/// Whether a table value counts as missing.
///
/// Infinite values cannot be placed on an axis either, so they share the
/// NaN treatment.
pub fn is_missing(value: f64) -> bool {
    !value.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values() {
        assert!(is_missing(f64::NAN));
        assert!(is_missing(f64::INFINITY));
        assert!(is_missing(f64::NEG_INFINITY));
        assert!(!is_missing(0.0));
        assert!(!is_missing(-12.5));
    }
}
