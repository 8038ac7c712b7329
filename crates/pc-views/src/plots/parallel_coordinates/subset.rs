use crate::PlotError;

/// Ordered records shown by one plot. The position of a record in the
/// subset is its plot-local index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleSubset {
    records: Vec<usize>,
    local: Vec<Option<usize>>,
}

impl VisibleSubset {
    /// Subset over a table with `row_count` rows
    pub fn new(records: Vec<usize>, row_count: usize) -> Result<Self, PlotError> {
        let mut local = vec![None; row_count];
        for (i, &record) in records.iter().enumerate() {
            let slot = local.get_mut(record).ok_or(PlotError::RecordOutOfRange {
                record,
                rows: row_count,
            })?;
            if slot.is_some() {
                return Err(PlotError::DuplicateRecord(record));
            }
            *slot = Some(i);
        }
        Ok(Self { records, local })
    }

    /// Every row of the table in order
    pub fn all(row_count: usize) -> Self {
        Self {
            records: (0..row_count).collect(),
            local: (0..row_count).map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Global record index of a local index
    pub fn global(&self, local: usize) -> usize {
        self.records[local]
    }

    /// Local index of a global record, `None` when not shown
    pub fn local(&self, global: usize) -> Option<usize> {
        self.local.get(global).copied().flatten()
    }

    pub fn records(&self) -> &[usize] {
        &self.records
    }
}
