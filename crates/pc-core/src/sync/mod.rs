use std::sync::Arc;
use parking_lot::RwLock;

/// Per-record flags shared across linked views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordFlags {
    /// Record is filtered out by some view and drawn with the masked style
    pub masked: bool,

    /// Record is part of the current selection
    pub highlighted: bool,
}

/// Linked selection state shared by every plot over the same table.
///
/// Cloning the handle shares the underlying store. Writes are
/// last-writer-wins; there is no transaction across records.
#[derive(Clone)]
pub struct LinkedSelection {
    inner: Arc<RwLock<LinkedState>>,
}

struct LinkedState {
    flags: Vec<RecordFlags>,
    revision: u64,
}

impl LinkedSelection {
    /// Create a store for `count` records, all unmasked and unhighlighted
    pub fn new(count: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LinkedState {
                flags: vec![RecordFlags::default(); count],
                revision: 0,
            })),
        }
    }

    /// Number of records tracked
    pub fn len(&self) -> usize {
        self.inner.read().flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flags of one record
    ///
    /// # Panics
    ///
    /// Panics if `record` is out of range.
    pub fn flags(&self, record: usize) -> RecordFlags {
        self.inner.read().flags[record]
    }

    pub fn is_masked(&self, record: usize) -> bool {
        self.flags(record).masked
    }

    pub fn is_highlighted(&self, record: usize) -> bool {
        self.flags(record).highlighted
    }

    /// Set the highlighted flag, returning whether it changed
    pub fn set_highlighted(&self, record: usize, highlighted: bool) -> bool {
        let mut state = self.inner.write();
        if state.flags[record].highlighted == highlighted {
            return false;
        }
        state.flags[record].highlighted = highlighted;
        state.revision += 1;
        true
    }

    /// Set the masked flag, returning whether it changed
    pub fn set_masked(&self, record: usize, masked: bool) -> bool {
        let mut state = self.inner.write();
        if state.flags[record].masked == masked {
            return false;
        }
        state.flags[record].masked = masked;
        state.revision += 1;
        true
    }

    /// Unhighlight every record
    pub fn clear_highlights(&self) {
        let mut state = self.inner.write();
        let mut changed = false;
        for flags in state.flags.iter_mut() {
            changed |= flags.highlighted;
            flags.highlighted = false;
        }
        if changed {
            state.revision += 1;
        }
    }

    /// Indices of all highlighted records
    pub fn highlighted_records(&self) -> Vec<usize> {
        self.inner
            .read()
            .flags
            .iter()
            .enumerate()
            .filter(|(_, f)| f.highlighted)
            .map(|(i, _)| i)
            .collect()
    }

    /// Monotonic counter bumped on every effective write.
    ///
    /// Views compare it against the value they last rendered with to
    /// notice changes made through another handle.
    pub fn revision(&self) -> u64 {
        self.inner.read().revision
    }
}

impl std::fmt::Debug for LinkedSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.read();
        f.debug_struct("LinkedSelection")
            .field("records", &state.flags.len())
            .field("revision", &state.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_handles() {
        let a = LinkedSelection::new(4);
        let b = a.clone();

        assert!(a.set_highlighted(2, true));
        assert!(b.is_highlighted(2));
        assert!(!b.set_highlighted(2, true));
        assert_eq!(b.highlighted_records(), vec![2]);
    }

    #[test]
    fn test_revision_counts_effective_writes() {
        let state = LinkedSelection::new(3);
        assert_eq!(state.revision(), 0);

        state.set_masked(0, true);
        state.set_masked(0, true);
        state.set_highlighted(1, true);
        assert_eq!(state.revision(), 2);

        state.clear_highlights();
        assert_eq!(state.revision(), 3);
        state.clear_highlights();
        assert_eq!(state.revision(), 3);
        assert!(state.is_masked(0));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_record() {
        let state = LinkedSelection::new(2);
        state.flags(2);
    }
}
