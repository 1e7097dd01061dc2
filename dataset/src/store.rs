//! FILENAME: dataset/src/store.rs
//! Record store: owner of the original/filtered dataset pair.
//!
//! The original dataset is replaced wholesale on load and never mutated in
//! place; the filtered dataset is a full replacement on every filter change,
//! never an incremental patch. Keeping both behind one owned struct (instead
//! of module-level globals) lets callers hold independent stores per view.

use crate::record::Record;

// ============================================================================
// RECORD STORE
// ============================================================================

/// Holds the as-fetched dataset and its current filtered derivation.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    original: Vec<Record>,
    filtered: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Replaces the original dataset and resets the filtered view to an
    /// identical copy. No other side effects; re-rendering and filter
    /// reapplication are the caller's responsibility.
    pub fn load(&mut self, records: Vec<Record>) {
        self.filtered = records.clone();
        self.original = records;
    }

    /// Clears both datasets. Used when a payload fails to decode: downstream
    /// renders an explicit "no data" state instead of stale rows.
    pub fn clear(&mut self) {
        self.original.clear();
        self.filtered.clear();
    }

    pub fn original(&self) -> &[Record] {
        &self.original
    }

    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    /// Replaces the filtered dataset wholesale.
    pub fn set_filtered(&mut self, records: Vec<Record>) {
        self.filtered = records;
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
