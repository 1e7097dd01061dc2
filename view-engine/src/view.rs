//! FILENAME: view-engine/src/view.rs
//! Table view orchestrator.
//!
//! Owns the record store, filter selections, search term, and sort state for
//! one dashboard table, and recomputes the visible rows on every input
//! event. Recomputation is always a full pass: the filtered dataset is
//! replaced wholesale and the active sort reapplied, exactly as the filter
//! handler re-runs the sorter after narrowing.
//!
//! All methods are synchronous and run to completion; debouncing rapid
//! search keystrokes is the caller's policy, not enforced here.

use crate::aggregate::{aggregate, Aggregation};
use crate::filter::{FilterSelections, SearchQuery};
use crate::sort::{apply_sort, SortDirection, SortState};
use crate::summary::{summarize, DatasetSummary};
use dataset::{decode_payload, DatasetError, Record, RecordStore};
use rustc_hash::FxHashMap;

// ============================================================================
// TABLE VIEW
// ============================================================================

/// UI state and derived rows for one dashboard table.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    store: RecordStore,
    selections: FilterSelections,
    search: SearchQuery,
    sort: SortState,

    /// Fields that have a multi-select filter widget.
    filter_fields: Vec<String>,

    /// Cached offerable options per filter field. A field with an active
    /// selection keeps its previously computed list (see
    /// `FilterSelections::narrowed_options`).
    options: FxHashMap<String, Vec<String>>,
}

impl TableView {
    pub fn new() -> Self {
        TableView::default()
    }

    /// A view whose filter widgets cover the given fields.
    pub fn with_filter_fields(fields: Vec<String>) -> Self {
        TableView {
            filter_fields: fields,
            ..TableView::default()
        }
    }

    /// Overrides which text fields the search box scans.
    pub fn set_search_fields(&mut self, fields: Vec<String>) {
        let term = self.search.term().to_string();
        self.search = SearchQuery::new(fields);
        self.search.set_term(&term);
    }

    // ========================================================================
    // DATA LOADING
    // ========================================================================

    /// Decodes and loads an API body. On failure the store is cleared so the
    /// caller renders an explicit empty/error state; the error is returned
    /// for display. Returns the number of records loaded.
    pub fn load_payload(&mut self, body: &str) -> Result<usize, DatasetError> {
        match decode_payload(body) {
            Ok(records) => {
                let count = records.len();
                self.load_records(records);
                Ok(count)
            }
            Err(e) => {
                self.store.clear();
                self.options.clear();
                Err(e)
            }
        }
    }

    /// Loads an already-decoded dataset and recomputes everything.
    pub fn load_records(&mut self, records: Vec<Record>) {
        log::debug!("loading {} records", records.len());
        self.store.load(records);
        self.refresh();
    }

    // ========================================================================
    // INPUT EVENTS
    // ========================================================================

    pub fn set_search_term(&mut self, term: &str) {
        self.search.set_term(term);
        self.refresh();
    }

    /// Toggles one value in a field's multi-select filter.
    pub fn toggle_filter(&mut self, field: &str, value: &str) {
        self.selections.toggle(field, value);
        self.refresh();
    }

    /// Replaces a field's selection outright.
    pub fn set_filter(&mut self, field: &str, values: Vec<String>) {
        self.selections.set(field, values);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.selections.clear();
        self.refresh();
    }

    /// Header click: toggles/activates the sort and returns the direction
    /// now in effect (for the caller's sorted indicator).
    pub fn sort_by(&mut self, column: &str) -> SortDirection {
        let direction = self.sort.request(column);
        let mut rows = self.store.filtered().to_vec();
        apply_sort(&mut rows, &self.sort);
        self.store.set_filtered(rows);
        direction
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// The rows currently in view: filtered, and sorted if a sort is active.
    pub fn rows(&self) -> &[Record] {
        self.store.filtered()
    }

    pub fn original(&self) -> &[Record] {
        self.store.original()
    }

    /// Offerable values for a field's filter widget.
    pub fn filter_options(&self, field: &str) -> &[String] {
        self.options.get(field).map_or(&[], Vec::as_slice)
    }

    pub fn selections(&self) -> &FilterSelections {
        &self.selections
    }

    pub fn active_sort(&self) -> Option<(&str, SortDirection)> {
        self.sort.active()
    }

    pub fn active_filter_count(&self) -> usize {
        self.selections.active_count()
    }

    /// Headline totals over the rows currently in view.
    pub fn summary(&self) -> DatasetSummary {
        summarize(self.store.filtered())
    }

    /// Chart-ready aggregation of the rows currently in view.
    pub fn chart(&self, group_field: &str, measures: &[&str]) -> Aggregation {
        aggregate(self.store.filtered(), group_field, measures)
    }

    // ========================================================================
    // RECOMPUTATION
    // ========================================================================

    /// Full recompute: filtered rows from scratch, active sort reapplied,
    /// filter option lists renarrowed.
    fn refresh(&mut self) {
        let mut rows = self.selections.apply(self.store.original(), &self.search);
        apply_sort(&mut rows, &self.sort);
        log::debug!(
            "view refresh: {} of {} records visible, {} active filters",
            rows.len(),
            self.store.len(),
            self.selections.active_count()
        );
        self.store.set_filtered(rows);
        self.refresh_options();
    }

    /// Renarrows option lists for fields without an active selection; fields
    /// that are self-selected keep their cached list untouched.
    fn refresh_options(&mut self) {
        for field in &self.filter_fields {
            if let Some(options) = self
                .selections
                .narrowed_options(self.store.original(), field)
            {
                self.options.insert(field.clone(), options);
            }
        }
    }
}
