//! FILENAME: view-engine/src/lib.rs
//! View engine for the Sincronismo dashboard.
//!
//! This crate turns a loaded dataset into the filtered, sorted, and
//! aggregated views the presentation layer renders. Everything here is pure
//! recomputation over the current inputs: no DOM concerns, no incremental
//! state transitions, no async.
//!
//! Layers:
//! - `fields`: Well-known field and derived-column names
//! - `filter`: Multi-select predicate filter + free-text search
//! - `sort`: Single-column comparator sort with derived columns
//! - `aggregate`: Group-by with summed measures for charts
//! - `summary`: Dataset totals and progress/priority classification
//! - `export`: CSV export of the current dataset
//! - `view`: Table-view orchestrator tying the pieces together

pub mod aggregate;
pub mod export;
pub mod fields;
pub mod filter;
pub mod sort;
pub mod summary;
pub mod view;

pub use aggregate::{aggregate, Aggregation, GroupSummary};
pub use export::{export_csv, ExportError};
pub use filter::{FilterSelections, SearchQuery};
pub use sort::{sort_records, SortDirection, SortState};
pub use summary::{
    pending_sectors, progress_band, record_progress, summarize, DatasetSummary, Priority,
    ProgressBand,
};
pub use view::TableView;
