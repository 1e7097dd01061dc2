//! FILENAME: view-engine/src/filter.rs
//! Predicate filter: multi-select field filters plus free-text search.
//!
//! Filtering is a pure function of `(records, selections, search)`: the same
//! inputs always produce the same output. Constraints combine as a logical
//! AND across fields and a logical OR within one field's selected values. A
//! field with an empty selection does not constrain the result at all — the
//! widget is rendered but untouched, which is different from "restricted to
//! nothing".

use crate::fields;
use dataset::Record;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// SEARCH QUERY
// ============================================================================

/// Free-text search over a fixed list of text fields.
/// Matching is a case-insensitive substring test (lowercasing only; text is
/// compared as authored, diacritics included).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    term: String,
    fields: Vec<String>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            term: String::new(),
            fields: fields::DEFAULT_SEARCH_FIELDS
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl SearchQuery {
    pub fn new(fields: Vec<String>) -> Self {
        SearchQuery {
            term: String::new(),
            fields,
        }
    }

    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_string();
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// A blank (or whitespace-only) term matches everything.
    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if !self.is_active() {
            return true;
        }
        let needle = self.term.trim().to_lowercase();
        self.fields
            .iter()
            .any(|field| record.text(field).to_lowercase().contains(&needle))
    }
}

// ============================================================================
// FILTER SELECTIONS
// ============================================================================

/// Per-field sets of accepted category labels.
/// Values are matched against `Record::label`, so records missing a field
/// participate under their `"Sem <campo>"` bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSelections {
    selected: FxHashMap<String, Vec<String>>,
}

impl FilterSelections {
    pub fn new() -> Self {
        FilterSelections::default()
    }

    /// Replaces the selection for a field. An empty list removes the
    /// constraint entirely.
    pub fn set(&mut self, field: impl Into<String>, values: Vec<String>) {
        let field = field.into();
        if values.is_empty() {
            self.selected.remove(&field);
        } else {
            self.selected.insert(field, values);
        }
    }

    /// Adds or removes one value from a field's selection.
    pub fn toggle(&mut self, field: &str, value: &str) {
        let values = self.selected.entry(field.to_string()).or_default();
        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
        } else {
            values.push(value.to_string());
        }
        if self.selected.get(field).is_some_and(Vec::is_empty) {
            self.selected.remove(field);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn clear_field(&mut self, field: &str) {
        self.selected.remove(field);
    }

    /// Whether a field currently constrains the result.
    pub fn is_active(&self, field: &str) -> bool {
        self.selected.get(field).is_some_and(|v| !v.is_empty())
    }

    pub fn selected(&self, field: &str) -> &[String] {
        self.selected.get(field).map_or(&[], Vec::as_slice)
    }

    /// Number of fields with an active selection.
    pub fn active_count(&self) -> usize {
        self.selected.values().filter(|v| !v.is_empty()).count()
    }

    /// True when the record passes every active field constraint.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_except(record, None)
    }

    fn matches_except(&self, record: &Record, skip: Option<&str>) -> bool {
        self.selected.iter().all(|(field, values)| {
            if values.is_empty() || skip == Some(field.as_str()) {
                return true;
            }
            let label = record.label(field);
            values.iter().any(|v| v == &label)
        })
    }

    /// Computes the filtered dataset: records passing the search and all
    /// active selections, in original order.
    pub fn apply(&self, records: &[Record], search: &SearchQuery) -> Vec<Record> {
        records
            .iter()
            .filter(|r| search.matches(r) && self.matches(r))
            .cloned()
            .collect()
    }

    /// Offerable values for a field's selector, narrowed by the *other*
    /// active filters.
    ///
    /// Returns `None` when the field has its own active selection: the
    /// source deliberately leaves such a selector's option list untouched
    /// rather than pruning an already-made choice. For an unselected field
    /// the options are the distinct labels of that field within the dataset
    /// filtered by every other constraint, sorted ascending.
    pub fn narrowed_options(&self, records: &[Record], field: &str) -> Option<Vec<String>> {
        if self.is_active(field) {
            return None;
        }

        let mut options: Vec<String> = Vec::new();
        for record in records {
            if !self.matches_except(record, Some(field)) {
                continue;
            }
            let label = record.label(field);
            if !options.contains(&label) {
                options.push(label);
            }
        }
        options.sort();
        Some(options)
    }
}

// ============================================================================
// TESTS
// ============================================================================
