//! FILENAME: view-engine/src/sort.rs
//! Comparator sort: one active column at a time, ascending/descending.
//!
//! Two derived columns are computed on the fly and never stored on the
//! record: `Total` (separated + remaining lines) and `Progresso` (completion
//! percent, 0 when the total is 0). String columns compare lowercased;
//! missing values fall into the `Empty` bucket of the cross-kind ordering so
//! nothing null-ish ever reaches the comparator.

use crate::fields;
use dataset::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// SORT STATE
// ============================================================================

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Tracks the single active sort column and its direction.
/// Requesting the active column again flips the direction; requesting a new
/// column replaces it and resets to ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortState {
    column: Option<String>,
    direction: Option<SortDirection>,
}

impl SortState {
    pub fn new() -> Self {
        SortState::default()
    }

    /// Registers a header click and returns the direction now in effect.
    pub fn request(&mut self, column: &str) -> SortDirection {
        let direction = match (&self.column, self.direction) {
            (Some(active), Some(dir)) if active == column => dir.flipped(),
            _ => SortDirection::Ascending,
        };
        self.column = Some(column.to_string());
        self.direction = Some(direction);
        direction
    }

    pub fn active(&self) -> Option<(&str, SortDirection)> {
        match (&self.column, self.direction) {
            (Some(col), Some(dir)) => Some((col.as_str(), dir)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.column = None;
        self.direction = None;
    }
}

// ============================================================================
// COMPARATOR
// ============================================================================

/// Derived total lines for a record.
pub fn record_total(record: &Record) -> f64 {
    record.number(fields::SEPARATED_LINES) + record.number(fields::REMAINING_LINES)
}

/// Sort key for one record and column. Derived columns always yield numbers;
/// raw text lowercases for case-insensitive comparison.
fn sort_key(record: &Record, column: &str) -> FieldValue {
    if column == fields::COLUMN_TOTAL {
        return FieldValue::Number(record_total(record));
    }
    if column == fields::COLUMN_PROGRESS {
        let total = record_total(record);
        let percent = if total > 0.0 {
            record.number(fields::SEPARATED_LINES) / total * 100.0
        } else {
            0.0
        };
        return FieldValue::Number(percent);
    }

    match record.get(column) {
        Some(FieldValue::Text(s)) => FieldValue::Text(s.to_lowercase()),
        Some(v @ (FieldValue::Number(_) | FieldValue::Boolean(_))) => v.clone(),
        Some(FieldValue::Empty) | None => FieldValue::Empty,
    }
}

/// Sorts the records in place by the given column and direction.
///
/// `sort_by` is stable, and descending order reverses the comparator rather
/// than the slice, so records with equal keys keep their relative order from
/// the input in both directions.
pub fn sort_records(records: &mut [Record], column: &str, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ka = sort_key(a, column);
        let kb = sort_key(b, column);
        match direction {
            SortDirection::Ascending => FieldValue::compare(&ka, &kb),
            SortDirection::Descending => FieldValue::compare(&kb, &ka),
        }
    });
}

/// Convenience wrapper applying the active sort, if any.
pub fn apply_sort(records: &mut [Record], state: &SortState) {
    if let Some((column, direction)) = state.active() {
        sort_records(records, column, direction);
    }
}

/// Ascending comparison of two records on one column.
pub fn compare_columns(a: &Record, b: &Record, column: &str) -> Ordering {
    FieldValue::compare(&sort_key(a, column), &sort_key(b, column))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_toggles_same_column() {
        let mut state = SortState::new();
        assert_eq!(state.request("Setor"), SortDirection::Ascending);
        assert_eq!(state.request("Setor"), SortDirection::Descending);
        assert_eq!(state.request("Setor"), SortDirection::Ascending);
    }

    #[test]
    fn request_resets_new_column_to_ascending() {
        let mut state = SortState::new();
        state.request("Setor");
        state.request("Setor"); // now descending
        assert_eq!(state.request("Meta"), SortDirection::Ascending);
        assert_eq!(state.active().unwrap().0, "Meta");
    }

    #[test]
    fn progress_of_zero_total_is_zero() {
        let r = Record::new();
        assert_eq!(
            sort_key(&r, fields::COLUMN_PROGRESS),
            FieldValue::Number(0.0)
        );
    }

    #[test]
    fn text_keys_compare_case_insensitively() {
        let mut a = Record::new();
        a.set("Setor", "armi-2");
        let mut b = Record::new();
        b.set("Setor", "ARMI-3");
        assert_eq!(compare_columns(&a, &b, "Setor"), Ordering::Less);
    }
}
