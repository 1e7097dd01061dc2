//! FILENAME: dataset/src/record.rs
//! A flat record from the API payload.
//!
//! Records map field names to primitive values with no schema enforcement.
//! All accessors substitute documented fallbacks instead of exposing
//! missing/null states to callers: `0.0` for numbers, `""` for text, and
//! `"Sem <campo>"` as the grouping/filtering label for an absent category.

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback label for a record that lacks the given categorical field.
/// Such records participate in filtering and grouping as their own distinct
/// category; they are never silently dropped.
pub fn missing_label(field: &str) -> String {
    format!("Sem {}", field)
}

// ============================================================================
// RECORD
// ============================================================================

/// One row of dashboard data: a flat field-name → value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            fields: HashMap::new(),
        }
    }

    /// Raw access; `None` only when the field is absent entirely.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Sets a field value, replacing any previous one.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Numeric reading with the documented fallback: missing or non-numeric
    /// fields read as `0.0`; booleans count 0/1.
    pub fn number(&self, field: &str) -> f64 {
        self.fields
            .get(field)
            .and_then(FieldValue::as_number)
            .unwrap_or(0.0)
    }

    /// Text reading with the documented fallback: missing or non-text fields
    /// read as `""`.
    pub fn text(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .and_then(FieldValue::as_text)
            .unwrap_or("")
    }

    /// Category label for filtering and grouping. A missing or empty field
    /// yields `"Sem <campo>"` so the record stays visible as its own bucket.
    pub fn label(&self, field: &str) -> String {
        match self.fields.get(field) {
            Some(v) if !v.is_empty() => v.display_label(),
            _ => missing_label(field),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
