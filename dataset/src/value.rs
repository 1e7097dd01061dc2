//! FILENAME: dataset/src/value.rs
//! Primitive field values.
//!
//! Records are schema-less: every field holds one of these primitives, as
//! delivered by the JSON payload. The variants carry a total cross-type
//! ordering so that sorting and option lists stay deterministic even when a
//! column mixes kinds: Empty < Number < Text < Boolean.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A single primitive value from the API payload.
/// JSON `null` (and absent fields, by convention) map to `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    Empty,
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Empty
    }
}

impl FieldValue {
    /// Returns the numeric reading of this value.
    /// Booleans count as 0/1 (the backend encodes `Pendência` and
    /// `Usuário Alocado` that way before aggregation); text and empty
    /// values read as `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            FieldValue::Text(_) | FieldValue::Empty => None,
        }
    }

    /// Returns the text reading of this value, or `None` for non-text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for `Empty` and for blank text.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Display label for grouping and filter option lists.
    /// Numbers drop a trailing `.0` so `10.0` reads as `"10"`, matching how
    /// the payload's integer-valued fields are shown.
    pub fn display_label(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }

    /// Total ordering across value kinds: Empty < Number < Text < Boolean.
    /// Within a kind: numeric order, case-sensitive text order, false < true.
    /// NaN compares equal to everything numeric (never panics).
    pub fn compare(a: &FieldValue, b: &FieldValue) -> Ordering {
        match (a, b) {
            (FieldValue::Empty, FieldValue::Empty) => Ordering::Equal,
            (FieldValue::Empty, _) => Ordering::Less,
            (_, FieldValue::Empty) => Ordering::Greater,

            (FieldValue::Number(na), FieldValue::Number(nb)) => {
                na.partial_cmp(nb).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Number(_), _) => Ordering::Less,
            (_, FieldValue::Number(_)) => Ordering::Greater,

            (FieldValue::Text(ta), FieldValue::Text(tb)) => ta.cmp(tb),
            (FieldValue::Text(_), _) => Ordering::Less,
            (_, FieldValue::Text(_)) => Ordering::Greater,

            (FieldValue::Boolean(ba), FieldValue::Boolean(bb)) => ba.cmp(bb),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

// ============================================================================
// TESTS
// ============================================================================
