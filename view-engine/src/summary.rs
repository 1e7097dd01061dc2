//! FILENAME: view-engine/src/summary.rs
//! Summary statistics for the dashboard's stat cards and detail modals:
//! dataset totals, per-record progress bands, and the pending-work view.

use crate::fields;
use crate::sort::record_total;
use dataset::Record;
use serde::Serialize;

// ============================================================================
// DATASET SUMMARY
// ============================================================================

/// The headline numbers of one dataset: the stat-card row of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Number of records (sectors) in view.
    pub sectors: usize,
    pub separated_lines: f64,
    pub remaining_lines: f64,
    /// Overall completion percent; 0 when there are no lines at all.
    pub percent_complete: f64,
}

/// Computes the headline totals. An empty dataset yields all zeros so the
/// caller renders an explicit zero state rather than blanks.
pub fn summarize(records: &[Record]) -> DatasetSummary {
    let separated: f64 = records
        .iter()
        .map(|r| r.number(fields::SEPARATED_LINES))
        .sum();
    let remaining: f64 = records
        .iter()
        .map(|r| r.number(fields::REMAINING_LINES))
        .sum();
    let total = separated + remaining;

    DatasetSummary {
        sectors: records.len(),
        separated_lines: separated,
        remaining_lines: remaining,
        percent_complete: if total > 0.0 {
            separated / total * 100.0
        } else {
            0.0
        },
    }
}

// ============================================================================
// PROGRESS CLASSIFICATION
// ============================================================================

/// Status band for a record's completion percent, driving the table's
/// status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressBand {
    /// >= 80%
    High,
    /// >= 50%
    Medium,
    /// below 50%
    Low,
}

pub fn progress_band(percent: f64) -> ProgressBand {
    if percent >= 80.0 {
        ProgressBand::High
    } else if percent >= 50.0 {
        ProgressBand::Medium
    } else {
        ProgressBand::Low
    }
}

/// Completion percent of one record; 0 when it has no lines.
pub fn record_progress(record: &Record) -> f64 {
    let total = record_total(record);
    if total > 0.0 {
        record.number(fields::SEPARATED_LINES) / total * 100.0
    } else {
        0.0
    }
}

// ============================================================================
// PENDING WORK
// ============================================================================

/// Priority of a sector's outstanding work, by remaining line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    /// more than 50 remaining lines
    High,
    /// more than 20 remaining lines
    Medium,
    /// everything else
    Low,
}

pub fn priority_for(remaining_lines: f64) -> Priority {
    if remaining_lines > 50.0 {
        Priority::High
    } else if remaining_lines > 20.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Sectors with any outstanding work (lines, weight, containers, or items),
/// ordered descending by remaining lines. An empty result means every
/// sector is done — the caller shows the celebration state.
pub fn pending_sectors(records: &[Record]) -> Vec<Record> {
    let mut pending: Vec<Record> = records
        .iter()
        .filter(|r| {
            r.number(fields::REMAINING_LINES) > 0.0
                || r.number(fields::REMAINING_WEIGHT) > 0.0
                || r.number(fields::REMAINING_CONTAINERS) > 0.0
                || r.number(fields::REMAINING_ITEMS) > 0.0
        })
        .cloned()
        .collect();

    pending.sort_by(|a, b| {
        let ra = a.number(fields::REMAINING_LINES);
        let rb = b.number(fields::REMAINING_LINES);
        rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
    });

    pending
}

// ============================================================================
// TESTS
// ============================================================================
