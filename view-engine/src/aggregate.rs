//! FILENAME: view-engine/src/aggregate.rs
//! Aggregator: group the dataset by one dimension and sum measures per group.
//!
//! Output is chart-ready: labels ordered descending by the first measure's
//! sum (ties keep first-encounter order), parallel value series, and a
//! details map carrying every measure sum plus the member record indices for
//! tooltip/detail display. Results are regenerated fully on every call and
//! never cached across dataset changes.

use dataset::Record;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// GROUP SUMMARY
// ============================================================================

/// Summed measures and member records for one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    /// One sum per requested measure, in request order.
    pub sums: SmallVec<[f64; 4]>,

    /// Indices of the member records within the aggregated slice.
    pub records: Vec<usize>,
}

impl GroupSummary {
    fn new(measure_count: usize) -> Self {
        GroupSummary {
            sums: SmallVec::from_elem(0.0, measure_count),
            records: Vec::new(),
        }
    }

    /// Sum of the primary (first) measure.
    pub fn primary(&self) -> f64 {
        self.sums.first().copied().unwrap_or(0.0)
    }
}

// ============================================================================
// AGGREGATION RESULT
// ============================================================================

/// The chart-ready aggregation of one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Aggregation {
    /// Group labels, descending by the first measure's sum.
    pub labels: Vec<String>,

    /// First-measure sums, parallel to `labels`.
    pub values: Vec<f64>,

    /// Full per-group detail keyed by label.
    pub details: FxHashMap<String, GroupSummary>,
}

impl Aggregation {
    /// Grand total of the primary measure across every group of this
    /// aggregation. Which dataset that covers (filtered or original) is
    /// decided by what the caller aggregated — the denominator is always
    /// explicit in the `Aggregation` value at hand.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// A group's primary-measure share of this aggregation's total, as a
    /// percentage. Zero total (or unknown label) yields 0, never NaN.
    pub fn share_of_total(&self, label: &str) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        self.details
            .get(label)
            .map_or(0.0, |g| g.primary() / total * 100.0)
    }

    pub fn group(&self, label: &str) -> Option<&GroupSummary> {
        self.details.get(label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Groups `records` by `group_field` and sums `measures` per group.
///
/// Records missing the group field land in the `"Sem <campo>"` bucket;
/// missing or non-numeric measure values contribute 0 to their sums. The
/// invariant: each measure's sums across all groups equal the record-wise
/// sum over the input, with no drops and no double counting.
pub fn aggregate(records: &[Record], group_field: &str, measures: &[&str]) -> Aggregation {
    let mut order: Vec<String> = Vec::new();
    let mut groups: FxHashMap<String, GroupSummary> = FxHashMap::default();

    for (index, record) in records.iter().enumerate() {
        let label = record.label(group_field);
        let summary = groups.entry(label.clone()).or_insert_with(|| {
            order.push(label);
            GroupSummary::new(measures.len())
        });
        for (mi, measure) in measures.iter().enumerate() {
            summary.sums[mi] += record.number(measure);
        }
        summary.records.push(index);
    }

    // Descending by primary measure; stable sort keeps encounter order for
    // ties.
    order.sort_by(|a, b| {
        let pa = groups[a].primary();
        let pb = groups[b].primary();
        pb.partial_cmp(&pa).unwrap_or(std::cmp::Ordering::Equal)
    });

    let values = order.iter().map(|label| groups[label].primary()).collect();

    Aggregation {
        labels: order,
        values,
        details: groups,
    }
}

// ============================================================================
// TESTS
// ============================================================================
