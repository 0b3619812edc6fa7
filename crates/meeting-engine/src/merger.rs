//! Coalesce overlapping or touching intervals into a minimal disjoint set.
//!
//! Sorts by start (shorter first on ties), then sweeps left to right folding
//! every interval that overlaps or touches the current one. This is the only
//! place intervals are coalesced; busy sets for mandatory and optional
//! attendees both go through [`merge`].

use crate::time_range::TimeRange;

/// Merge `intervals` into a sorted sequence of pairwise disjoint ranges.
///
/// Touching ranges (`a.end == b.start`) are folded together, so no two output
/// ranges share a boundary. Zero-duration ranges occupy no time and are
/// dropped. Empty input yields empty output.
pub fn merge(intervals: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted: Vec<TimeRange> = intervals
        .iter()
        .filter(|r| !r.is_empty())
        .copied()
        .collect();
    sorted.sort_by(TimeRange::order_by_start);

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return merged;
    };

    for next in iter {
        match current.merge(&next) {
            Some(folded) => current = folded,
            None => {
                merged.push(current);
                current = next;
            }
        }
    }
    merged.push(current);

    merged
}
