//! Invert merged busy intervals into the free slots of the day.

use crate::time_range::TimeRange;

/// Free slots of the whole day, given disjoint start-sorted busy intervals.
///
/// Returns the leading gap before the first busy interval, every gap between
/// neighbours, and the trailing gap after the last one, skipping empty gaps.
/// No busy intervals means the whole day is free.
///
/// The input is expected to be the output of [`crate::merger::merge`].
pub fn invert(busy: &[TimeRange]) -> Vec<TimeRange> {
    invert_within(busy, TimeRange::WHOLE_DAY)
}

/// Free slots within `window`, given disjoint start-sorted busy intervals.
///
/// Busy intervals are clipped to the window; intervals entirely outside it are
/// ignored.
pub fn invert_within(busy: &[TimeRange], window: TimeRange) -> Vec<TimeRange> {
    let mut free = Vec::with_capacity(busy.len() + 1);
    let mut cursor = window.start();

    for interval in busy {
        let busy_start = interval.start().max(window.start());
        let busy_end = interval.end().min(window.end());
        if busy_start >= busy_end {
            continue;
        }
        if cursor < busy_start {
            free.push(TimeRange::from_start_duration(cursor, busy_start - cursor));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing free slot after the last busy period.
    if cursor < window.end() {
        free.push(TimeRange::from_start_duration(cursor, window.end() - cursor));
    }

    free
}
