//! Immutable half-open time ranges measured in minutes since midnight.
//!
//! A [`TimeRange`] covers `[start, start + duration)`. The end is exclusive, so
//! a range ending at 10:00 and one starting at 10:00 touch but do not overlap.
//! A single day spans `[START_OF_DAY, END_OF_DAY)` = `[0, 1440)`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Exclusive end of the day (24 * 60).
pub const END_OF_DAY: u32 = 24 * 60;

/// A span of time within a day.
///
/// Ordering is by `start` ascending, with ties broken by the shorter duration
/// first. Equality is structural over `(start, duration)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    duration: u32,
}

/// Unchecked wire form; validated through [`TimeRange::checked`].
#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    duration: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = ScheduleError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        Self::checked(raw.start, raw.duration)
    }
}

impl TimeRange {
    /// The whole day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        duration: END_OF_DAY - START_OF_DAY,
    };

    /// Create a range starting at `start` lasting `duration` minutes, rejecting
    /// ranges whose end does not fit in a `u32`.
    ///
    /// # Errors
    /// Returns `ScheduleError::RangeOverflow` if `start + duration` overflows.
    pub fn checked(start: u32, duration: u32) -> Result<Self> {
        match start.checked_add(duration) {
            Some(_) => Ok(Self { start, duration }),
            None => Err(ScheduleError::RangeOverflow { start, duration }),
        }
    }

    /// Create a range starting at `start` lasting `duration` minutes.
    ///
    /// The caller guarantees `start + duration` fits in a `u32`; see
    /// [`TimeRange::checked`] for untrusted input.
    pub const fn from_start_duration(start: u32, duration: u32) -> Self {
        Self { start, duration }
    }

    /// Create a range from `start` to `end`.
    ///
    /// When `inclusive_end` is true the minute `end` itself is part of the range,
    /// i.e. `duration = end - start + 1`.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidRange` if the resulting duration would be
    /// negative (or does not fit in a `u32`), and `ScheduleError::RangeOverflow`
    /// if the exclusive end does not fit in a `u32`.
    pub fn from_start_end(start: u32, end: u32, inclusive_end: bool) -> Result<Self> {
        let duration = i64::from(end) - i64::from(start) + i64::from(inclusive_end);
        let duration = u32::try_from(duration).map_err(|_| ScheduleError::InvalidRange {
            start,
            end,
            inclusive: inclusive_end,
        })?;
        Self::checked(start, duration)
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// Exclusive end of the range.
    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.duration)
    }

    pub const fn is_empty(&self) -> bool {
        self.duration == 0
    }

    /// True if `minute` falls in `[start, end)`. An empty range contains nothing.
    pub fn contains_point(&self, minute: u32) -> bool {
        !self.is_empty() && self.start <= minute && minute < self.end()
    }

    /// True if `other` lies entirely within this range, bounds inclusive.
    ///
    /// Equal ranges contain each other. A zero-duration `other` is treated as a
    /// point; a zero-duration `self` contains nothing.
    pub fn contains(&self, other: &TimeRange) -> bool {
        if self.is_empty() {
            return false;
        }
        if other.is_empty() {
            return self.contains_point(other.start);
        }
        // Last minute covered by `other`.
        let other_last = other.end() - 1;
        self.contains_point(other.start) && self.contains_point(other_last)
    }

    /// True if one range's start lies inside the other.
    ///
    /// ```text
    /// |---|            |---|         |---------|
    ///    |---|             |---|        |---|
    /// overlaps         no overlap    overlaps
    /// ```
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.contains_point(other.start) || other.contains_point(self.start)
    }

    /// True if the two ranges share a boundary (`a.end == b.start` or vice versa).
    pub fn touches(&self, other: &TimeRange) -> bool {
        self.end() == other.start || other.end() == self.start
    }

    /// The smallest range covering both, if they overlap or touch.
    ///
    /// Returns `None` for ranges separated by a gap.
    pub fn merge(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) && !self.touches(other) {
            return None;
        }
        let start = self.start.min(other.start);
        let end = self.end().max(other.end());
        Some(Self::from_start_duration(start, end - start))
    }

    /// The shared region `[max(start), min(end))`, if the ranges overlap.
    ///
    /// When one range contains the other this is the contained range.
    pub fn intersect(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        let start = self.start.max(other.start);
        let end = self.end().min(other.end());
        Some(Self::from_start_duration(start, end - start))
    }

    /// True if the range lasts at least `duration` minutes.
    pub fn has_enough_time(&self, duration: i64) -> bool {
        i64::from(self.duration) >= duration
    }

    /// Compare by start ascending, shorter duration first on ties.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.cmp(b)
    }

    /// Compare by exclusive end ascending.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end().cmp(&b.end())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// Keep only the ranges lasting at least `duration` minutes, preserving order.
pub fn long_enough(ranges: &[TimeRange], duration: i64) -> Vec<TimeRange> {
    ranges
        .iter()
        .filter(|r| r.has_enough_time(duration))
        .copied()
        .collect()
}

/// Convert a wall-clock time to minutes since midnight.
///
/// # Errors
/// Returns `ScheduleError::InvalidClockTime` unless `hours` is 0..=23 and
/// `minutes` is 0..=59.
pub fn clock_minutes(hours: u32, minutes: u32) -> Result<u32> {
    if hours >= 24 || minutes >= 60 {
        return Err(ScheduleError::InvalidClockTime { hours, minutes });
    }
    Ok(hours * 60 + minutes)
}
