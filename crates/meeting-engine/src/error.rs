//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid range: start {start}, end {end} (inclusive end: {inclusive})")]
    InvalidRange {
        start: u32,
        end: u32,
        inclusive: bool,
    },

    #[error("Range starting at {start} with duration {duration} overflows the minute counter")]
    RangeOverflow { start: u32, duration: u32 },

    #[error("Invalid clock time: {hours:02}:{minutes:02}")]
    InvalidClockTime { hours: u32, minutes: u32 },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
