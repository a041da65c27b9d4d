//! Timestamp helpers shared by every record kind.

use chrono::{DateTime, FixedOffset};

/// A point in time with its original UTC offset preserved.
pub type Timestamp = DateTime<FixedOffset>;

/// Date layout emitted by `git log --date=iso`.
pub const GIT_ISO_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A row that carries the timestamp used as the cache watermark.
pub trait Timestamped {
    /// Returns the row's creation time.
    fn timestamp(&self) -> Timestamp;
}

/// Parses a date in the `git log --date=iso` layout
/// (e.g. `2018-09-28 18:23:31 +0900`).
///
/// Returns `None` when the text does not match.
#[must_use]
pub fn parse_git_date(text: &str) -> Option<Timestamp> {
    DateTime::parse_from_str(text.trim(), GIT_ISO_DATE_FORMAT).ok()
}

/// Returns the maximum timestamp among the rows, if any.
#[must_use]
pub fn watermark<R: Timestamped>(rows: &[R]) -> Option<Timestamp> {
    rows.iter().map(Timestamped::timestamp).max()
}
