//! Time-indexed table of file change records.

use std::collections::BTreeMap;

use chrono::Datelike;
use loglens_records::{FileChangeRecord, Timestamp};

/// Composite sort key of a change row.
///
/// Calendar fields are taken in the commit's own UTC offset. Field order
/// defines the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeKey {
    pub year: i32,
    /// Quarter of the year, 1-4.
    pub quarter: u32,
    /// Month of the year, 1-12.
    pub month: u32,
    /// Day of the week, Monday = 0 through Sunday = 6.
    pub weekday: u32,
    pub date: Timestamp,
}

impl TimeKey {
    /// Builds the key for a timestamp.
    #[must_use]
    pub fn new(date: Timestamp) -> Self {
        let month = date.month();
        Self {
            year: date.year(),
            quarter: (month - 1) / 3 + 1,
            month,
            weekday: date.weekday().num_days_from_monday(),
            date,
        }
    }
}

/// A change record together with its sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRow {
    /// `None` when the commit date could not be parsed.
    pub key: Option<TimeKey>,
    pub record: FileChangeRecord,
}

impl ChangeRow {
    /// Returns the number of changed lines in this row.
    #[must_use]
    pub fn total_line_count(&self) -> u64 {
        self.record.total_line_count()
    }
}

/// Line totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    pub year: i32,
    pub quarter: u32,
    pub month: u32,
    /// Number of file changes in the month.
    pub changes: usize,
    pub plus_line_count: u64,
    pub minus_line_count: u64,
    pub total_line_count: u64,
}

/// Line totals for one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub author: String,
    pub changes: usize,
    pub plus_line_count: u64,
    pub minus_line_count: u64,
    pub total_line_count: u64,
}

/// File change records sorted by (year, quarter, month, weekday, date).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTable {
    rows: Vec<ChangeRow>,
}

impl ChangeTable {
    /// Builds a sorted table from records.
    ///
    /// Rows without a parseable date sort before all dated rows.
    #[must_use]
    pub fn from_records(records: Vec<FileChangeRecord>) -> Self {
        let rows = records
            .into_iter()
            .map(|record| ChangeRow {
                key: record.date.map(TimeKey::new),
                record,
            })
            .collect();

        let mut table = Self { rows };
        table.sort();
        table
    }

    /// Sorts rows ascending by key. The sort is stable.
    pub fn sort(&mut self) {
        self.rows.sort_by(|a, b| a.key.cmp(&b.key));
    }

    /// Returns the rows in order.
    #[must_use]
    pub fn rows(&self) -> &[ChangeRow] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns per-month totals in chronological order. Undated rows are skipped.
    #[must_use]
    pub fn monthly_summary(&self) -> Vec<PeriodSummary> {
        let mut months: BTreeMap<(i32, u32, u32), PeriodSummary> = BTreeMap::new();

        for row in &self.rows {
            let Some(key) = row.key else { continue };
            let entry = months
                .entry((key.year, key.quarter, key.month))
                .or_insert_with(|| PeriodSummary {
                    year: key.year,
                    quarter: key.quarter,
                    month: key.month,
                    changes: 0,
                    plus_line_count: 0,
                    minus_line_count: 0,
                    total_line_count: 0,
                });
            entry.changes += 1;
            entry.plus_line_count += row.record.plus_line_count;
            entry.minus_line_count += row.record.minus_line_count;
            entry.total_line_count += row.total_line_count();
        }

        months.into_values().collect()
    }

    /// Returns per-author totals, largest total first, ties by name.
    #[must_use]
    pub fn author_summary(&self) -> Vec<AuthorSummary> {
        let mut authors: BTreeMap<&str, AuthorSummary> = BTreeMap::new();

        for row in &self.rows {
            let name = row.record.author_or_empty();
            let entry = authors.entry(name).or_insert_with(|| AuthorSummary {
                author: name.to_string(),
                changes: 0,
                plus_line_count: 0,
                minus_line_count: 0,
                total_line_count: 0,
            });
            entry.changes += 1;
            entry.plus_line_count += row.record.plus_line_count;
            entry.minus_line_count += row.record.minus_line_count;
            entry.total_line_count += row.total_line_count();
        }

        let mut summary: Vec<_> = authors.into_values().collect();
        summary.sort_by(|a, b| b.total_line_count.cmp(&a.total_line_count));
        summary
    }
}
