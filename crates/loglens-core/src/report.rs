//! Local repository report.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use loglens_git::{ChangeTable, commit_log_records_in, commit_log_records_under};
use loglens_records::FileChangeRecord;
use tracing::info;

use crate::CoreResult;

/// Per-file change statistics of local repositories, with monthly and
/// per-author totals when displayed.
#[derive(Debug, Clone)]
pub struct LocalReport {
    table: ChangeTable,
}

impl LocalReport {
    /// Builds a report from already extracted records.
    #[must_use]
    pub fn from_records(records: Vec<FileChangeRecord>) -> Self {
        Self {
            table: ChangeTable::from_records(records),
        }
    }

    /// Builds a report for a single repository.
    ///
    /// A path that is not a repository yields an empty report.
    pub fn for_repository(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let report = Self::from_records(commit_log_records_in(path));
        info!(path = %path.display(), rows = report.table.len(), "built local report");
        report
    }

    /// Builds a report over every repository directly under `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_dir` cannot be listed.
    pub fn for_repositories_under(base_dir: impl AsRef<Path>) -> CoreResult<Self> {
        let base_dir = base_dir.as_ref();
        let report = Self::from_records(commit_log_records_under(base_dir)?);
        info!(
            base_dir = %base_dir.display(),
            rows = report.table.len(),
            projects = report.project_count(),
            "built local report"
        );
        Ok(report)
    }

    /// Returns the sorted change table.
    #[must_use]
    pub fn table(&self) -> &ChangeTable {
        &self.table
    }

    /// Returns the number of distinct projects in the report.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.table
            .rows()
            .iter()
            .map(|row| row.record.project_name.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

impl fmt::Display for LocalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.table.is_empty() {
            return writeln!(f, "No file changes found.");
        }

        writeln!(
            f,
            "{} file changes across {} projects",
            self.table.len(),
            self.project_count()
        )?;

        writeln!(f)?;
        writeln!(f, "By month:")?;
        for month in self.table.monthly_summary() {
            writeln!(
                f,
                "  {}-{:02} (Q{}): {} changes, +{} -{}, {} lines",
                month.year,
                month.month,
                month.quarter,
                month.changes,
                month.plus_line_count,
                month.minus_line_count,
                month.total_line_count
            )?;
        }

        writeln!(f)?;
        writeln!(f, "By author:")?;
        for author in self.table.author_summary() {
            let name = if author.author.is_empty() {
                "(unknown)"
            } else {
                author.author.as_str()
            };
            writeln!(
                f,
                "  {name}: {} changes, +{} -{}, {} lines",
                author.changes,
                author.plus_line_count,
                author.minus_line_count,
                author.total_line_count
            )?;
        }

        Ok(())
    }
}
