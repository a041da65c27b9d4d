//! Summaries of remote extraction results.

use std::collections::BTreeMap;
use std::fmt;

use loglens_records::{CommitSummary, ReviewComment};

/// Review comment counts, overall and per reviewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Number of comments.
    pub comments: usize,
    /// `(reviewer id, comment count)`, most active reviewer first.
    pub by_reviewer: Vec<(u64, usize)>,
}

impl ReviewSummary {
    /// Counts the given comments.
    #[must_use]
    pub fn from_comments(comments: &[ReviewComment]) -> Self {
        let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
        for comment in comments {
            *counts.entry(comment.reviewer_id).or_default() += 1;
        }

        let mut by_reviewer: Vec<_> = counts.into_iter().collect();
        by_reviewer.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            comments: comments.len(),
            by_reviewer,
        }
    }
}

impl fmt::Display for ReviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} review comments", self.comments)?;
        if self.by_reviewer.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "By reviewer:")?;
        for (reviewer_id, count) in &self.by_reviewer {
            writeln!(f, "  {reviewer_id}: {count}")?;
        }
        Ok(())
    }
}

/// Line totals of one commit author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorTotals {
    pub author_name: String,
    pub commits: usize,
    pub total: u64,
}

/// Commit and line totals, overall and per author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitTotals {
    pub commits: usize,
    pub additions: u64,
    pub deletions: u64,
    pub total: u64,
    /// Largest line total first.
    pub by_author: Vec<AuthorTotals>,
}

impl CommitTotals {
    /// Sums the given commit summaries.
    #[must_use]
    pub fn from_summaries(summaries: &[CommitSummary]) -> Self {
        let mut authors: BTreeMap<&str, AuthorTotals> = BTreeMap::new();
        for summary in summaries {
            let entry = authors
                .entry(summary.author_name.as_str())
                .or_insert_with(|| AuthorTotals {
                    author_name: summary.author_name.clone(),
                    commits: 0,
                    total: 0,
                });
            entry.commits += 1;
            entry.total += summary.total;
        }

        let mut by_author: Vec<_> = authors.into_values().collect();
        by_author.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            commits: summaries.len(),
            additions: summaries.iter().map(|s| s.additions).sum(),
            deletions: summaries.iter().map(|s| s.deletions).sum(),
            total: summaries.iter().map(|s| s.total).sum(),
            by_author,
        }
    }
}

impl fmt::Display for CommitTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} commits, +{} -{}, {} lines",
            self.commits, self.additions, self.deletions, self.total
        )?;
        if self.by_author.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "By author:")?;
        for author in &self.by_author {
            writeln!(
                f,
                "  {}: {} commits, {} lines",
                author.author_name, author.commits, author.total
            )?;
        }
        Ok(())
    }
}
