//! Parsing of per-commit `git log --numstat` blocks.

use std::sync::LazyLock;

use loglens_records::{FileChangeRecord, parse_git_date};
use regex::Regex;
use tracing::{debug, warn};

/// Separator printed before every commit header.
pub const COMMIT_DELIMITER: &str = "________";

/// Count value git prints for binary files.
const BINARY_MARKER: &str = "-";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"(.+)__(.+)""#).expect("invalid regex"));

/// Author and date taken from a commit header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    /// Commit author name.
    pub author: String,

    /// Commit date exactly as git printed it.
    pub raw_date: String,
}

/// Parses a commit header line of the form `"author__date"`.
///
/// Returns `None` if the line does not match; callers keep going and
/// leave author and date unset on the resulting records.
#[must_use]
pub fn parse_header(line: &str) -> Option<CommitHeader> {
    let captures = HEADER_RE.captures(line)?;
    Some(CommitHeader {
        author: captures.get(1)?.as_str().to_string(),
        raw_date: captures.get(2)?.as_str().to_string(),
    })
}

/// Converts one commit block into one record per changed file.
///
/// The first line is the header; every line containing a tab is a
/// numstat line `additions\tdeletions\tpath`. Other lines are ignored.
#[must_use]
pub fn parse_block(block: &str, project_name: &str) -> Vec<FileChangeRecord> {
    let header_line = block.lines().next().unwrap_or("");
    let header = parse_header(header_line);
    if header.is_none() {
        warn!(
            project = project_name,
            header = header_line,
            "unrecognized commit header, author and date left unset"
        );
    }

    let author = header.as_ref().map(|h| h.author.clone());
    let raw_date = header.as_ref().map(|h| h.raw_date.clone());
    let date = raw_date.as_deref().and_then(parse_git_date);

    block
        .lines()
        .filter(|line| line.contains('\t'))
        .map(|line| {
            let mut fields = line.splitn(3, '\t');
            let plus = parse_count(fields.next().unwrap_or(""));
            let minus = parse_count(fields.next().unwrap_or(""));
            let file = fields.next().unwrap_or("").to_string();

            FileChangeRecord {
                project_name: project_name.to_string(),
                author: author.clone(),
                raw_date: raw_date.clone(),
                date,
                plus_line_count: plus,
                minus_line_count: minus,
                file,
            }
        })
        .collect()
}

fn parse_count(field: &str) -> u64 {
    if field == BINARY_MARKER {
        return 0;
    }
    field.trim().parse().unwrap_or_else(|_| {
        debug!(field, "non-numeric line count treated as zero");
        0
    })
}
