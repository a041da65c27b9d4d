//! Aggregation of file change records across repositories.

use std::path::Path;

use loglens_records::FileChangeRecord;
use tracing::{debug, info, warn};

use crate::log_parser::{COMMIT_DELIMITER, parse_block};
use crate::{GitResult, Repository};

/// Splits raw numstat log output into commit blocks and parses each of them.
///
/// The fragment before the first delimiter is always empty and is dropped.
#[must_use]
pub fn records_from_log(log: &str, project_name: &str) -> Vec<FileChangeRecord> {
    log.split(COMMIT_DELIMITER)
        .skip(1)
        .flat_map(|block| parse_block(block, project_name))
        .collect()
}

/// Returns the file change records of every non-merge commit in the repository at `path`.
///
/// A path that is not a repository, or whose log cannot be read, yields an
/// empty list instead of an error.
pub fn commit_log_records_in(path: impl AsRef<Path>) -> Vec<FileChangeRecord> {
    let path = path.as_ref();

    let repo = match Repository::open(path) {
        Ok(repo) => repo,
        Err(e) => {
            debug!(?path, "skipping: {e}");
            return Vec::new();
        }
    };

    let log = match repo.numstat_log() {
        Ok(log) => log,
        Err(e) => {
            warn!(?path, "could not read commit log: {e}");
            return Vec::new();
        }
    };

    let project_name = repo.project_name();
    let records = records_from_log(&log, &project_name);
    info!(project = %project_name, records = records.len(), "collected commit log");
    records
}

/// Returns the concatenated file change records of every repository directly under `base_dir`.
///
/// Sub-directories, including symlinks to directories, are visited in name
/// order. Non-repository directories contribute nothing.
///
/// # Errors
///
/// Returns an error if `base_dir` cannot be listed.
pub fn commit_log_records_under(base_dir: impl AsRef<Path>) -> GitResult<Vec<FileChangeRecord>> {
    let base_dir = base_dir.as_ref();
    debug!(?base_dir, "scanning for repositories");

    let mut sub_dirs = Vec::new();
    for entry in std::fs::read_dir(base_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            sub_dirs.push(path);
        }
    }
    sub_dirs.sort();

    Ok(sub_dirs.iter().flat_map(commit_log_records_in).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::{commit_files, init_repo};
    use tempfile::TempDir;

    #[test]
    fn test_records_from_log() {
        let log = "________\"alice__2020-01-01 00:00:00 +0000\"\n\n10\t2\tfoo.txt\n-\t-\tbinary.png\n\
                   ________\"bob__2020-01-02 00:00:00 +0000\"\n\n1\t1\tbar.txt\n";
        let records = records_from_log(log, "demo");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].author.as_deref(), Some("alice"));
        assert_eq!(records[1].file, "binary.png");
        assert_eq!(records[2].author.as_deref(), Some("bob"));
    }

    #[test]
    fn test_records_from_empty_log() {
        assert!(records_from_log("", "demo").is_empty());
    }

    #[test]
    fn test_records_in_repository() {
        let temp_dir = TempDir::new().unwrap();
        let repo_dir = temp_dir.path().join("demo");
        let repo = init_repo(&repo_dir);
        commit_files(&repo, &[("a.txt", "1\n2\n3\n")], "alice", 1_577_836_800, "first");
        commit_files(
            &repo,
            &[("a.txt", "1\n2\n"), ("b.txt", "x\n")],
            "bob",
            1_577_923_200,
            "second",
        );

        let records = commit_log_records_in(&repo_dir);

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.project_name == "demo"));
        let alice: Vec<_> = records
            .iter()
            .filter(|r| r.author.as_deref() == Some("alice"))
            .collect();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].plus_line_count, 3);
        assert_eq!(alice[0].raw_date.as_deref(), Some("2020-01-01 00:00:00 +0000"));

        let bob_a = records
            .iter()
            .find(|r| r.author.as_deref() == Some("bob") && r.file == "a.txt")
            .unwrap();
        assert_eq!(bob_a.plus_line_count, 0);
        assert_eq!(bob_a.minus_line_count, 1);
    }

    #[test]
    fn test_records_skip_merge_commits() {
        let temp_dir = TempDir::new().unwrap();
        let repo = init_repo(temp_dir.path());
        let base = commit_files(&repo, &[("a.txt", "a\n")], "alice", 1_577_836_800, "base");
        let main_tip = commit_files(&repo, &[("b.txt", "b\n")], "alice", 1_577_840_000, "main");

        // Build a side commit on top of base, then merge it into main.
        let base_commit = repo.find_commit(base).unwrap();
        let sig = git2::Signature::new("carol", "c@example.com", &git2::Time::new(1_577_850_000, 0))
            .unwrap();
        let blob = repo.blob(b"c\n").unwrap();
        let mut builder = repo.treebuilder(Some(&base_commit.tree().unwrap())).unwrap();
        builder.insert("c.txt", blob, 0o100_644).unwrap();
        let side_tree = repo.find_tree(builder.write().unwrap()).unwrap();
        let side = repo
            .commit(None, &sig, &sig, "side", &side_tree, &[&base_commit])
            .unwrap();

        let mut index = repo.index().unwrap();
        std::fs::write(temp_dir.path().join("c.txt"), "c\n").unwrap();
        index.add_path(Path::new("c.txt")).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let side_commit = repo.find_commit(side).unwrap();
        let main_commit = repo.find_commit(main_tip).unwrap();
        repo.commit(
            Some("HEAD"),
            &sig,
            &sig,
            "Merge side",
            &tree,
            &[&main_commit, &side_commit],
        )
        .unwrap();

        let records = commit_log_records_in(temp_dir.path());
        let files: Vec<_> = records.iter().map(|r| r.file.as_str()).collect();

        // base, main and side each touch one file; the merge is filtered out.
        assert_eq!(records.len(), 3);
        assert!(files.contains(&"a.txt"));
        assert!(files.contains(&"b.txt"));
        assert!(files.contains(&"c.txt"));
    }

    #[test]
    fn test_records_in_non_repository() {
        let temp_dir = TempDir::new().unwrap();
        assert!(commit_log_records_in(temp_dir.path()).is_empty());
        assert!(commit_log_records_in("/nonexistent/path").is_empty());
    }

    #[test]
    fn test_records_in_repository_without_commits() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        assert!(commit_log_records_in(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_records_under_base_dir() {
        let temp_dir = TempDir::new().unwrap();

        let first = init_repo(&temp_dir.path().join("alpha"));
        commit_files(&first, &[("a.txt", "a\n")], "alice", 1_577_836_800, "a");

        std::fs::create_dir(temp_dir.path().join("not-a-repo")).unwrap();
        std::fs::write(temp_dir.path().join("loose-file.txt"), "x").unwrap();

        let second = init_repo(&temp_dir.path().join("beta"));
        commit_files(&second, &[("b.txt", "b\nb\n")], "bob", 1_577_836_800, "b");

        let records = commit_log_records_under(temp_dir.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].project_name, "alpha");
        assert_eq!(records[1].project_name, "beta");
        assert_eq!(records[1].plus_line_count, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_records_under_follows_symlinked_repository() {
        let outside = TempDir::new().unwrap();
        let repo = init_repo(&outside.path().join("real"));
        commit_files(&repo, &[("linked.txt", "x\n")], "alice", 1_577_836_800, "a");

        let base = TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path().join("real"), base.path().join("linked"))
            .unwrap();
        std::os::unix::fs::symlink(outside.path().join("gone"), base.path().join("dangling"))
            .unwrap();

        let direct = commit_log_records_in(base.path().join("linked"));
        let under = commit_log_records_under(base.path()).unwrap();

        assert_eq!(direct.len(), 1);
        assert_eq!(under.len(), 1);
        assert_eq!(under[0].file, "linked.txt");
    }

    #[test]
    fn test_records_under_missing_base_dir() {
        assert!(commit_log_records_under("/nonexistent/base/dir").is_err());
    }
}
