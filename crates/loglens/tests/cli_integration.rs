//! End-to-end CLI integration tests.
//!
//! These tests build throwaway git repositories with the `git` CLI, run
//! `loglens` against them and check the printed report.

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn loglens() -> Command {
    let mut cmd = Command::cargo_bin("loglens").expect("loglens binary should be built");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_AUTHOR_DATE", "2020-01-15T10:00:00+0000")
        .env("GIT_COMMITTER_DATE", "2020-01-15T10:00:00+0000")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Creates a repository at `dir` with one commit by `author` touching two files.
fn setup_git_repo(dir: &Path, author: &str) {
    fs::create_dir_all(dir).expect("failed to create repo dir");
    git(dir, &["init", "--quiet"]);
    git(dir, &["config", "user.name", author]);
    git(dir, &["config", "user.email", "dev@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);

    fs::write(dir.join("a.txt"), "one\ntwo\nthree\n").expect("failed to write a.txt");
    fs::write(dir.join("b.txt"), "four\n").expect("failed to write b.txt");
    git(dir, &["add", "."]);
    git(dir, &["commit", "--quiet", "-m", "initial"]);
}

#[test]
fn test_create_report_single_repository() {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path().join("demo");
    setup_git_repo(&repo, "alice");

    loglens()
        .args(["create-report", "--path"])
        .arg(&repo)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file changes across 1 projects"))
        .stdout(predicate::str::contains("2020-01 (Q1): 2 changes, +4 -0, 4 lines"))
        .stdout(predicate::str::contains("alice: 2 changes, +4 -0, 4 lines"));
}

#[test]
fn test_create_report_under_base_directory() {
    let temp_dir = TempDir::new().unwrap();
    setup_git_repo(&temp_dir.path().join("one"), "alice");
    setup_git_repo(&temp_dir.path().join("two"), "bob");
    fs::create_dir(temp_dir.path().join("not-a-repo")).unwrap();

    loglens()
        .args(["create-report", "--under", "--path"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("4 file changes across 2 projects"))
        .stdout(predicate::str::contains("alice: 2 changes"))
        .stdout(predicate::str::contains("bob: 2 changes"));
}

#[test]
fn test_create_report_not_a_repository() {
    let temp_dir = TempDir::new().unwrap();

    loglens()
        .args(["create-report", "--path"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No file changes found."));
}

#[test]
fn test_create_report_under_missing_directory() {
    let temp_dir = TempDir::new().unwrap();

    loglens()
        .args(["create-report", "--under", "--path"])
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to scan"));
}

#[test]
fn test_review_comments_requires_target() {
    loglens()
        .arg("review-comments")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn test_commits_rejects_both_targets() {
    loglens()
        .args(["commits", "--project", "1", "--group", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();

    loglens()
        .args(["review-comments", "--project", "1", "--config"])
        .arg(temp_dir.path().join("loglens.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

#[test]
fn test_invalid_config_value() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("loglens.toml");
    fs::write(&config_path, "[gitlab]\nper_page = 0\n").unwrap();

    loglens()
        .args(["commits", "--group", "team", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("per_page"));
}

#[test]
fn test_unreachable_gitlab_leaves_cache_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("loglens.toml");
    fs::write(
        &config_path,
        r#"
        [gitlab]
        url = "http://127.0.0.1:9"
        token_env = "LOGLENS_TEST_UNSET_TOKEN"
        timeout_secs = 2

        [cache]
        review_comments_dir = "cache/mr-comments"
        commits_dir = "cache/commits"
        "#,
    )
    .unwrap();

    loglens()
        .current_dir(temp_dir.path())
        .args(["review-comments", "--project", "3"])
        .env_remove("LOGLENS_TEST_UNSET_TOKEN")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to collect review comments of project 3",
        ));

    assert!(!temp_dir.path().join("cache").exists());
}
