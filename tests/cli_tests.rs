use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn linkmatch() -> Command {
    Command::cargo_bin("linkmatch").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    linkmatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("harvest"))
        .stdout(predicate::str::contains("score"));
}

#[test]
fn test_init_creates_config_file() {
    let dir = tempdir().unwrap();

    linkmatch()
        .current_dir(dir.path())
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file"));

    let config_path = dir.path().join("config/linkmatch.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("engine_url"));
    assert!(content.contains("min_fragment_len"));
}

#[test]
fn test_missing_config_fails_noninteractive() {
    let dir = tempdir().unwrap();

    linkmatch()
        .current_dir(dir.path())
        .args(["score", "--firms", "f.csv", "--acquirors", "a.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_score_command_end_to_end() {
    let dir = tempdir().unwrap();

    linkmatch()
        .current_dir(dir.path())
        .arg("--init")
        .assert()
        .success();

    fs::write(
        dir.path().join("firms.csv"),
        ",conml,url\n0,Alpha AG,\"['http://a.com', 'http://b.com']\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("acquirors.csv"),
        ",AcquirorName,url\n0,Gamma Corp,\"['http://b.com', 'http://c.com']\"\n",
    )
    .unwrap();

    linkmatch()
        .current_dir(dir.path())
        .args([
            "score",
            "--firms",
            "firms.csv",
            "--acquirors",
            "acquirors.csv",
            "--output",
            "matches.csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score Summary"))
        .stdout(predicate::str::contains("Match triples emitted: 1"));

    let output = fs::read_to_string(dir.path().join("matches.csv")).unwrap();
    assert_eq!(
        output,
        ",firm_name,acquiror_name,match_count\n0,Alpha AG,Gamma Corp,1\n"
    );
}

#[test]
fn test_score_missing_firms_file_fails() {
    let dir = tempdir().unwrap();

    linkmatch()
        .current_dir(dir.path())
        .arg("--init")
        .assert()
        .success();

    fs::write(
        dir.path().join("acquirors.csv"),
        ",AcquirorName,url\n0,Gamma Corp,[]\n",
    )
    .unwrap();

    linkmatch()
        .current_dir(dir.path())
        .args(["score", "--firms", "missing.csv", "--acquirors", "acquirors.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read firms file"));
}

#[test]
fn test_no_command_fails() {
    let dir = tempdir().unwrap();

    linkmatch()
        .current_dir(dir.path())
        .arg("--init")
        .assert()
        .success();

    linkmatch()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No command given"));
}
