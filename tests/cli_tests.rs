//! CLI integration tests. None of these reach the network.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn bullpen() -> Command {
    cargo_bin_cmd!("bullpen")
}

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_help() {
    bullpen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bullpen"))
        .stdout(predicate::str::contains("<TEAM>"))
        .stdout(predicate::str::contains("<LEAGUE>"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version() {
    bullpen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bullpen"));
}

#[test]
fn missing_league_is_a_usage_error() {
    bullpen()
        .arg("Yankees")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<LEAGUE>"));
}

#[test]
fn non_numeric_league_is_rejected() {
    bullpen()
        .args(["Yankees", "mlb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let file = write_temp_config("[table]\nlast_short = 5\nlast_long = 4\n");

    bullpen()
        .args(["Yankees", "1", "--config"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("last_long"));
}

#[test]
fn config_error_is_json_in_json_mode() {
    let file = write_temp_config("[table]\nno_pitches = \"\"\n");

    bullpen()
        .args(["Yankees", "1", "--json", "--config"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"error\""))
        .stderr(predicate::str::contains("no_pitches"));
}
