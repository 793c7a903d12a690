use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("crewgate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_register_help_lists_fields() {
    cargo_bin_cmd!("crewgate")
        .args(["register", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--unit"))
        .stdout(predicate::str::contains("--tank"))
        .stdout(predicate::str::contains("--rank"))
        .stdout(predicate::str::contains("--confirm-password"));
}

#[test]
fn test_login_requires_id() {
    cargo_bin_cmd!("crewgate")
        .args(["login", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("crewgate")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
