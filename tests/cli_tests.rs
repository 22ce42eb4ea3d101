use assert_cmd::Command;
use predicates::prelude::*;

// Each test runs the binary with a cleared environment from a temp
// directory so no stray .env file or exported variable leaks in.
fn evotrade_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("evotrade").expect("binary builds");
    cmd.env_clear().current_dir(dir);
    cmd
}

#[test]
fn check_fails_without_required_env() {
    let dir = tempfile::tempdir().expect("temp dir");

    evotrade_in(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FIRESTORE_PROJECT_ID"));
}

#[test]
fn check_succeeds_with_project_id() {
    let dir = tempfile::tempdir().expect("temp dir");

    evotrade_in(dir.path())
        .arg("check")
        .env("FIRESTORE_PROJECT_ID", "demo-project")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("demo-project"))
        .stdout(predicate::str::contains("No exchanges configured"));
}

#[test]
fn check_reports_configured_exchanges() {
    let dir = tempfile::tempdir().expect("temp dir");

    evotrade_in(dir.path())
        .arg("check")
        .env("FIRESTORE_PROJECT_ID", "demo-project")
        .env("BINANCE_API_KEY", "key")
        .env("BINANCE_API_SECRET", "secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("binance configured (sandbox)"));
}

#[test]
fn check_accepts_parameter_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let params = dir.path().join("params.toml");
    std::fs::write(&params, "[evolution]\npopulation_size = 12\n").expect("write params");

    evotrade_in(dir.path())
        .arg("check")
        .arg("--config")
        .arg(&params)
        .env("FIRESTORE_PROJECT_ID", "demo-project")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 strategies"));
}

#[test]
fn check_rejects_malformed_parameter_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let params = dir.path().join("params.toml");
    std::fs::write(&params, "not = [valid").expect("write params");

    evotrade_in(dir.path())
        .arg("check")
        .env("FIRESTORE_PROJECT_ID", "demo-project")
        .arg("--config")
        .arg(&params)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}
