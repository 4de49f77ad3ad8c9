use assert_cmd::Command;
use predicates::prelude::*;

fn codeward_cmd() -> Command {
    Command::cargo_bin("codeward").unwrap()
}

#[test]
fn help_works() {
    codeward_cmd().arg("--help").assert().success();
}

#[test]
fn scan_requires_a_language() {
    let tmp = tempfile::tempdir().unwrap();
    codeward_cmd()
        .current_dir(tmp.path())
        .args(["scan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("language is required"));
}

#[test]
fn scan_with_no_adapters_emits_an_empty_report() {
    let tmp = tempfile::tempdir().unwrap();
    codeward_cmd()
        .current_dir(tmp.path())
        .args(["--lang", "ruby", "scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no scanners available"));

    let report = std::fs::read_to_string(tmp.path().join("artifacts/codeward/report.json"))
        .expect("report file written");
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["schema"], "codeward.report.v1");
    assert_eq!(value["data"]["findings_total"], 0);
    assert!(value["results"].as_array().unwrap().is_empty());
}

#[test]
fn scan_rejects_a_missing_scan_dir() {
    let tmp = tempfile::tempdir().unwrap();
    codeward_cmd()
        .current_dir(tmp.path())
        .args(["--lang", "ruby", "--scan-dir", "does-not-exist", "scan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scan directory does not exist"));
}

#[test]
fn identify_fails_cleanly_outside_a_repository() {
    let tmp = tempfile::tempdir().unwrap();
    codeward_cmd()
        .current_dir(tmp.path())
        .args(["identify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn clone_requires_a_git_section() {
    let tmp = tempfile::tempdir().unwrap();
    codeward_cmd()
        .current_dir(tmp.path())
        .args(["--lang", "ruby", "clone", "--target", "checkout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a [git] section"));
}

#[test]
fn clone_refuses_a_non_empty_target() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("codeward.toml"),
        "lang = \"ruby\"\n\n[git]\nurl = \"https://github.com/acme/widgets.git\"\n",
    )
    .unwrap();
    std::fs::create_dir(tmp.path().join("checkout")).unwrap();
    std::fs::write(tmp.path().join("checkout/leftover"), "x").unwrap();

    codeward_cmd()
        .current_dir(tmp.path())
        .args(["clone", "--target", "checkout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an empty directory"));
}
