//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn extract_on_missing_file_reports_both_halves_and_fails() {
    Command::cargo_bin("romaneio")
        .unwrap()
        .args(["extract", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Razão Social"))
        .stdout(predicate::str::contains("Quantidades de Produtos"))
        .stdout(predicate::str::contains("file not found"));
}

#[test]
fn extract_json_report_on_missing_file_carries_failed_statuses() {
    Command::cargo_bin("romaneio")
        .unwrap()
        .args(["extract", "does-not-exist.pdf", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""status": "failed""#));
}

#[test]
fn catalog_validate_accepts_generated_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    Command::cargo_bin("romaneio")
        .unwrap()
        .args(["catalog", "init", "--output"])
        .arg(&path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("1179486"));
    assert!(written.contains("supplier_name"));

    Command::cargo_bin("romaneio")
        .unwrap()
        .args(["catalog", "validate"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("34 products"));
}

#[test]
fn catalog_init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    Command::cargo_bin("romaneio")
        .unwrap()
        .args(["catalog", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn catalog_validate_rejects_empty_products() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "supplier_name": "X", "catalog": { "products": {}, "weights": {} } }"#,
    )
    .unwrap();

    Command::cargo_bin("romaneio")
        .unwrap()
        .args(["catalog", "validate"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("products must not be empty"));
}

#[test]
fn extract_with_custom_config_rejects_invalid_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{ "catalog": { "products": { "1": "  " }, "weights": {} } }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("romaneio").unwrap();
    cmd.arg("extract")
        .arg("whatever.pdf")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank label"));
}
