use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn newsheet_cmd() -> Command {
    Command::cargo_bin("newsheet").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    newsheet_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("sources"));
}

#[test]
fn test_run_help_shows_dry_run_flag() {
    newsheet_cmd()
        .arg("run")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_sources_lists_search_feeds_with_tags() {
    newsheet_cmd()
        .arg("sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("news.google.com/rss/search"))
        .stdout(predicate::str::contains("[압구정]"))
        .stdout(predicate::str::contains("hankyung.com"));
}

#[test]
fn test_sources_needs_no_configuration() {
    newsheet_cmd()
        .arg("sources")
        .env_remove("SPREADSHEET_ID")
        .assert()
        .success();
}

#[test]
fn test_run_without_spreadsheet_id_fails() {
    newsheet_cmd()
        .arg("run")
        .env_remove("SPREADSHEET_ID")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing environment variable: SPREADSHEET_ID",
        ));
}

#[test]
fn test_run_with_unreadable_credentials_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing_key = temp_dir.path().join("service_account.json");

    newsheet_cmd()
        .arg("run")
        .env("SPREADSHEET_ID", "test-spreadsheet")
        .env("SERVICE_ACCOUNT_PATH", missing_key.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credential error"));
}

#[test]
fn test_run_rejects_bad_layout_value() {
    newsheet_cmd()
        .arg("run")
        .env("SPREADSHEET_ID", "test-spreadsheet")
        .env("SHEET_LAYOUT", "compact")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sheet layout"));
}
