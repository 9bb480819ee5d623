//! Integration tests for the post command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::jobdesk_cmd;

fn post_valid(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = jobdesk_cmd();
    cmd.current_dir(temp.path())
        .arg("post")
        .arg("--title")
        .arg("Rust Developer")
        .arg("--company")
        .arg("Acme")
        .arg("--location")
        .arg("Remote")
        .arg("--description")
        .arg("Write Rust services")
        .arg("--requirements")
        .arg("2+ years of Rust")
        .arg("--email")
        .arg("jobs@acme.com");
    cmd
}

#[test]
fn test_post_valid_submission() {
    let temp = TempDir::new().unwrap();

    post_valid(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Job posted successfully"))
        .stdout(predicate::str::contains("id: 4"));

    // Submission persists the whole collection: seeds plus the new posting
    assert!(temp.path().join("jobs.json").exists());
}

#[test]
fn test_post_then_browse_round_trip() {
    let temp = TempDir::new().unwrap();

    post_valid(&temp).assert().success();

    jobdesk_cmd()
        .current_dir(temp.path())
        .arg("browse")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 4 jobs"))
        .stdout(predicate::str::contains("Rust Developer at Acme - Remote"));
}

#[test]
fn test_post_stamps_todays_date() {
    let temp = TempDir::new().unwrap();

    post_valid(&temp).assert().success();

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let contents = fs::read_to_string(temp.path().join("jobs.json")).unwrap();
    assert!(contents.contains(&today));
}

#[test]
fn test_post_defaults_empty_salary() {
    let temp = TempDir::new().unwrap();

    post_valid(&temp).assert().success();

    jobdesk_cmd()
        .current_dir(temp.path())
        .arg("browse")
        .arg("--search")
        .arg("rust developer")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary:       Not specified"));
}

#[test]
fn test_post_with_salary_keeps_it() {
    let temp = TempDir::new().unwrap();

    post_valid(&temp)
        .arg("--salary")
        .arg("$90,000 - $110,000")
        .assert()
        .success();

    jobdesk_cmd()
        .current_dir(temp.path())
        .arg("browse")
        .arg("--search")
        .arg("rust developer")
        .assert()
        .success()
        .stdout(predicate::str::contains("$90,000 - $110,000"));
}

#[test]
fn test_post_missing_required_field_fails() {
    let temp = TempDir::new().unwrap();

    jobdesk_cmd()
        .current_dir(temp.path())
        .arg("post")
        .arg("--title")
        .arg("")
        .arg("--company")
        .arg("Acme")
        .arg("--location")
        .arg("Remote")
        .arg("--description")
        .arg("Write Rust services")
        .arg("--requirements")
        .arg("2+ years of Rust")
        .arg("--email")
        .arg("jobs@acme.com")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Missing required fields: title"));

    // Failed validation must not touch the store
    assert!(!temp.path().join("jobs.json").exists());
}

#[test]
fn test_post_blank_fields_are_listed() {
    let temp = TempDir::new().unwrap();

    jobdesk_cmd()
        .current_dir(temp.path())
        .arg("post")
        .arg("--title")
        .arg("Rust Developer")
        .arg("--company")
        .arg("   ")
        .arg("--location")
        .arg("Remote")
        .arg("--description")
        .arg("Write Rust services")
        .arg("--requirements")
        .arg("2+ years of Rust")
        .arg("--email")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("company, contact_email"));
}

#[test]
fn test_post_ids_are_sequential() {
    let temp = TempDir::new().unwrap();

    post_valid(&temp).assert().success();

    post_valid(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("id: 5"));
}

#[test]
fn test_post_appends_to_existing_store_file() {
    let temp = TempDir::new().unwrap();

    fs::write(temp.path().join("jobs.json"), "[]").unwrap();

    post_valid(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("id: 1"));

    jobdesk_cmd()
        .current_dir(temp.path())
        .arg("browse")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 jobs"));
}
