mod common;
use common::{OFFICE_HOURS_YAML, no_config, rsc, temp_path, write_schedule};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_add_creates_file_and_list_shows_events() {
    let cfg = no_config("add_list");
    let file = temp_path("add_list", "yaml");

    rsc()
        .args([
            "--config", &cfg, "add", &file, "--title", "Office Hours", "--day", "mon", "--start",
            "9:00 AM", "--end", "11 AM", "--location", "Room 210", "--color", "ETSU Gold",
        ])
        .assert()
        .success()
        .stdout(contains("Added event #1"));

    rsc()
        .args([
            "--config", &cfg, "add", &file, "--title", "Seminar", "--day", "monday", "--start",
            "10:00", "--end", "10:30",
        ])
        .assert()
        .success()
        .stdout(contains("Added event #2"));

    let saved = fs::read_to_string(&file).expect("schedule file written");
    assert!(saved.contains("Office Hours"));
    assert!(saved.contains("9:00 AM"));

    rsc()
        .args(["--config", &cfg, "list", &file])
        .assert()
        .success()
        .stdout(contains("Office Hours"))
        .stdout(contains("Mon 09:00-11:00 (02:00)"))
        .stdout(contains("Room 210"))
        .stdout(contains("ETSU Gold"))
        .stdout(contains("Seminar"));
}

#[test]
fn test_add_rejects_bad_time() {
    let cfg = no_config("add_bad_time");
    let file = temp_path("add_bad_time", "yaml");

    rsc()
        .args([
            "--config", &cfg, "add", &file, "--title", "Lab", "--day", "tue", "--start", "13 AM",
            "--end", "2 PM",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid hour"));

    assert!(!std::path::Path::new(&file).exists());
}

#[test]
fn test_add_rejects_empty_range() {
    let cfg = no_config("add_empty_range");
    let file = temp_path("add_empty_range", "yaml");

    rsc()
        .args([
            "--config", &cfg, "add", &file, "--title", "Lab", "--day", "tue", "--start", "10:00",
            "--end", "10 AM",
        ])
        .assert()
        .failure()
        .stderr(contains("must be before"));
}

#[test]
fn test_del_removes_event_and_rejects_unknown_id() {
    let cfg = no_config("del");
    let file = write_schedule("del", OFFICE_HOURS_YAML);

    rsc()
        .args(["--config", &cfg, "del", &file, "2"])
        .assert()
        .success()
        .stdout(contains("Deleted event #2 'Seminar'"));

    let saved = fs::read_to_string(&file).unwrap();
    assert!(!saved.contains("Seminar"));
    assert!(saved.contains("CSCI 1250"));

    rsc()
        .args(["--config", &cfg, "del", &file, "9"])
        .assert()
        .failure()
        .stderr(contains("No event with id 9"));
}

#[test]
fn test_list_json() {
    let cfg = no_config("list_json");
    let file = write_schedule("list_json", OFFICE_HOURS_YAML);

    let output = rsc()
        .args(["--config", &cfg, "list", &file, "--json"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let events: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let events = events.as_array().expect("array");
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["title"], "Office Hours");
    assert_eq!(events[0]["start"], "09:00");
    assert_eq!(events[0]["day"], "mon");
    assert_eq!(events[2]["color"], "#1abc9c");
}

#[test]
fn test_generate_writes_pdf() {
    let cfg = no_config("generate");
    let file = write_schedule("generate", OFFICE_HOURS_YAML);
    let out = temp_path("generate", "pdf");

    rsc()
        .args(["--config", &cfg, "generate", &file, "--out", &out])
        .assert()
        .success()
        .stdout(contains("PDF schedule saved"));

    let bytes = fs::read(&out).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_generate_reports_omitted_events() {
    let cfg = no_config("generate_warn");
    let file = write_schedule(
        "generate_warn",
        r#"
events:
  - title: Evening Lab
    day: thu
    start: "8 PM"
    end: "9 PM"
  - title: Morning
    day: thu
    start: "9 AM"
    end: "10 AM"
"#,
    );
    let out = temp_path("generate_warn", "pdf");

    rsc()
        .args([
            "--config", &cfg, "generate", &file, "--out", &out, "--days", "thu,fri", "--end",
            "7 PM",
        ])
        .assert()
        .success()
        .stdout(contains("Evening Lab").and(contains("omitted")));
}

#[test]
fn test_generate_refuses_to_overwrite_without_force() {
    let cfg = no_config("generate_force");
    let file = write_schedule("generate_force", OFFICE_HOURS_YAML);
    let out = temp_path("generate_force", "pdf");
    fs::write(&out, b"keep me").unwrap();

    rsc()
        .args(["--config", &cfg, "generate", &file, "--out", &out])
        .assert()
        .failure()
        .stderr(contains("--force"));
    assert_eq!(fs::read(&out).unwrap(), b"keep me");

    rsc()
        .args(["--config", &cfg, "generate", &file, "--out", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read(&out).unwrap().starts_with(b"%PDF-"));
}

#[test]
fn test_generate_empty_schedule_fails() {
    let cfg = no_config("generate_empty");
    let file = write_schedule("generate_empty", "events: []\n");
    let out = temp_path("generate_empty", "pdf");

    rsc()
        .args(["--config", &cfg, "generate", &file, "--out", &out])
        .assert()
        .failure()
        .stderr(contains("Nothing to generate"));
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_init_and_config_print() {
    let cfg = no_config("init");

    rsc()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("day_end"));

    rsc()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("term: Fall 2025"))
        .stdout(contains("default_color: Blue"));
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = temp_path("broken_cfg", "conf");
    fs::write(&cfg, "day_end: 3 PM\n").unwrap();
    let file = write_schedule("broken_cfg", OFFICE_HOURS_YAML);

    rsc()
        .args(["--config", &cfg, "list", &file])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
