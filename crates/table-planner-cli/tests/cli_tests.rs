//! Integration tests for the `planner` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to run the binary with a
//! pinned clock, covering the inspection subcommands, script execution over
//! stdin and files, configuration loading and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper: path to the commands.json fixture.
fn commands_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/commands.json")
}

/// Helper: path to the config.json fixture.
fn config_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/config.json")
}

/// Helper: the binary with the clock pinned to 07:30 on the sample day.
fn planner() -> Command {
    let mut cmd = Command::cargo_bin("planner").unwrap();
    cmd.args(["--today", "2026-03-16", "--now", "07:30"]);
    cmd
}

/// Helper: run to success and parse stdout as JSON.
fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout must be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Inspection subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn tables_lists_the_sample_floor() {
    let out = json_stdout(planner().arg("tables"));

    assert_eq!(out["type"], "tables");
    let tables = out["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 8);
    assert_eq!(tables[3]["capacity"], 8);
}

#[test]
fn empty_flag_skips_seed_data() {
    let out = json_stdout(planner().args(["--empty", "tables"]));
    assert_eq!(out["tables"], serde_json::json!([]));
}

#[test]
fn reservations_filter_by_date() {
    let today = json_stdout(planner().args(["reservations", "--date", "2026-03-16"]));
    let other = json_stdout(planner().args(["reservations", "--date", "2026-03-17"]));

    assert_eq!(today["reservations"].as_array().unwrap().len(), 9);
    assert!(other["reservations"].as_array().unwrap().is_empty());
}

#[test]
fn slots_default_to_the_pinned_day() {
    let out = json_stdout(planner().arg("slots"));

    let slots = out["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 18);
    assert_eq!(slots[0]["time"], "06:00");
    assert_eq!(slots[0]["available"], false, "06:00 is past at 07:30");
    assert_eq!(slots[3]["time"], "09:00");
    assert_eq!(slots[3]["freeTables"], serde_json::json!(["2", "5", "6", "7"]));
}

#[test]
fn audit_of_sample_data_is_clean() {
    let out = json_stdout(planner().arg("audit"));
    assert_eq!(out["report"]["conflicts"], serde_json::json!([]));
    assert_eq!(out["report"]["orphans"], serde_json::json!([]));
}

// ─────────────────────────────────────────────────────────────────────────────
// run subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn run_script_from_file() {
    let out = json_stdout(planner().args(["run", "-i", commands_path()]));

    let responses = out.as_array().unwrap();
    assert_eq!(responses.len(), 6);

    assert_eq!(responses[0]["type"], "reservation");
    assert_eq!(responses[0]["reservation"]["tableId"], "2");

    assert_eq!(responses[1]["kind"], "no_available_table");

    assert_eq!(responses[2]["kind"], "scheduling_conflict");
    assert_eq!(
        responses[2]["conflictingReservation"]["customerName"],
        "Johnson Family"
    );

    assert_eq!(responses[3]["reservation"]["endTime"], "12:00");

    assert_eq!(responses[4]["success"], true);

    let orphans = responses[5]["report"]["orphans"].as_array().unwrap();
    let names: Vec<&str> = orphans
        .iter()
        .map(|r| r["customerName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Garcia", "Lee"]);
}

#[test]
fn run_single_command_from_stdin() {
    planner()
        .arg("run")
        .write_stdin(r#"{"op":"get_table","id":"3"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "Table 3""#));
}

#[test]
fn run_script_to_file() {
    let output_path = "/tmp/planner-test-run-output.json";

    // Clean up from any prior run
    let _ = std::fs::remove_file(output_path);

    planner()
        .args(["run", "-o", output_path])
        .write_stdin(r#"[{"op":"delete_reservation","id":"nope"}]"#)
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    let value: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value, serde_json::json!([{ "type": "done", "success": false }]));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn run_with_config_uses_its_duration() {
    let script = r#"[
        {"op":"create_table","name":"Bar","capacity":2},
        {"op":"create_reservation","customerName":"Ito","numberOfPersons":2,"startTime":"18:00","date":"2026-03-16"}
    ]"#;

    let out = json_stdout(
        planner()
            .args(["--empty", "--config", config_path(), "run"])
            .write_stdin(script),
    );

    assert_eq!(out[1]["reservation"]["endTime"], "19:30");
}

#[test]
fn config_changes_the_slot_grid() {
    let out = json_stdout(planner().args(["--config", config_path(), "slots"]));

    let times: Vec<&str> = out["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["time"].as_str().unwrap())
        .collect();
    assert_eq!(times, vec!["17:00", "18:00", "19:00", "20:00", "21:00", "22:00"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_json_script_fails() {
    planner()
        .arg("run")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn unknown_op_reports_its_index() {
    planner()
        .arg("run")
        .write_stdin(r#"[{"op":"list_tables"},{"op":"teleport"}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("index 1"));
}

#[test]
fn missing_script_file_fails() {
    planner()
        .args(["run", "-i", "/nonexistent/commands.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn missing_config_file_fails() {
    planner()
        .args(["--config", "/nonexistent/config.json", "tables"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn malformed_now_is_rejected() {
    Command::cargo_bin("planner")
        .unwrap()
        .args(["--now", "7.30", "tables"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HH:mm"));
}

#[test]
fn no_subcommand_shows_usage() {
    Command::cargo_bin("planner")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
