//! Integration tests for the `confval` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the show and get
//! subcommands through the actual binary, covering both backends, stdin input,
//! format detection across all three backends, coercion, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the alt-config fixture.
fn server_cfg_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/server.cfg")
}

/// Helper: path to the JSON fixture.
fn server_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/server.json")
}

/// Helper: path to the TOML fixture.
fn server_toml_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/server.toml")
}

/// Helper: path to a syntactically broken alt-config fixture.
fn broken_cfg_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/broken.cfg")
}

const COMPACT: &str = r#"{"name":"Leon's Testserver","host":"0.0.0.0","port":7788,"debug":true,"modules":["js-module"],"js-module":{"profiler":{"port":7799}}}"#;

fn confval() -> Command {
    Command::cargo_bin("confval").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Show subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn show_alt_file_pretty() {
    confval()
        .args(["show", "-i", server_cfg_path()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"name\": \"Leon's Testserver\","))
        .stdout(predicate::str::contains("\"port\": 7788"))
        .stdout(predicate::str::contains("\"modules\": [\n    \"js-module\"\n  ]"));
}

#[test]
fn show_alt_and_json_compact_agree() {
    confval()
        .args(["show", "--compact", "-i", server_cfg_path()])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{COMPACT}\n")));

    confval()
        .args(["show", "--compact", "-i", server_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{COMPACT}\n")));

    confval()
        .args(["show", "--compact", "-i", server_toml_path()])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{COMPACT}\n")));
}

#[test]
fn show_stdin_toml_with_explicit_format() {
    confval()
        .args(["show", "--compact", "-f", "toml"])
        .write_stdin("ratio = 0.5
count = 3
")
        .assert()
        .success()
        .stdout("{\"ratio\":0.5,\"count\":3}\n");
}

#[test]
fn show_invalid_toml_fails() {
    confval()
        .args(["show", "-f", "toml"])
        .write_stdin("port = \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("toml parse error"));
}

#[test]
fn show_pretty_output_is_valid_json() {
    let output = confval()
        .args(["show", "-i", server_cfg_path()])
        .output()
        .expect("show should run");
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("pretty output must be JSON");
    assert_eq!(parsed["js-module"]["profiler"]["port"], 7799);
}

#[test]
fn show_stdin_defaults_to_json() {
    confval()
        .args(["show", "--compact"])
        .write_stdin(r#"{"a": [1, 2.5, "x"]}"#)
        .assert()
        .success()
        .stdout("{\"a\":[1,2.5,\"x\"]}\n");
}

#[test]
fn show_stdin_with_explicit_format() {
    confval()
        .args(["show", "--compact", "-f", "alt"])
        .write_stdin("port: 7788\nhost: 0.0.0.0\n")
        .assert()
        .success()
        .stdout("{\"port\":7788,\"host\":\"0.0.0.0\"}\n");
}

#[test]
fn show_invalid_json_fails() {
    confval()
        .arg("show")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse stdin"))
        .stderr(predicate::str::contains("json parse error"));
}

#[test]
fn show_invalid_alt_file_fails() {
    confval()
        .args(["show", "-i", broken_cfg_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alt-config parse error"))
        .stderr(predicate::str::contains("unterminated quoted string"));
}

#[test]
fn show_missing_file_fails() {
    confval()
        .args(["show", "-i", "/nonexistent/confval/server.cfg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Get subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_nested_integer() {
    for path in [server_cfg_path(), server_json_path(), server_toml_path()] {
        confval()
            .args(["get", "js-module.profiler.port", "-i", path, "--as", "integer"])
            .assert()
            .success()
            .stdout("7799\n");
    }
}

#[test]
fn get_scalars_with_coercion() {
    let cases = [
        ("name", "string", "Leon's Testserver\n"),
        ("host", "string", "0.0.0.0\n"),
        ("port", "float", "7788\n"),
        ("debug", "bool", "true\n"),
        ("modules.0", "string", "js-module\n"),
        ("port", "bool", "true\n"),
    ];
    for (path, ty, expected) in cases {
        confval()
            .args(["get", path, "-i", server_cfg_path(), "--as", ty])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn get_subtree_prints_canonical_text() {
    confval()
        .args(["get", "modules", "-i", server_json_path()])
        .assert()
        .success()
        .stdout("[\n  \"js-module\"\n]\n");
}

#[test]
fn get_missing_path_prints_null() {
    confval()
        .args(["get", "missing.deeper", "-i", server_cfg_path()])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn get_missing_path_with_coercion_fails() {
    confval()
        .args(["get", "missing", "-i", server_cfg_path(), "--as", "integer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read 'missing'"))
        .stderr(predicate::str::contains("cannot coerce null to i64"));
}

#[test]
fn get_string_as_integer_fails() {
    confval()
        .args(["get", "host", "-i", server_cfg_path(), "--as", "integer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("type mismatch"));
}
