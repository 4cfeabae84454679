//! End-to-end CLI behavior

use std::fs;

use predicates::prelude::*;

use super::helpers::{fixture_path, stdout_of, TestEnv};

#[test]
fn bare_invocation_cleans_stdin() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("| a  b |\n")
        .assert()
        .success()
        .stdout("a b\n");
}

#[test]
fn dash_reads_stdin() {
    let env = TestEnv::new();
    env.cmd()
        .args(["clean", "-"])
        .write_stdin("\x1b[31mRed text\x1b[0m")
        .assert()
        .success()
        .stdout("Red text\n");
}

#[test]
fn clean_file_argument() {
    let env = TestEnv::new();
    env.cmd()
        .arg("clean")
        .arg(fixture_path("boxed_table.txt"))
        .assert()
        .success()
        .stdout("Name │ Status\napi-server │ running\nworker │ stopped\n");
}

#[test]
fn crlf_input_is_normalized() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("| a |\r\n| b |\r\n")
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn whitespace_only_input_prints_nothing() {
    let env = TestEnv::new();
    env.cmd()
        .write_stdin("  \n\t\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn output_flag_writes_file() {
    let env = TestEnv::new();
    let out = env.path().join("cleaned.txt");
    env.cmd()
        .args(["clean", "-o"])
        .arg(&out)
        .write_stdin("$ ls  -la")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&out).unwrap(), "ls -la\n");
}

#[test]
fn json_flag_reports_cleaned_text_and_stats() {
    let env = TestEnv::new();
    let stdout = stdout_of(env.cmd().args(["clean", "--json"]).write_stdin("| x |"));

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["cleaned"], "x");
    assert_eq!(json["stats"]["lineCount"], 1);
    assert_eq!(json["stats"]["characterCount"], 5);
    assert_eq!(json["stats"]["charactersRemoved"], 4);
}

#[test]
fn stats_flag_prints_summary_to_stderr() {
    let env = TestEnv::new();
    env.cmd()
        .args(["clean", "--stats"])
        .arg(fixture_path("boxed_table.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Name │ Status"))
        .stderr(predicate::str::contains(
            "Lines: 7\nCharacters: 162\nRemoved: 111 (68.5%)",
        ));
}

#[test]
fn config_can_turn_stats_on() {
    let env = TestEnv::new();
    env.write_config("[output]\nstats = true\n");
    env.cmd()
        .write_stdin("| x |")
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed: 4"));
}

#[test]
fn steps_flag_lists_rules_to_stderr() {
    let env = TestEnv::new();
    env.cmd()
        .args(["clean", "--steps"])
        .write_stdin("| a |")
        .assert()
        .success()
        .stdout("a\n")
        .stderr(predicate::str::contains("remove-pipes"))
        .stderr(predicate::str::contains("changed (-4 chars)"))
        .stderr(predicate::str::contains("unchanged"));
}

#[test]
fn missing_file_fails_with_message() {
    let env = TestEnv::new();
    env.cmd()
        .args(["clean", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn input_over_configured_limit_is_rejected() {
    let env = TestEnv::new();
    env.write_config("[input]\nmax_bytes = 8\n");
    env.cmd()
        .write_stdin("this is more than eight bytes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input too large"));
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::new();
    env.write_config("[input]\nmax_bytes = 0\n");
    env.cmd()
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_bytes"));
}

#[test]
fn stats_command_prints_summary() {
    let env = TestEnv::new();
    env.cmd()
        .arg("stats")
        .arg(fixture_path("boxed_table.txt"))
        .assert()
        .success()
        .stdout("Lines: 7\nCharacters: 162\nRemoved: 111 (68.5%)\n");
}

#[test]
fn stats_command_json() {
    let env = TestEnv::new();
    let stdout = stdout_of(env.cmd().args(["stats", "--json"]).write_stdin("abc\n  def"));

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["lineCount"], 2);
    assert_eq!(json["characterCount"], 9);
    assert_eq!(json["charactersRemoved"], 2);
}

#[test]
fn rules_command_lists_catalog_in_order() {
    let env = TestEnv::new();
    let stdout = stdout_of(env.cmd().arg("rules"));
    let names: Vec<&str> = stdout
        .lines()
        .map(|line| line.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "remove-box-drawing",
            "clean-json-arrays",
            "remove-pipes",
            "normalize-whitespace",
            "remove-terminal-artifacts",
            "collapse-blank-lines",
            "trim",
        ]
    );
}

#[test]
fn completions_mention_binary() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termclean"));
}

#[test]
fn verbose_flag_emits_debug_logs() {
    let env = TestEnv::new();
    env.cmd()
        .args(["clean", "-v"])
        .write_stdin("| x |")
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("Cleaned text"));
}

#[test]
fn version_flag() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "termclean ",
            env!("CARGO_PKG_VERSION")
        )));
}
