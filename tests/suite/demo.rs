//! The clone-demo binary: fixed output, and detectable by dupscan itself.

use std::path::PathBuf;
use std::process::Command;

const EXPECTED_BLOCK: &str = "Hello, World!\n\
    This is line 0\n\
    Even number\n\
    This is line 1\n\
    Odd number\n\
    This is line 2\n\
    Even number\n\
    This is line 3\n\
    Odd number\n\
    This is line 4\n\
    Even number\n";

fn demo_source_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/bin/clone_demo.rs")
}

fn run_demo() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_clone-demo"))
        .output()
        .expect("clone-demo runs")
}

#[test]
fn demo_prints_the_block_twice() {
    let output = run_demo();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    assert_eq!(stdout, format!("{EXPECTED_BLOCK}{EXPECTED_BLOCK}"));
    assert_eq!(stdout.lines().count(), 22);
}

#[test]
fn demo_is_idempotent_across_runs() {
    let first = run_demo();
    let second = run_demo();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn dupscan_flags_the_demo_routines() {
    let output = Command::new(env!("CARGO_BIN_EXE_dupscan"))
        .arg("--source-path")
        .arg(demo_source_path())
        .arg("--output-format")
        .arg("json")
        .output()
        .expect("dupscan runs");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is the json report");

    let records = report["records"].as_array().expect("records array");
    assert_eq!(records.len(), 1, "exactly the routine pair");
    let blocks = records[0]["blocks"].as_array().expect("blocks array");
    assert_eq!(blocks.len(), 2);
    assert_eq!(report["summary"]["duplicateFiles"], 1);
}

#[test]
fn dupscan_errors_on_missing_source_path() {
    let output = Command::new(env!("CARGO_BIN_EXE_dupscan"))
        .arg("--source-path")
        .arg("/no/such/path")
        .output()
        .expect("dupscan runs");
    assert!(!output.status.success());
}
