use assert_cmd::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("triad.json");
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn stdout_of(args: &[&str]) -> String {
    let exe = assert_cmd::cargo_bin!("plumage-cli");
    let output = Command::new(exe).args(args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("utf8 stdout")
}

#[test]
fn cli_prints_stylesheet_in_rule_order() {
    let path = fixture();
    let text = stdout_of(&["stylesheet", path.to_string_lossy().as_ref()]);
    let sheet: Value = serde_json::from_str(&text).expect("stylesheet json");
    let selectors: Vec<&str> = sheet
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["selector"].as_str().expect("selector"))
        .collect();
    assert_eq!(
        selectors,
        vec![
            "node",
            "edge",
            "[score = 0]",
            "[score = 10]",
            "[score = 20]",
            "[group = \"x\"]",
            "[group = \"y\"]",
            "edge[source = \"A\"][target = \"B\"]",
            "edge[source = \"B\"][target = \"C\"]",
            "node[id = \"B\"]",
        ]
    );
    assert_eq!(sheet[5]["style"]["background-color"], "#1f77b4");
    assert_eq!(sheet[7]["style"]["line-color"], "#ffffff");
    assert_eq!(sheet[8]["style"]["line-color"], "#000000");
}

#[test]
fn cli_output_is_stable_across_runs() {
    let path = fixture();
    let first = stdout_of(&[path.to_string_lossy().as_ref()]);
    let second = stdout_of(&[path.to_string_lossy().as_ref()]);
    assert_eq!(first, second);
}

#[test]
fn cli_inspect_prints_report_for_last_tap() {
    let path = fixture();
    let text = stdout_of(&["inspect", path.to_string_lossy().as_ref()]);
    assert!(text.starts_with("You recently clicked/tapped the node: B\n"));
    assert!(text.contains("NODE IN-DEGREE: 1\n"));
    assert!(text.contains("score: 10\n"));
}

#[test]
fn cli_lists_attribute_menus() {
    let path = fixture();
    let text = stdout_of(&["attributes", path.to_string_lossy().as_ref()]);
    let out: Value = serde_json::from_str(&text).expect("attributes json");
    assert_eq!(out["numeric"], serde_json::json!(["score"]));
    assert_eq!(out["categorical"], serde_json::json!(["ID", "group"]));
    assert_eq!(out["coloring_options"][0], "None");
}

#[test]
fn cli_reads_stdin_and_writes_out_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("sheet.json");
    let input = fs::read_to_string(fixture()).expect("read fixture");

    let exe = assert_cmd::cargo_bin!("plumage-cli");
    assert_cmd::Command::new(exe)
        .args(["--pretty", "--out", out.to_string_lossy().as_ref(), "-"])
        .write_stdin(input)
        .assert()
        .success();

    let written = fs::read_to_string(&out).expect("read output");
    let sheet: Value = serde_json::from_str(&written).expect("stylesheet json");
    assert_eq!(sheet.as_array().map(Vec::len), Some(10));
}

#[test]
fn cli_control_file_overrides_document_controls() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let controls = tmp.path().join("controls.json");
    fs::write(
        &controls,
        r#"{"edge": {"weightColoring": "no"}, "encoding": {"numeric": "None", "categorical": "None"}}"#,
    )
    .expect("write controls");

    let path = fixture();
    let text = stdout_of(&[
        "--controls",
        controls.to_string_lossy().as_ref(),
        path.to_string_lossy().as_ref(),
    ]);
    let sheet: Value = serde_json::from_str(&text).expect("stylesheet json");
    assert_eq!(sheet.as_array().map(Vec::len), Some(3));
}

#[test]
fn cli_rejects_bad_tap_payload() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("bad.json");
    fs::write(&input, r#"{"edges": [], "taps": [{"edge": {"source": "A"}}]}"#).expect("write");

    let exe = assert_cmd::cargo_bin!("plumage-cli");
    Command::new(exe)
        .arg(input.to_string_lossy().as_ref())
        .assert()
        .failure()
        .code(1);
}

#[test]
fn cli_unknown_flag_prints_usage() {
    let exe = assert_cmd::cargo_bin!("plumage-cli");
    Command::new(exe).arg("--bogus").assert().failure().code(2);
}
