//! Integration tests for the overlap CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn compare() -> Command {
    let mut cmd = Command::cargo_bin("overlap").unwrap();
    cmd.arg("compare")
        .arg("-a")
        .arg(fixture_path("first.txt"))
        .arg("-b")
        .arg(fixture_path("second.txt"));
    cmd
}

#[test]
fn test_compare_lines() {
    compare()
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world\n<span>foo</span>\n"))
        .stdout(predicate::str::contains("goodbye\n<span>foo</span>\n"))
        .stdout(predicate::str::contains("Shared fragments: 1 (lines)"));
}

#[test]
fn test_compare_sentences() {
    let mut cmd = Command::cargo_bin("overlap").unwrap();
    cmd.arg("compare")
        .arg("-a")
        .arg(fixture_path("essay-a.txt"))
        .arg("-b")
        .arg(fixture_path("essay-b.txt"))
        .arg("-m")
        .arg("sentences");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "<span>The river rose overnight.</span> <span>Nobody was surprised!</span> Boats were tied high.",
        ))
        .stdout(predicate::str::contains("Shared fragments: 2 (sentences)"));
}

#[test]
fn test_compare_substrings() {
    compare()
        .args(["-m", "substrings", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world<span>\nfoo\n</span>"))
        .stdout(predicate::str::contains("goodbye<span>\nfoo\n</span>"))
        .stdout(predicate::str::contains("Shared fragments: 3 (substrings (3))"));
}

#[test]
fn test_compare_substrings_json() {
    let output = compare()
        .args(["-m", "substrings", "-n", "4", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "substrings");
    assert_eq!(json["length"], 4);
    assert_eq!(json["shared"], serde_json::json!(["\nfoo", "foo\n"]));

    let regions = json["documents"][0]["regions"].as_array().unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[1]["start"], 11);
    assert_eq!(regions[1]["end"], 16);
    assert_eq!(regions[1]["highlighted"], true);
}

#[test]
fn test_html_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.html");

    compare()
        .arg("-f")
        .arg("html")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains("<pre>hello world\n<span>foo</span>\n</pre>"));
}

#[test]
fn test_markup_is_escaped() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.txt");
    let b = temp_dir.path().join("b.txt");
    fs::write(&a, "<b>bold</b>\nTom & Jerry\n").unwrap();
    fs::write(&b, "Tom & Jerry\n").unwrap();

    let mut cmd = Command::cargo_bin("overlap").unwrap();
    cmd.arg("compare").arg("-a").arg(&a).arg("-b").arg(&b);

    cmd.assert().success().stdout(predicate::str::contains(
        "&lt;b&gt;bold&lt;/b&gt;\n<span>Tom &amp; Jerry</span>",
    ));
}

#[test]
fn test_missing_file() {
    let mut cmd = Command::cargo_bin("overlap").unwrap();
    cmd.arg("compare")
        .arg("-a")
        .arg("nonexistent.txt")
        .arg("-b")
        .arg(fixture_path("second.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_missing_length() {
    compare()
        .args(["-m", "substrings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing length"));
}

#[test]
fn test_invalid_length() {
    compare()
        .args(["-m", "substrings", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid length"));

    compare()
        .args(["-m", "substrings", "-n", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid length"));
}

#[test]
fn test_invalid_mode() {
    compare()
        .args(["-m", "paragraphs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_undecodable_document() {
    let temp_dir = TempDir::new().unwrap();
    let binary = temp_dir.path().join("binary.bin");
    fs::write(&binary, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let mut cmd = Command::cargo_bin("overlap").unwrap();
    cmd.arg("compare")
        .arg("-a")
        .arg(fixture_path("first.txt"))
        .arg("-b")
        .arg(&binary);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid document"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("overlap.toml");
    fs::write(
        &config_path,
        r#"
[comparison]
default_mode = "substrings"
substring_length = 5

[output]
format = "json"
highlight_class = "hit"
pretty_json = false
"#,
    )
    .unwrap();

    compare()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\":\"substrings\""))
        .stdout(predicate::str::contains("\"length\":5"))
        .stdout(predicate::str::contains(
            "<span class=\\\"hit\\\">\\nfoo\\n</span>",
        ));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[comparison\ndefault_mode = ").unwrap();

    compare()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("overlap").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("shared by two"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn test_list_modes() {
    let mut cmd = Command::cargo_bin("overlap").unwrap();
    cmd.args(["list", "modes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lines"))
        .stdout(predicate::str::contains("sentences"))
        .stdout(predicate::str::contains("substrings"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("overlap").unwrap();
    cmd.args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("html"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_generate_config_command() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("overlap.toml");

    let mut cmd = Command::cargo_bin("overlap").unwrap();
    cmd.arg("generate-config")
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("[comparison]"));
    assert!(content.contains("default_mode = \"lines\""));
    assert!(content.contains("[output]"));

    // the generated file is usable as is
    compare()
        .arg("--config")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("<span>foo</span>"));
}
