//! Integration tests for the chatnorm CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn chatnorm() -> Command {
    Command::cargo_bin("chatnorm").unwrap()
}

#[test]
fn test_process_text_output() {
    let mut cmd = chatnorm();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("sample.cha"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("*CHI:\t<unk> sitting <unk> .\n"))
        .stdout(predicate::str::contains("*MOT:\t<unk> walking ?\n"))
        .stdout(predicate::str::contains("*CHI:\t<unk> walking running .\n"))
        .stdout(predicate::str::contains("%mor").not())
        .stdout(predicate::str::contains("@Begin").not());
}

#[test]
fn test_speaker_filter() {
    let mut cmd = chatnorm();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("sample.cha"))
        .arg("-s")
        .arg("MOT");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("*MOT:"))
        .stdout(predicate::str::contains("*CHI:").not());
}

#[test]
fn test_custom_unknown_token() {
    let mut cmd = chatnorm();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("second.cha"))
        .arg("--unknown-token")
        .arg("UNK");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("*MOT:\tUNK talking UNK .\n"))
        .stdout(predicate::str::contains("*CHI:\tbecause I want go .\n"));
}

#[test]
fn test_unstable_unknown_token_fails() {
    let mut cmd = chatnorm();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("second.cha"))
        .arg("--unknown-token")
        .arg("&=0unk");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not stable"));
}

#[test]
fn test_json_output() {
    let mut cmd = chatnorm();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("sample.cha"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let records = records.as_array().unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["speaker"], "CHI");
    assert_eq!(records[0]["line"], 5);
    assert_eq!(records[0]["original"], "xxx sit(ting) &=jumps www .");
    assert_eq!(records[2]["normalized"], "<unk> walking running .");
}

#[test]
fn test_markdown_output() {
    let mut cmd = chatnorm();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("*.cha"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## tests/fixtures/second.cha"))
        .stdout(predicate::str::contains("4. **MOT**: <unk> talking <unk> ."))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total utterances: 5 in 2 file(s)*"));
}

#[test]
fn test_glob_pattern_keeps_sorted_order() {
    let mut cmd = chatnorm();
    cmd.arg("process")
        .arg("-q")
        .arg("--parallel")
        .arg("-i")
        .arg(fixture_path("*.cha"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let files: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["file"].as_str().unwrap())
        .collect();

    assert_eq!(files.len(), 5);
    assert!(files[..3].iter().all(|file| file.ends_with("sample.cha")));
    assert!(files[3..].iter().all(|file| file.ends_with("second.cha")));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = chatnorm();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("second.cha"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("*CHI:\tbecause I want go ."));
}

#[test]
fn test_config_file_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("chatnorm.toml");
    fs::write(
        &config,
        "[normalization]\nunknown_token = \"UNK\"\n\n[input]\nspeakers = [\"CHI\"]\n\n[output]\ndefault_format = \"markdown\"\n",
    )
    .unwrap();

    let mut cmd = chatnorm();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("sample.cha"))
        .arg("-c")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. **CHI**: UNK sitting UNK ."))
        .stdout(predicate::str::contains("**MOT**").not());
}

#[test]
fn test_invalid_file() {
    let mut cmd = chatnorm();
    cmd.arg("process").arg("-i").arg("nonexistent.cha");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_help_command() {
    let mut cmd = chatnorm();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CHAT"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn test_list_formats() {
    let mut cmd = chatnorm();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_stages() {
    let mut cmd = chatnorm();
    cmd.arg("list").arg("stages");

    cmd.assert().success().stdout(predicate::str::contains(
        "1. unidentifiable\n  2. incomplete\n  3. omitted\n  4. paralinguistic",
    ));
}
