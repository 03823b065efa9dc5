#![cfg(unix)]
//! End-to-end tests of the `pfdo_mgz2img` binary with stand-in engines

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MISSING_ENGINE: &str = "pfdo_mgz2image_missing_12345";

fn plugin(engine: &str) -> Command {
    let mut cmd = Command::cargo_bin("pfdo_mgz2img").unwrap();
    cmd.env("PFDO_MGZ2IMAGE_BIN", engine).env_remove("RUST_LOG");
    cmd
}

#[test]
fn runs_with_only_positional_directories() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    plugin("true")
        .arg(temp_dir.path())
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Version: "));

    assert!(out.is_dir());
}

#[test]
fn forwards_options_to_engine() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().display().to_string();

    plugin("echo")
        .args(["--filterExpression", "mgz", "-n", "--threads", "4", "-t", "png"])
        .arg(temp_dir.path())
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("--inputDir {input}")))
        .stdout(predicate::str::contains("--filterExpression mgz"))
        .stdout(predicate::str::contains("--normalize"))
        .stdout(predicate::str::contains("--threads 4"))
        .stdout(predicate::str::contains("--outputFileType png"))
        .stdout(predicate::str::contains("--lookupTable __val__"))
        .stdout(predicate::str::contains("--verbosity 1"))
        .stdout(predicate::str::contains("--saveImages").not());
}

#[test]
fn elapsed_time_flag_stays_in_wrapper() {
    let temp_dir = TempDir::new().unwrap();

    plugin("echo")
        .arg("--printElapsedTime")
        .arg(temp_dir.path())
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--inputDir"))
        .stdout(predicate::str::contains("--printElapsedTime").not())
        .stdout(predicate::str::contains("Elapsed time ="));
}

#[test]
fn runs_engine_once_per_filter() {
    let temp_dir = TempDir::new().unwrap();

    let output = plugin("echo")
        .args(["--filterExpression", "aparc,aseg"])
        .arg(temp_dir.path())
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout
        .lines()
        .filter(|line| line.starts_with("--inputDir"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("--filterExpression aparc"));
    assert!(lines[1].contains("--filterExpression aseg"));
}

#[test]
fn prints_elapsed_time() {
    let temp_dir = TempDir::new().unwrap();

    plugin("true")
        .arg("--printElapsedTime")
        .arg(temp_dir.path())
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Elapsed time = \d+\.\d{6} seconds").unwrap());
}

#[test]
fn man_page_does_not_start_engine() {
    plugin(MISSING_ENGINE)
        .arg("--man")
        .assert()
        .success()
        .stdout(predicate::str::contains("SYNOPSIS"))
        .stdout(predicate::str::contains("--lookupTable"));

    let temp_dir = TempDir::new().unwrap();
    plugin(MISSING_ENGINE)
        .arg("-y")
        .arg(temp_dir.path())
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SYNOPSIS"));
}

#[test]
fn json_prints_descriptor() {
    let output = plugin(MISSING_ENGINE).arg("--json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["type"], "ds");
    let names: Vec<_> = value["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert!(names.contains(&"wholeVolume".to_string()));
    assert!(names.contains(&"followLinks".to_string()));
}

#[test]
fn meta_prints_metadata() {
    let output = plugin(MISSING_ENGINE).arg("--meta").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["selfexec"], "pfdo_mgz2img");
    assert!(value.get("parameters").is_none());
}

#[test]
fn saves_meta_files() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    plugin("true")
        .args(["--saveinputmeta", "--saveoutputmeta", "--label", "seg"])
        .arg(temp_dir.path())
        .arg(&out)
        .assert()
        .success();

    let input_meta = fs::read_to_string(out.join("input.meta.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&input_meta).unwrap();
    assert_eq!(value["label"], "seg");
    assert_eq!(value["normalize"], false);
    assert!(out.join("output.meta.json").is_file());
}

#[test]
fn savejson_writes_descriptor_file() {
    let temp_dir = TempDir::new().unwrap();

    plugin(MISSING_ENGINE)
        .arg("--savejson")
        .arg(temp_dir.path())
        .assert()
        .success();

    assert!(temp_dir.path().join("pfdo_mgz2img.json").is_file());
}

#[test]
fn engine_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    plugin("false")
        .arg(temp_dir.path())
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conversion engine run failed"));
}

#[test]
fn missing_engine_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    plugin(MISSING_ENGINE)
        .arg(temp_dir.path())
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found on PATH"));
}

#[test]
fn missing_input_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    plugin("true")
        .arg(temp_dir.path().join("missing"))
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input directory not found"));
}

#[test]
fn positionals_are_required() {
    plugin("true").assert().failure();
}
