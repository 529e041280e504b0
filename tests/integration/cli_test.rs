//! Integration tests for the eyeframe binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_path, run_eyeframe, NO_CONFIG};

fn eyeframe() -> Command {
    let mut cmd = Command::cargo_bin("eyeframe").unwrap();
    cmd.env("EYEFRAME_CONFIG", NO_CONFIG).env_remove("EYEFRAME_LOG");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_eyeframe(&["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["new", "scroll", "show", "info", "play", "normalize", "config"] {
        assert!(stdout.contains(name), "missing {name} in help");
    }
}

#[test]
fn long_version_includes_build_info() {
    eyeframe()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "eyeframe ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn scroll_without_output_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_eyeframe(&["scroll", "HI"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--output"));
}

// ============================================================================
// Session Files
// ============================================================================

#[test]
fn new_writes_sanitized_session_file() {
    let dir = TempDir::new().unwrap();

    eyeframe()
        .args(["new", "happy eyes", "--fps", "24", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved changes to"));

    let path = dir.path().join("happy-eyes.json");
    let session = eyeframe::document::load(&path).unwrap().session;
    assert_eq!(session.fps.get(), 24);
    assert!(session.looping);
    assert!(session.frames.is_empty());
}

#[test]
fn new_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("taken.json"), "{}").unwrap();

    eyeframe()
        .args(["new", "taken", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn scroll_then_info() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("hi.json");

    eyeframe()
        .args(["scroll", "HI", "--fps", "10", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 43 frames"));

    eyeframe()
        .arg("info")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Frames:   43"))
        .stdout(predicate::str::contains("Rate:     10 fps (100 ms per frame)"))
        .stdout(predicate::str::contains("Loop:     yes"))
        .stdout(predicate::str::contains("Duration: 4.30s"));
}

#[test]
fn scroll_to_blank_output_name_fails_without_writing() {
    let dir = TempDir::new().unwrap();

    eyeframe()
        .current_dir(dir.path())
        .args(["scroll", "HI", "-o", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("session name is empty"))
        .stdout(predicate::str::contains("Wrote").not());

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn scroll_no_loop_is_saved() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("once.json");

    eyeframe()
        .args(["scroll", "A", "--no-loop", "-o"])
        .arg(&out)
        .assert()
        .success();

    let session = eyeframe::document::load(&out).unwrap().session;
    assert!(!session.looping);
    assert_eq!(session.frames.len(), 38);
}

#[test]
fn show_single_frame() {
    let (stdout, _stderr, exit_code) = run_eyeframe(&[
        "show",
        fixture_path("two_frames.json").to_str().unwrap(),
        "--frame",
        "0",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 16);
    assert!(stdout.lines().next().unwrap().starts_with("●○○"));
}

#[test]
fn show_out_of_range_frame_fails() {
    let (_stdout, stderr, exit_code) = run_eyeframe(&[
        "show",
        fixture_path("two_frames.json").to_str().unwrap(),
        "--frame",
        "5",
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("out of range"));
}

#[test]
fn show_missing_file_fails() {
    eyeframe()
        .args(["show", "no-such-session.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn info_reports_repairs_for_legacy_files() {
    eyeframe()
        .arg("info")
        .arg(fixture_path("legacy_nested.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Frames:   3"))
        .stderr(predicate::str::contains("6 nested plane(s) flattened"));
}

// ============================================================================
// Normalize and Play
// ============================================================================

#[test]
fn normalize_migrates_legacy_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("migrated.json");

    eyeframe()
        .arg("normalize")
        .arg(fixture_path("legacy_nested.json"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("6 nested plane(s) flattened"))
        .stdout(predicate::str::contains("Wrote 3 frames"));

    let migrated = eyeframe::document::load(&out).unwrap();
    assert!(migrated.report.is_clean());

    eyeframe()
        .arg("normalize")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("already in canonical form"));
}

#[test]
fn play_once_prints_every_frame() {
    eyeframe()
        .arg("play")
        .arg(fixture_path("two_frames.json"))
        .args(["--fps", "50", "--cycles", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frame 1/2"))
        .stdout(predicate::str::contains("Frame 2/2"));
}

#[test]
fn play_non_looping_session_stops_after_one_pass() {
    // two_frames.json has loop = false
    let (stdout, _stderr, exit_code) = run_eyeframe(&[
        "play",
        fixture_path("two_frames.json").to_str().unwrap(),
        "--fps",
        "50",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.matches("Frame ").count(), 2);
}

#[test]
fn completions_for_bash() {
    eyeframe()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eyeframe"));
}
