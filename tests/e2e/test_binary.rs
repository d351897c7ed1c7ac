//! Integration tests for the runelink binary.
//!
//! These tests run the compiled binary against the puzzles and solutions in
//! tests/fixtures/.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_runelink"))
}

fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path.to_string_lossy().into_owned()
}

/// Run the binary with `args` and optional stdin. Returns the raw output.
fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run binary");
    if let Some(input) = stdin {
        if let Some(ref mut pipe) = child.stdin {
            pipe.write_all(input.as_bytes()).ok();
        }
    }
    drop(child.stdin.take());
    child.wait_with_output().expect("Failed to wait for binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("Non-UTF8 output")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ─── check ───────────────────────────────────────────────────────────────────

#[test]
fn test_check_valid_solution() {
    let out = run(&["check", &fixture("line.txt"), &fixture("line_ok.txt")], None);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "valid\nlength 2  turns 0  min 2  ratio 1.00x (optimal)\n"
    );
}

#[test]
fn test_check_invalid_exits_2() {
    let out = run(&["check", &fixture("line.txt"), &fixture("line_oob.txt")], None);
    assert_eq!(out.status.code(), Some(2));
    let text = stdout(&out);
    assert!(text.starts_with("invalid: 1 error(s)\n"));
    assert!(text.contains("  Path for Rune 1 goes out of bounds.\n"));
}

#[test]
fn test_check_reads_solution_from_stdin() {
    let out = run(&["check", &fixture("line.txt")], Some("1\n0 2 E E\n"));
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert!(stdout(&out).starts_with("valid\n"));
}

#[test]
fn test_check_max_errors_truncates() {
    let all = run(
        &["check", &fixture("crossing.txt"), &fixture("crossing_bad.txt")],
        None,
    );
    let text = stdout(&all);
    assert!(text.contains("crosses another rune at 1."));
    assert!(text.contains("crosses another rune at 2."));
    assert!(!text.contains("..."));

    let one = run(
        &[
            "check",
            &fixture("crossing.txt"),
            &fixture("crossing_bad.txt"),
            "--max-errors",
            "1",
        ],
        None,
    );
    let text = stdout(&one);
    assert!(text.contains("crosses another rune at 1."));
    assert!(!text.contains("crosses another rune at 2."));
    assert!(text.contains("  ...\n"));
}

#[test]
fn test_check_json() {
    let out = run(
        &["check", &fixture("line.txt"), &fixture("line_oob.txt"), "--json"],
        None,
    );
    assert_eq!(out.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("invalid JSON");
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["kind"], "OutOfBounds");
    assert_eq!(json["metrics"]["total_length"], 3);
    assert_eq!(json["max_steps"], 3);
}

#[test]
fn test_check_malformed_solution_exits_1() {
    let out = run(&["check", &fixture("line.txt")], Some("1\n0 2 E Q\n"));
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("error: "));
}

#[test]
fn test_check_missing_file_exits_1() {
    let out = run(&["check", &fixture("no_such_puzzle.txt")], Some(""));
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("cannot read"));
}

// ─── frame ───────────────────────────────────────────────────────────────────

#[test]
fn test_frame_step() {
    let out = run(
        &[
            "frame",
            &fixture("corner.txt"),
            &fixture("corner_route.txt"),
            "--step",
            "1",
            "--ascii",
        ],
        None,
    );
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "step 1/3\n+---------+\n| 1  >  . |\n| .  .  1 |\n+---------+\n"
    );
}

#[test]
fn test_frame_defaults_to_last_step() {
    let out = run(
        &["frame", &fixture("corner.txt"), &fixture("corner_route.txt"), "--ascii"],
        None,
    );
    assert_eq!(
        stdout(&out),
        "step 3/3\n+---------+\n| 1  >  > |\n| .  .  1 |\n+---------+\n"
    );
}

#[test]
fn test_frame_step_is_clamped() {
    let last = run(
        &["frame", &fixture("corner.txt"), &fixture("corner_route.txt")],
        None,
    );
    let past = run(
        &[
            "frame",
            &fixture("corner.txt"),
            &fixture("corner_route.txt"),
            "--step",
            "99",
        ],
        None,
    );
    assert_eq!(stdout(&last), stdout(&past));
}

#[test]
fn test_frame_all() {
    let out = run(
        &["frame", &fixture("corner.txt"), &fixture("corner_route.txt"), "--all"],
        None,
    );
    let text = stdout(&out);
    for k in 0..=3 {
        assert!(text.contains(&format!("step {}/3\n", k)), "missing frame {}", k);
    }
    assert!(!text.contains("step 4/3"));
}

#[test]
fn test_frame_huge_grid_is_an_error() {
    let out = run(
        &["frame", &fixture("huge.txt"), &fixture("empty_solution.txt")],
        None,
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("too large to draw"));
}

#[test]
fn test_frame_unicode_by_default() {
    let out = run(
        &["frame", &fixture("corner.txt"), &fixture("corner_route.txt")],
        None,
    );
    let text = stdout(&out);
    assert!(text.contains('┌'));
    assert!(text.contains('→'));
    assert!(!text.contains('+'));
}

// ─── batch ───────────────────────────────────────────────────────────────────

fn batch_args(extra: &[&str]) -> Vec<String> {
    let mut args = vec![
        "batch".to_string(),
        "--inputs".to_string(),
        fixture("batch/inputs"),
        "--outputs".to_string(),
        fixture("batch/outputs"),
        "--candidates".to_string(),
        fixture("batch/candidates"),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    args
}

fn run_batch(extra: &[&str]) -> Output {
    let args = batch_args(extra);
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    run(&refs, None)
}

#[test]
fn test_batch_table() {
    let out = run_batch(&[]);
    assert_eq!(out.status.code(), Some(2));
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("case"));
    assert!(lines[1].starts_with("input1.txt") && lines[1].contains("PASS"));
    assert!(lines[1].contains("All paths valid"));
    assert!(lines[2].contains("FAIL"));
    assert!(lines[2].contains("Valid paths, but mismatch with expected output"));
    assert!(lines[3].contains("Path for Rune 1 goes out of bounds."));
    assert!(lines[4].contains("ERROR"));
    assert_eq!(lines[5], "Completed: 1 Passed, 3 Failed.");
}

#[test]
fn test_batch_filter() {
    let out = run_batch(&["--filter", r"^input1\.txt$"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert!(stdout(&out).ends_with("Completed: 1 Passed, 0 Failed.\n"));
}

#[test]
fn test_batch_json() {
    let out = run_batch(&["--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("invalid JSON");
    assert_eq!(json["passed"], 1);
    assert_eq!(json["failed"], 3);
    assert_eq!(json["outcomes"][0]["verdict"], "PASS");
    assert_eq!(json["outcomes"][3]["verdict"], "ERROR");
    assert!(json["outcomes"][0]["duration_ms"].is_u64());
}

#[test]
fn test_batch_rejects_bad_filter() {
    let out = run_batch(&["--filter", "("]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("error"));
}

// ─── level ───────────────────────────────────────────────────────────────────

#[test]
fn test_level_to_stdout() {
    let out = run(
        &["level", "--rows", "1", "--cols", "3", "--rune", "1:2", "--rune", "1:0"],
        None,
    );
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "1 3 2 1 0 1 2\n");
}

#[test]
fn test_level_unpaired_rune() {
    let out = run(
        &["level", "--rows", "1", "--cols", "3", "--rune", "1:0"],
        None,
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Rune ID 1 appears 1 times. Must appear exactly twice."));
}

#[test]
fn test_level_rejects_outside_grid() {
    let out = run(
        &["level", "--rows", "1", "--cols", "3", "--rune", "1:0", "--rune", "1:3"],
        None,
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("outside"));
}

#[test]
fn test_level_rejects_overflowing_size() {
    let big = usize::MAX.to_string();
    let out = run(
        &["level", "--rows", &big, "--cols", "2", "--rune", "1:0", "--rune", "1:1"],
        None,
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("error: grid"));
    assert!(stderr(&out).contains("too large"));
}

#[test]
fn test_level_to_file_round_trips_through_check() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    let name = dir.join("saved");

    let out = run(
        &[
            "level",
            "--rows",
            "1",
            "--cols",
            "3",
            "--rune",
            "1:0",
            "--rune",
            "1:2",
            "-o",
            name.to_str().unwrap(),
        ],
        None,
    );
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));

    let saved = dir.join("saved.txt");
    assert!(saved.exists(), "level file should exist");
    let check = run(&["check", saved.to_str().unwrap()], Some("1\n0 2 E E\n"));
    assert_eq!(check.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&saved).unwrap(), "1 3 2 1 0 1 2\n");
}

// ─── Flags ───────────────────────────────────────────────────────────────────

#[test]
fn test_version_flag() {
    let out = run(&["--version"], None);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("runelink "));
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let quiet = run(&["check", &fixture("line.txt"), &fixture("line_ok.txt")], None);
    let loud = run(
        &["-v", "check", &fixture("line.txt"), &fixture("line_ok.txt")],
        None,
    );
    assert_eq!(stdout(&quiet), stdout(&loud));
    assert!(!stderr(&loud).is_empty());
}
