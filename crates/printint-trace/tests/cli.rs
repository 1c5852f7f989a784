//! End-to-end runs of the `printint-trace` binary.

use std::fmt::Write as _;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_printint-trace"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run printint-trace")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn print_int_log(count: u64) -> String {
    let mut log = String::from("Loading program...\n");
    for i in 1..=count {
        writeln!(log, "TRACE: Cpu::step pc={}", i * 4).unwrap();
        writeln!(log, "TRACE: Cpu::printInt pc={} value={}", i * 4, i * 10).unwrap();
    }
    log.push_str("Program exited\n");
    log
}

#[test]
fn test_default_file_two_entries() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tmp_clean.err"),
        "TRACE: Cpu::printInt pc=10 value=5\nTRACE: Cpu::printInt pc=20 value=7\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "found 2 printInt entries\n\
         1: pc=10 value=5\n\
         2: pc=20 value=7\n\
         TARGET LINE 38: no entry (only 2)\n\
         TARGET LINE 39: no entry (only 2)\n\
         TARGET LINE 52: no entry (only 2)\n\
         TARGET LINE 55: no entry (only 2)\n\
         TARGET LINE 57: no entry (only 2)\n"
    );
}

#[test]
fn test_default_targets_partially_available() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tmp_clean.err"), print_int_log(53)).unwrap();

    let output = run_in(dir.path(), &[]);
    let report = stdout(&output);
    let lines: Vec<_> = report.lines().collect();

    assert!(output.status.success());
    assert_eq!(lines[0], "found 53 printInt entries");
    assert_eq!(lines[53], "53: pc=212 value=530");
    assert_eq!(
        &lines[54..],
        [
            "TARGET LINE 38: pc=152 value=380",
            "TARGET LINE 39: pc=156 value=390",
            "TARGET LINE 52: pc=208 value=520",
            "TARGET LINE 55: no entry (only 53)",
            "TARGET LINE 57: no entry (only 53)",
        ]
    );
}

#[test]
fn test_explicit_path_and_targets() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("run.err");
    std::fs::write(&log, print_int_log(3)).unwrap();

    let output = run_in(dir.path(), &[log.to_str().unwrap(), "--target", "3,4"]);

    assert!(output.status.success());
    assert!(stdout(&output).ends_with(
        "TARGET LINE 3: pc=12 value=30\nTARGET LINE 4: no entry (only 3)\n"
    ));
}

#[test]
fn test_invalid_utf8_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tmp_clean.err"),
        b"\xc3\x28garbage\nTRACE: Cpu::printInt pc=8 value=\xff99\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["-t", "1"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "found 1 printInt entries\n1: pc=8 value=99\nTARGET LINE 1: pc=8 value=99\n"
    );
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tmp_clean.err"), "stderr: {stderr}");
}

#[test]
fn test_zero_target_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tmp_clean.err"), print_int_log(1)).unwrap();

    let output = run_in(dir.path(), &["-t", "0"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_carriage_return_separates_entries() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tmp_clean.err"),
        "TRACE: Cpu::printInt pc=1 value=5\rTRACE: Cpu::printInt pc=2 value=6\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["-t", "2"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "found 2 printInt entries\n1: pc=1 value=5\n2: pc=2 value=6\nTARGET LINE 2: pc=2 value=6\n"
    );
}
