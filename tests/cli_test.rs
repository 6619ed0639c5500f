use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reflow() -> Command {
    Command::cargo_bin("reflow").unwrap()
}

#[test]
fn test_help() {
    reflow().arg("--help").assert().success();
}

#[test]
fn test_version() {
    reflow().arg("--version").assert().success();
}

#[test]
fn test_reflows_stdin_at_given_width() {
    reflow()
        .args(["--width", "10"])
        .write_stdin("aa bb cc dd ee ff\n")
        .assert()
        .success()
        .stdout("aa bb cc\ndd ee ff\n");
}

#[test]
fn test_short_width_flag() {
    reflow()
        .args(["-w", "20"])
        .write_stdin("one two three four five six seven eight nine ten\n")
        .assert()
        .success()
        .stdout("one two three\nfour five six\nseven eight nine ten\n");
}

#[test]
fn test_default_width_leaves_short_lines_alone() {
    reflow()
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn test_quote_prefix_preserved() {
    reflow()
        .write_stdin("> hello world\n> foo bar\n")
        .assert()
        .success()
        .stdout("> hello world foo bar\n");
}

#[test]
fn test_blank_lines_separate_blocks() {
    reflow()
        .write_stdin("a\n\nb\n")
        .assert()
        .success()
        .stdout("a\n\nb\n");
}

#[test]
fn test_word_too_long_fails_with_message() {
    reflow()
        .args(["--width", "3"])
        .write_stdin("abcdef\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("word too long: abcdef"));
}

#[test]
fn test_zero_width_is_rejected() {
    reflow()
        .args(["--width", "0"])
        .write_stdin("a\n")
        .assert()
        .failure();
}

#[test]
fn test_reads_file_argument() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "aa bb cc dd ee ff\n").unwrap();

    reflow()
        .args(["--width", "10"])
        .arg(&path)
        .assert()
        .success()
        .stdout("aa bb cc\ndd ee ff\n");
}

#[test]
fn test_missing_file_fails() {
    reflow()
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn test_output_is_stable_across_runs() {
    let input = "the quick brown fox jumps over the lazy dog\n";
    let first = reflow()
        .args(["--width", "15"])
        .write_stdin(input)
        .assert()
        .success();
    let first_out = first.get_output().stdout.clone();

    reflow()
        .args(["--width", "15"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(first_out);
}
