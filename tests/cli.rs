use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn day01_reports_largest_groups() {
    let file = input("1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n");
    let output = run(
        env!("CARGO_BIN_EXE_day01"),
        &["--input", file.path().to_str().unwrap()],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "groups: 5\nlargest three: 24000 11000 10000\nsum of largest three: 45000\n"
    );
}

#[test]
fn day01_totals_past_the_record_range() {
    let file = input("9223372036854775807\n1\n\n5\n");
    let output = run(
        env!("CARGO_BIN_EXE_day01"),
        &["--input", file.path().to_str().unwrap()],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "groups: 2\nlargest three: 9223372036854775808 5\nsum of largest three: 9223372036854775813\n"
    );
}

#[test]
fn day01_aborts_on_bad_record() {
    let file = input("1000\n\nlots\n2000\n");
    let output = run(
        env!("CARGO_BIN_EXE_day01"),
        &["--input", file.path().to_str().unwrap()],
    );

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 3"));
}

#[test]
fn day01_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let output = run(env!("CARGO_BIN_EXE_day01"), &["-i", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn day02_scores_both_modes() {
    let file = input("A Y\nB X\nC Z\n");
    let path = file.path().to_str().unwrap();

    let direct = run(env!("CARGO_BIN_EXE_day02"), &["-i", path, "--mode", "direct"]);
    assert!(direct.status.success());
    assert_eq!(stdout(&direct), "rounds: 3\nscore: 15\n");

    let outcome = run(env!("CARGO_BIN_EXE_day02"), &["-i", path, "--mode", "outcome"]);
    assert!(outcome.status.success());
    assert_eq!(stdout(&outcome), "rounds: 3\nscore: 12\n");

    let default = run(env!("CARGO_BIN_EXE_day02"), &["-i", path]);
    assert_eq!(stdout(&default), stdout(&outcome));
}

#[test]
fn day02_aborts_on_malformed_round() {
    for contents in ["A Y\nB\nC Z\n", "A Y\nD X\n"] {
        let file = input(contents);
        let output = run(
            env!("CARGO_BIN_EXE_day02"),
            &["-i", file.path().to_str().unwrap(), "-m", "direct"],
        );

        assert!(!output.status.success(), "{:?}", contents);
        assert_eq!(stdout(&output), "");
        assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
    }
}
