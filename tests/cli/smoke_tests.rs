use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bracket_combinations"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bracket_combinations"))
        .stdout(predicate::str::contains("--self-test"));
}

#[test]
fn shows_version() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn self_test_passes_every_case() {
    let assert = bin().arg("--self-test").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.starts_with("== RUNNING SAMPLE TEST CASES ==\n"));
    assert_eq!(stdout.matches("== INPUT ==").count(), 6);
    assert_eq!(stdout.matches("<< CORRECT >>").count(), 6);
    assert!(!stdout.contains("<< WRONG >>"));
    assert!(stdout.ends_with("✓ All test cases passed!\n"));
}

#[test]
fn reads_pair_count_from_stdin() {
    bin().write_stdin("3\n").assert().success().stdout("5\n");
}

#[test]
fn known_scenarios() {
    for (input, expected) in [("0", "1\n"), ("1", "1\n"), ("2", "2\n"), ("4", "14\n"), ("5", "42\n")] {
        bin().write_stdin(input).assert().success().stdout(expected);
    }
}

#[test]
fn rejects_non_numeric_input() {
    bin()
        .write_stdin("abc\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::eq("Error: Invalid input: 'abc' is not an integer\n"));
}

#[test]
fn rejects_negative_input() {
    bin()
        .write_stdin("-1\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::eq(
            "Error: Invalid input: -1 is negative; the number of pairs must be zero or more\n",
        ));
}

#[test]
fn rejects_empty_input() {
    bin()
        .write_stdin("\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::eq("Error: Invalid input: no value supplied\n"));
}

#[test]
fn reports_unreadable_input_once() {
    bin()
        .write_stdin(vec![0xff_u8, b'\n'])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::eq(
            "Error: failed to read pair count: IO error: stream did not contain valid UTF-8\n",
        ));
}
