use crate::config::{Config, RunMode};
use crate::presentation;
use anyhow::{Context, Result};
use bracket_combinations_core::{count_valid_combinations, read_pair_count, run_battery};
use std::io::{self, BufRead, Write};

/// Runs the configured mode. `Ok(false)` means the self-test found a failure.
///
/// # Errors
///
/// Returns an error for invalid input or when stdin/stdout cannot be used.
pub fn run(config: &Config) -> Result<bool> {
    log::debug!("running in {:?} mode", config.mode);

    match config.mode {
        RunMode::SelfTest => {
            let mut out = io::stdout().lock();
            self_test(config, &mut out)
        }
        RunMode::Stdin => {
            let mut out = io::stdout().lock();
            answer(io::stdin().lock(), &mut out)?;
            Ok(true)
        }
    }
}

/// Evaluates the battery and writes its report to `out`.
///
/// # Errors
///
/// Returns an error if the report cannot be written.
pub fn self_test<W: Write>(config: &Config, out: &mut W) -> Result<bool> {
    let report = run_battery(&config.battery);
    presentation::write_report(out, &report).context("failed to write test report")?;
    out.flush().context("failed to flush test report")?;
    Ok(report.all_passed())
}

/// Reads one pair count from `input` and writes the bare count to `out`.
///
/// Nothing is written when the input is rejected.
///
/// # Errors
///
/// Returns an error for invalid input or when `out` cannot be written.
pub fn answer<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    let pairs = read_pair_count(input)?;
    let count = count_valid_combinations(pairs);
    writeln!(out, "{count}").context("failed to write result")?;
    out.flush().context("failed to flush result")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracket_combinations_core::TestCase;
    use bracket_combinations_core::error::{BracketError, InvalidInput};
    use std::io::Cursor;

    fn answer_text(input: &str) -> Result<String> {
        let mut out = Vec::new();
        answer(Cursor::new(input.to_string()), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn input_error(err: &anyhow::Error) -> Option<InvalidInput> {
        err.downcast_ref::<BracketError>()
            .and_then(BracketError::invalid_input)
            .cloned()
    }

    #[test]
    fn prints_bare_integer() {
        assert_eq!(answer_text("3\n").unwrap(), "5\n");
        assert_eq!(answer_text("0").unwrap(), "1\n");
        assert_eq!(answer_text("  5  \n").unwrap(), "42\n");
    }

    #[test]
    fn large_input_is_exact() {
        assert_eq!(answer_text("30\n").unwrap(), "3814986502092304\n");
    }

    #[test]
    fn rejects_non_numeric_and_negative_input() {
        let err = answer_text("abc\n").unwrap_err();
        assert!(matches!(input_error(&err), Some(InvalidInput::NotAnInteger { .. })));

        let err = answer_text("-1\n").unwrap_err();
        assert!(matches!(input_error(&err), Some(InvalidInput::Negative { .. })));
    }

    #[test]
    fn error_message_names_the_cause_once() {
        let err = answer_text("abc\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: 'abc' is not an integer");

        let mut out = Vec::new();
        let err = answer(Cursor::new(vec![0xff_u8, b'\n']), &mut out).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to read pair count: IO error: stream did not contain valid UTF-8"
        );
        assert!(out.is_empty());
    }

    #[test]
    fn self_test_reports_failure_as_false() {
        let config = Config {
            mode: RunMode::SelfTest,
            battery: vec![TestCase::new(2, 3)],
        };
        let mut out = Vec::new();
        assert!(!self_test(&config, &mut out).unwrap());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("<< EXPECTED OUTPUT: 3 >>"));
    }

    #[test]
    fn default_self_test_passes() {
        let mut out = Vec::new();
        assert!(self_test(&Config::default(), &mut out).unwrap());
    }
}
