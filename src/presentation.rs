// src/presentation.rs
use bracket_combinations_core::{BatteryReport, CaseOutcome};
use std::io::{self, Write};

/// Writes the self-test report in the sample-test layout.
///
/// # Errors
///
/// Propagates any write failure from `out`.
pub fn write_report<W: Write>(out: &mut W, report: &BatteryReport) -> io::Result<()> {
    writeln!(out, "== RUNNING SAMPLE TEST CASES ==")?;
    writeln!(out)?;

    for outcome in report.outcomes() {
        write_outcome(out, outcome)?;
    }

    if report.all_passed() {
        writeln!(out, "✓ All test cases passed!")
    } else {
        writeln!(out, "✗ Some test cases failed.")
    }
}

fn write_outcome<W: Write>(out: &mut W, outcome: &CaseOutcome) -> io::Result<()> {
    writeln!(out, "== INPUT ==")?;
    writeln!(out, "{}", outcome.case.input)?;
    writeln!(out)?;

    writeln!(out, "== OUTPUT ==")?;
    writeln!(out, "{}", outcome.actual)?;
    writeln!(out)?;

    if outcome.passed() {
        writeln!(out, "<< CORRECT >>")?;
    } else {
        writeln!(out, "<< WRONG >>")?;
        writeln!(out, "<< EXPECTED OUTPUT: {} >>", outcome.case.expected)?;
    }
    writeln!(out)
}
