//! Fixed test battery evaluated against [`count_valid_combinations`].

use log::{debug, info, warn};
use num_bigint::BigUint;

use crate::catalan::count_valid_combinations;
use bracket_combinations_shared_kernel::PairCount;

/// `(pairs, expected combinations)` run by the self-test.
const DEFAULT_CASES: &[(u64, u64)] = &[(2, 2), (3, 5), (0, 1), (1, 1), (4, 14), (5, 42)];

/// One input with the answer it must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub input: PairCount,
    pub expected: BigUint,
}

impl TestCase {
    #[must_use]
    pub fn new(input: u64, expected: u64) -> Self {
        Self {
            input: PairCount::new(input),
            expected: BigUint::from(expected),
        }
    }
}

/// A test case together with what was actually computed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub case: TestCase,
    pub actual: BigUint,
}

impl CaseOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.actual == self.case.expected
    }
}

/// Outcomes in the order the cases were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatteryReport {
    outcomes: Vec<CaseOutcome>,
}

impl BatteryReport {
    #[must_use]
    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    /// True when no case failed. An empty battery passes.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::passed)
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }
}

impl FromIterator<CaseOutcome> for BatteryReport {
    fn from_iter<I: IntoIterator<Item = CaseOutcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

/// The built-in vectors, in the order they are reported.
#[must_use]
pub fn default_battery() -> Vec<TestCase> {
    DEFAULT_CASES
        .iter()
        .map(|&(input, expected)| TestCase::new(input, expected))
        .collect()
}

/// Evaluates every case; a failure does not stop the remaining ones.
#[must_use]
pub fn run_battery(cases: &[TestCase]) -> BatteryReport {
    let report: BatteryReport = cases
        .iter()
        .map(|case| {
            let actual = count_valid_combinations(case.input);
            let outcome = CaseOutcome {
                case: case.clone(),
                actual,
            };
            if outcome.passed() {
                debug!("case {} passed", case.input);
            } else {
                warn!(
                    "case {} failed: expected {}, got {}",
                    case.input, case.expected, outcome.actual
                );
            }
            outcome
        })
        .collect();

    info!(
        "battery finished: {} passed, {} failed",
        report.passed_count(),
        report.failed_count()
    );
    report
}
