#![allow(clippy::cargo_common_metadata)]

pub mod catalan;
pub mod error;
pub mod harness;
pub mod input;

pub use catalan::{
    CatalanSequence, binomial, central_binomial, count_valid_combinations,
    count_valid_combinations_i64, count_valid_combinations_str,
};
pub use harness::{BatteryReport, CaseOutcome, TestCase, default_battery, run_battery};
pub use input::read_pair_count;
pub use bracket_combinations_shared_kernel::PairCount;
pub use num_bigint::BigUint;
