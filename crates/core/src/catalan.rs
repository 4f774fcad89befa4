//! Counting balanced bracket arrangements.
//!
//! The number of well-formed sequences of `n` bracket pairs is the `n`-th
//! Catalan number, `C(n) = binomial(2n, n) / (n + 1)`. Every value here is an
//! exact [`BigUint`]; nothing is approximated or truncated.

use log::trace;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::Result;
use bracket_combinations_shared_kernel::PairCount;

/// Returns the number of valid combinations of `pairs` bracket pairs.
///
/// `0` pairs yield `1`: the empty arrangement is itself balanced.
///
/// # Limits
///
/// The result is exact for every `n` and never overflows, but the cost is
/// `n` big-integer multiply/divide steps on numbers of roughly `2n` bits.
/// Any `n` up to `u64::MAX` is accepted; counts in the millions of pairs take
/// noticeable time and memory, and values near `u64::MAX` will not finish.
#[must_use]
pub fn count_valid_combinations(pairs: PairCount) -> BigUint {
    let n = pairs.value();
    let central = central_binomial(n);
    let divisor = u128::from(n) + 1;

    debug_assert!(
        (&central % divisor).is_zero(),
        "binomial(2n, n) must be divisible by n + 1"
    );

    let count = central / divisor;
    trace!("catalan({n}) = {count}");
    count
}

/// Validates `input` as a pair count and counts its combinations.
///
/// # Errors
///
/// Returns [`BracketError::InvalidInput`](crate::error::BracketError::InvalidInput)
/// for empty, non-numeric, negative or out-of-range text.
pub fn count_valid_combinations_str(input: &str) -> Result<BigUint> {
    let pairs: PairCount = input.parse()?;
    Ok(count_valid_combinations(pairs))
}

/// Signed front door; negative values are rejected.
///
/// # Errors
///
/// Returns [`BracketError::InvalidInput`](crate::error::BracketError::InvalidInput)
/// when `n` is negative.
pub fn count_valid_combinations_i64(n: i64) -> Result<BigUint> {
    let pairs = PairCount::try_from(n)?;
    Ok(count_valid_combinations(pairs))
}

/// Exact binomial coefficient `C(a, b)`; zero when `b > a`.
#[must_use]
pub fn binomial(a: u64, b: u64) -> BigUint {
    if b > a {
        return BigUint::zero();
    }
    let k = b.min(a - b);
    choose_after(a - k, k)
}

/// `binomial(2n, n)` without overflowing `2n` for large `n`.
#[must_use]
pub fn central_binomial(n: u64) -> BigUint {
    choose_after(n, n)
}

/// `C(base + k, k)` as the running product of `(base + i) / i`.
///
/// After step `i` the accumulator equals `C(base + i, i)`, so each division
/// is exact.
fn choose_after(base: u64, k: u64) -> BigUint {
    let mut acc = BigUint::one();
    for i in 1..=k {
        acc *= u128::from(base) + u128::from(i);
        acc /= i;
    }
    acc
}

/// Catalan numbers in order, starting from `C(0)`.
///
/// Uses `C(k + 1) = C(k) * 2 * (2k + 1) / (k + 2)`, independent of the
/// closed form above.
#[derive(Debug, Clone)]
pub struct CatalanSequence {
    index: u64,
    current: BigUint,
}

impl CatalanSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: 0,
            current: BigUint::one(),
        }
    }
}

impl Default for CatalanSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CatalanSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let k = u128::from(self.index);
        let value = self.current.clone();
        self.current *= 2 * (2 * k + 1);
        self.current /= k + 2;
        self.index = self.index.checked_add(1)?;
        Some(value)
    }
}
