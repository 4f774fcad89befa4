// crates/shared-kernel/src/value_objects/pair_count.rs
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInput;

/// Number of bracket pairs, validated to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PairCount(u64);

impl PairCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for PairCount {
    type Error = InvalidInput;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| InvalidInput::Negative {
                value: value.to_string(),
            })
    }
}

/// Accepts surrounding whitespace and an optional sign. `-0` is zero.
impl FromStr for PairCount {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidInput::Empty);
        }

        let (negative, digits) = split_sign(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidInput::NotAnInteger {
                value: trimmed.to_string(),
            });
        }
        if negative && digits.bytes().any(|b| b != b'0') {
            return Err(InvalidInput::Negative {
                value: trimmed.to_string(),
            });
        }

        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| InvalidInput::TooLarge {
                value: trimmed.to_string(),
                max: u64::MAX,
            })
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

impl fmt::Display for PairCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
