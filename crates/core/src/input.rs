//! Reading a pair count from a line-oriented source such as stdin.

use std::io::BufRead;

use log::debug;

use crate::error::{ErrorContext, Result};
use bracket_combinations_shared_kernel::PairCount;

/// Reads the first line of `reader` and validates it as a pair count.
///
/// # Errors
///
/// Returns an I/O error wrapped in context if the line cannot be read, or
/// [`BracketError::InvalidInput`](crate::error::BracketError::InvalidInput)
/// if it is empty, non-numeric, negative or out of range.
pub fn read_pair_count<R: BufRead>(mut reader: R) -> Result<PairCount> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read pair count")?;
    debug!("read {:?}", line.trim_end());

    Ok(line.parse::<PairCount>()?)
}
