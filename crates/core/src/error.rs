//! Re-export error types from the shared kernel crate.

pub use bracket_combinations_shared_kernel::{
    BracketError, ErrorContext, InvalidInput, Result,
};
