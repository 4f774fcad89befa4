// crates/shared-kernel/src/lib.rs

pub use error::{BracketError, ErrorContext, InvalidInput, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::PairCount;
