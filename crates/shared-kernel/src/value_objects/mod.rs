// crates/shared-kernel/src/value_objects/mod.rs
pub mod pair_count;

pub use pair_count::PairCount;
