// src/cli/args.rs
use clap::Parser;

/// Top-level CLI arguments parsed via clap.
///
/// Without flags the program reads one pair count from stdin and prints the
/// number of balanced bracket arrangements.
#[derive(Parser, Debug)]
#[command(
    name = "bracket_combinations",
    version = crate::VERSION,
    about = "Counts valid combinations of n bracket pairs (the n-th Catalan number)"
)]
pub struct Args {
    /// Run the built-in test battery and report each verdict
    #[arg(long)]
    pub self_test: bool,
}
