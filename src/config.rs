// src/config.rs
use bracket_combinations_core::{TestCase, default_battery};
use derive_builder::Builder;

use crate::cli::Args;

/// What the binary does once arguments are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Read one pair count from stdin and print the bare result.
    #[default]
    Stdin,
    /// Evaluate the test battery and print a per-case report.
    SelfTest,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub mode: RunMode,
    #[builder(default = "default_battery()")]
    pub battery: Vec<TestCase>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            battery: default_battery(),
        }
    }
}

impl Config {
    /// Builds the run configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder rejects the assembled fields.
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let mode = if args.self_test {
            RunMode::SelfTest
        } else {
            RunMode::Stdin
        };

        Ok(ConfigBuilder::default().mode(mode).build()?)
    }
}
