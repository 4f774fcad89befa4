pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod version;

pub use version::VERSION;
