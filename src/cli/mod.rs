//! Command-line interface module.
//!
//! This module provides argument parsing and output formatting for the
//! plandiff binary.

mod commands;
mod output;

pub use commands::{Cli, OutputFormat};
pub use output::OutputFormatter;
