//! CLI argument definitions.
//!
//! This module defines the command-line arguments using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Plandiff - human-navigable summaries of infrastructure change plans.
#[derive(Parser, Debug)]
#[command(name = "plandiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the plan JSON file.
    #[arg(env = "PLANDIFF_PLAN_FILE")]
    pub plan_file: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Show a per-resource detail table before the diff tree.
    #[arg(short, long)]
    pub detailed: bool,

    /// Print only the compact summary line.
    #[arg(long)]
    pub summary_only: bool,
}

/// Supported output formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable colored text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}
