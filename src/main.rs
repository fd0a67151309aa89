//! Plandiff CLI entrypoint.
//!
//! Loads a plan JSON file, computes the diff, and prints the tree summary.

use std::process::ExitCode;

use plandiff::cli::{Cli, OutputFormat, OutputFormatter};
use plandiff::diff::DiffEngine;
use plandiff::error::Result;
use plandiff::plan::Plan;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the plan, computes the diff, and prints the requested output.
fn run(cli: Cli) -> Result<()> {
    info!("Loading plan from {}", cli.plan_file.display());
    let plan = Plan::from_file(&cli.plan_file)?;
    debug!("Plan holds {} resource change(s)", plan.resource_changes.len());

    let engine = DiffEngine::new();
    let diff = engine.parse_diff(&plan)?;
    let counts = engine.parse_counts(&plan)?;

    let formatter = OutputFormatter::new(cli.output);

    if cli.summary_only {
        println!("{}", formatter.format_summary_line(&counts));
        return Ok(());
    }

    if cli.detailed && cli.output == OutputFormat::Text {
        let table = OutputFormatter::format_detail_table(&diff);
        if !table.is_empty() {
            println!("{table}\n");
        }
    }

    println!("{}", formatter.format_diff(&diff, &counts));
    Ok(())
}
