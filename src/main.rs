//! litmus - Main Entry Point
//!
//! Command-line entry point for the smoke-test sequence. Runs the fixed
//! sequence once and exits 0 if every required step succeeded, 1 otherwise.

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use litmus::{engine, SmokeRunner};

#[derive(Parser)]
#[command(name = "litmus")]
#[command(about = "litmus - SQLite Engine Smoke Test")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Print engine compile options and step-level diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "litmus=debug" } else { "litmus=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Open the database
    let runner = match SmokeRunner::open() {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if cli.verbose {
        match engine::compile_options(runner.connection()) {
            Ok(options) => {
                println!("Compile options:");
                for option in options {
                    println!("  {}", option);
                }
            }
            Err(e) => eprintln!("Error reading compile options: {}", e),
        }
    }

    // Run the remaining steps; the first failure ends the sequence
    if let Err(e) = runner.run() {
        eprintln!("{}", e);
        process::exit(1);
    }
}
