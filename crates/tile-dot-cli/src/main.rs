use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tile_dot::Backend;
use tracing_subscriber::EnvFilter;

mod commands;

/// Top-level CLI argument parser for the `tdot` command
#[derive(Parser)]
#[command(
    name = "tdot",
    about = "tile-dot: run and check the per-tile dot product vertex",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `tdot` CLI
#[derive(Subcommand)]
enum Commands {
    /// Validate a YAML case file
    Validate {
        /// Path to the case YAML file
        cases: PathBuf,
    },
    /// Run every case through the vertex and check expectations
    Eval {
        /// Path to the case YAML file
        cases: PathBuf,
        /// Override the backend for every case: scalar, avx2, or ptx
        #[arg(long)]
        backend: Option<Backend>,
    },
    /// Compare the AVX2 backend against the scalar reference
    Parity {
        /// Path to the case YAML file
        cases: PathBuf,
    },
    /// Print the PTX source of the device vertex
    Ptx,
}

/// Dispatch a parsed CLI subcommand to its handler
fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Validate { cases } => commands::validate::run(&cases),
        Commands::Eval { cases, backend } => commands::eval::run(&cases, backend),
        Commands::Parity { cases } => commands::parity::run(&cases),
        Commands::Ptx => commands::ptx::run(),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point: parse CLI arguments and run the selected subcommand
fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run_command(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
