//! smartcab CLI - Q-learning driving agent simulations
//!
//! This CLI provides a unified interface for:
//! - Running learning simulations in the synthetic traffic world
//! - Rendering saved performance reports

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "smartcab")]
#[command(version, about = "Q-learning driving agent toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a learning simulation
    Train(smartcab::cli::commands::train::TrainArgs),

    /// Render a saved performance report
    Report(smartcab::cli::commands::report::ReportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => smartcab::cli::commands::train::execute(args),
        Commands::Report(args) => smartcab::cli::commands::report::execute(args),
    }
}
