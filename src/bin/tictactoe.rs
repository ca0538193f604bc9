//! Tic-tac-toe CLI - play against the engine or pit difficulties against each other
//!
//! - Selecting the engine's move for a single position
//! - Interactive games on the terminal
//! - Engine-vs-engine series with aggregated results

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe against a three-tier computer opponent", long_about = None)]
struct Cli {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the engine's move for a board
    Select(tictactoe_engine::cli::commands::select::SelectArgs),

    /// Play an interactive game as X
    Play(tictactoe_engine::cli::commands::play::PlayArgs),

    /// Play a series between two difficulties
    Simulate(tictactoe_engine::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Select(args) => tictactoe_engine::cli::commands::select::execute(args),
        Commands::Play(args) => tictactoe_engine::cli::commands::play::execute(args),
        Commands::Simulate(args) => tictactoe_engine::cli::commands::simulate::execute(args),
    }
}
