//! Tic-Tac-Toe minimax CLI
//!
//! - `solve`: report the value and optimal moves of a position
//! - `self-play`: play the searcher against itself and tally outcomes

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Optimal Tic-Tac-Toe play by exhaustive minimax", long_about = None)]
struct Cli {
    /// Log search details to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a position
    Solve(tictactoe_minimax::cli::commands::solve::SolveArgs),

    /// Play optimal moves for both sides and tally outcomes
    SelfPlay(tictactoe_minimax::cli::commands::self_play::SelfPlayArgs),
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
        Commands::Solve(args) => tictactoe_minimax::cli::commands::solve::execute(args),
        Commands::SelfPlay(args) => tictactoe_minimax::cli::commands::self_play::execute(args),
    }
}
