//! noughts CLI - play and analyze Tic-Tac-Toe with an alpha-beta engine

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe engine with alpha-beta search", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine or watch engines play
    Play(noughts::cli::commands::play::PlayArgs),

    /// Recommend a move for a position
    BestMove(noughts::cli::commands::best_move::BestMoveArgs),

    /// Build the exhaustive game tree and print statistics
    Tree(noughts::cli::commands::tree::TreeArgs),

    /// Extract and export the strategy table
    Strategy(noughts::cli::commands::strategy::StrategyArgs),

    /// Show a board's symmetry orbit and canonical form
    Symmetry(noughts::cli::commands::symmetry::SymmetryArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "noughts=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::BestMove(args) => noughts::cli::commands::best_move::execute(args),
        Commands::Tree(args) => noughts::cli::commands::tree::execute(args),
        Commands::Strategy(args) => noughts::cli::commands::strategy::execute(args),
        Commands::Symmetry(args) => noughts::cli::commands::symmetry::execute(args),
    }
}
