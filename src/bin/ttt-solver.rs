//! Tic-Tac-Toe backward-induction solver CLI
//!
//! Solves the complete game tree and writes the optimal policy of each player,
//! or looks up the optimal decision for a single move history.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt-solver")]
#[command(version, about = "Optimal Tic-Tac-Toe policies by backward induction", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the game and write both policy tables
    Solve(ttt_solver::cli::commands::solve::SolveArgs),

    /// Show the optimal action for a move history
    Lookup(ttt_solver::cli::commands::lookup::LookupArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ttt_solver::cli::logging::init(cli.verbose)?;

    log::info!("start");
    match cli.command {
        Commands::Solve(args) => ttt_solver::cli::commands::solve::execute(args)?,
        Commands::Lookup(args) => ttt_solver::cli::commands::lookup::execute(args)?,
    }
    log::info!("end");

    Ok(())
}
