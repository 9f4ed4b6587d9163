//! Lookup command - show the optimal decision for a single history

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::JsonRepository,
    cli::output::{format_distribution, print_kv, print_section},
    identifiers::HistoryKey,
    ports::PolicyRepository,
    solver::{self, PolicyTables},
    tictactoe::GameState,
};

#[derive(Parser, Debug)]
#[command(about = "Show the optimal action recorded for a move history")]
pub struct LookupArgs {
    /// Move history as cell digits in play order, e.g. `04` (empty for the root)
    #[arg(default_value = "")]
    pub history: String,

    /// Directory with saved JSON policies (solves in memory when omitted)
    #[arg(long)]
    pub from: Option<PathBuf>,
}

pub fn execute(args: LookupArgs) -> Result<()> {
    let key = HistoryKey::parse(args.history.trim())?;
    let state = GameState::from_key(&key)?;

    let tables = match &args.from {
        Some(dir) => JsonRepository::new()
            .load(dir)
            .with_context(|| format!("failed to load policies from {}", dir.display()))?,
        None => solver::solve()?.tables,
    };

    describe(&state, &tables)
}

fn describe(state: &GameState, tables: &PolicyTables) -> Result<()> {
    let key = state.key();
    print_section(&format!("History '{key}'"));
    println!("{state}\n");

    if state.is_terminal() {
        let outcome = match state.winner() {
            Some(player) => format!("{player} wins"),
            None => "draw".to_string(),
        };
        print_kv("Terminal", &outcome);
        print_kv("Utility", &state.utility().to_string());
        return Ok(());
    }

    let Some(player) = state.active_player() else {
        return Ok(());
    };
    print_kv("To move", &player.to_string());

    let distribution = tables
        .for_player(player)
        .get(key.as_str())
        .with_context(|| format!("no policy entry for history '{key}'"))?;
    let action = distribution
        .best_action()
        .with_context(|| format!("policy entry for '{key}' selects no action"))?;
    print_kv(
        "Optimal action",
        &format!("{action} (row {}, col {})", action / 3, action % 3),
    );
    println!("\n{}\n", format_distribution(distribution));

    let end = tables.principal_line(state)?;
    let line: Vec<String> = end.moves()[state.moves().len()..]
        .iter()
        .map(|mv| mv.to_string())
        .collect();
    print_kv("Principal line", &line.join(" "));
    print_kv("Final utility", &end.utility().to_string());
    println!("\n{end}");

    Ok(())
}
