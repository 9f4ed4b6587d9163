//! Solve command - run backward induction and persist both policy tables

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::{OutputFormat, SolveConfig},
        output::{create_spinner, format_number, print_kv, print_section},
    },
    solver::{self, Solution},
};

#[derive(Parser, Debug)]
#[command(about = "Solve the full game tree and write both policy tables")]
pub struct SolveArgs {
    /// Directory receiving the policy files
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Read settings from a JSON config file (flags override it)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SolveArgs {
    /// Merge the optional config file with command-line flags
    pub fn resolve(&self) -> Result<SolveConfig> {
        let mut config = match &self.config {
            Some(path) => SolveConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => SolveConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.pretty |= self.pretty;
        config.progress &= !self.no_progress;

        Ok(config)
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let config = args.resolve()?;
    log::debug!("solve config: {config:?}");

    let solution = run_solver(&config)?;
    report(&solution);

    let target = config.target();
    config
        .repository()
        .save(&solution.tables, &target)
        .with_context(|| format!("failed to write policies to {}", target.display()))?;
    log::info!("policies written to {}", target.display());

    Ok(())
}

fn run_solver(config: &SolveConfig) -> Result<Solution> {
    let spinner = if config.progress {
        Some(create_spinner("Walking the game tree...")?)
    } else {
        None
    };

    let solution = solver::solve().context("backward induction failed")?;

    if let Some(pb) = spinner {
        pb.finish_with_message(format!(
            "Visited {} histories",
            format_number(solution.stats.nodes)
        ));
    }

    Ok(solution)
}

fn report(solution: &Solution) {
    let stats = &solution.stats;

    print_section("Backward Induction");
    print_kv("Game value", &solution.value.to_string());
    print_kv("Histories visited", &format_number(stats.nodes));
    print_kv("Terminal histories", &format_number(stats.terminal()));
    print_kv("  X wins", &format_number(stats.x_wins));
    print_kv("  O wins", &format_number(stats.o_wins));
    print_kv("  Draws", &format_number(stats.draws));
    print_kv("X policy entries", &format_number(solution.tables.x.len() as u64));
    print_kv("O policy entries", &format_number(solution.tables.o.len() as u64));
    print_kv("Elapsed", &format!("{:.2?}", stats.elapsed));
}
