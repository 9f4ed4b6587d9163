//! Output formatting and progress indicators for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Error, Result, solver::ActionDistribution};

/// Create a spinner for long-running work
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
        .map_err(|e| Error::ProgressBarTemplate {
            message: e.to_string(),
        })?;
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render a distribution as a 3x3 grid of probabilities
pub fn format_distribution(distribution: &ActionDistribution) -> String {
    (0..3)
        .map(|row| {
            (0..3)
                .map(|col| distribution.probability(row * 3 + col).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
