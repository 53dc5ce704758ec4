// Colored terminal output for validation verdicts.

use colored::Colorize;

use super::risk_band;
use crate::validation::ValidationResult;

/// Display a single verdict in the terminal.
pub fn display_result(result: &ValidationResult) {
    let verdict = if result.is_safe {
        "SAFE".green().bold()
    } else {
        "FLAGGED".red().bold()
    };
    println!("\n  {}  {}", verdict, result.message);

    let band = risk_band(result.risk_score);
    println!(
        "  {:<14} {} ({})",
        "Risk score:".dimmed(),
        result.risk_score,
        colorize_band(band),
    );

    if result.is_safe {
        println!();
        return;
    }

    println!(
        "  {:<14} {}",
        "Violations:".dimmed(),
        result.violations.join(", ")
    );
    println!(
        "  {:<14} {}",
        "Flagged terms:".dimmed(),
        result
            .flagged_terms
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
}

fn colorize_band(band: &str) -> colored::ColoredString {
    match band {
        "severe" => band.red().bold(),
        "high" => band.bright_red(),
        "moderate" => band.yellow(),
        "low" => band.green(),
        _ => band.dimmed(),
    }
}
