// Output formatting: terminal display for the `check` command.

pub mod terminal;

/// Display-only bucket for a risk score. Not part of the JSON contract.
pub fn risk_band(score: u32) -> &'static str {
    match score {
        0 => "none",
        1..=25 => "low",
        26..=50 => "moderate",
        51..=75 => "high",
        _ => "severe",
    }
}
