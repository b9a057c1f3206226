//! Formatting utilities for terminal output

use crate::core::{Lyric, Outcome};

/// Uppercase letter for display, or "any" when unconstrained
#[must_use]
pub fn letter_label(letter: Option<char>) -> String {
    letter.map_or_else(|| "any".to_string(), |c| c.to_uppercase().collect())
}

/// One numbered line of the choice menu
#[must_use]
pub fn choice_line(number: i64, text: &str) -> String {
    format!("{number:3}) {text}")
}

/// Numbered menu for a list of lyrics, 1-based
#[must_use]
pub fn choice_lines(choices: &[Lyric]) -> Vec<String> {
    choices
        .iter()
        .zip(1_i64..)
        .map(|(lyric, number)| choice_line(number, lyric.text()))
        .collect()
}

/// The closing line announcing the winner
#[must_use]
pub fn outcome_line(human: &str, bot: &str, outcome: Outcome) -> String {
    match outcome {
        Outcome::Tie => "Antakshari: Game Tied".to_string(),
        Outcome::HumanWins => format!("{human} wins Antakshari"),
        Outcome::BotWins => format!("{bot} wins Antakshari"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
