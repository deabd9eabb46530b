//! Card, offer and turn formatters for terminal display.
//!
//! Pure functions from engine views to strings. Nothing here writes to a
//! stream, so the play and sim commands share one look and tests can compare
//! plain strings.
//!
//! ## Example
//!
//! ```rust
//! use bingo_engine::card::CardView;
//! use bingo_cli::formatters::format_card;
//!
//! let view = CardView {
//!     owner: "ana".into(),
//!     rows: vec![vec!["cat".into(), "X".into()]],
//! };
//! let text = format_card(&view);
//! assert!(text.starts_with("+-----+-----+"));
//! assert!(text.contains("| cat |  X  |"));
//! ```

use bingo_engine::card::{CardView, MARK};
use bingo_engine::game::{GameStats, TurnOutcome, TurnReport};
use crossterm::style::{Color, Stylize, style};

/// Render a card as a bordered grid. Every cell is as wide as the widest
/// label plus one space each side, and labels are centered.
pub fn format_card(view: &CardView) -> String {
    let width = view
        .rows
        .iter()
        .flatten()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    let columns = view.rows.first().map_or(0, Vec::len);
    let rule = format!("+{}", format!("{}+", "-".repeat(width)).repeat(columns));

    let mut s = String::new();
    for row in &view.rows {
        s.push_str(&rule);
        s.push('\n');
        s.push('|');
        for label in row {
            s.push_str(&format!("{:^width$}|", label, width = width));
        }
        s.push('\n');
    }
    s.push_str(&rule);
    s.push('\n');
    s
}

/// One offered word list, numbered from 1 as players choose it.
pub fn format_offer(index: usize, words: &[String]) -> String {
    let labels: Vec<&str> = words
        .iter()
        .map(|w| if w.is_empty() { MARK } else { w.as_str() })
        .collect();
    format!("Words {}: [{}]", index + 1, labels.join(", "))
}

/// The sentence announcing what a called word did.
pub fn format_outcome(report: &TurnReport) -> String {
    match &report.outcome {
        TurnOutcome::NobodyHadIt => format!("Nobody had the word {}", report.word),
        TurnOutcome::Marked { owner } => {
            format!("Player {} had the word {} in their card.", owner, report.word)
        }
        TurnOutcome::Won { owner } => {
            format!("The winner is {} with the following board:", owner)
        }
    }
}

/// Wrap `text` in ANSI color codes when `enabled`, otherwise return it
/// unchanged.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

/// End-of-game summary with finishing order.
pub fn format_summary(stats: &GameStats) -> String {
    let mut s = format!(
        "Game over after {} turns ({} marks, {} words nobody had).\n",
        stats.turns, stats.marks, stats.nobody_had_it
    );
    for (place, owner) in stats.winners.iter().enumerate() {
        s.push_str(&format!("  {}. {}\n", place + 1, owner));
    }
    s
}
