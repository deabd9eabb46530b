//! Shared game driver for the `play` and `sim` commands.
//!
//! Resolves settings from flags and configuration, loads the word pool, and
//! runs the turn loop while printing each [`TurnReport`].

use std::io::Write;
use std::time::Duration;

use bingo_engine::card::Shape;
use bingo_engine::game::{Game, TurnOutcome, TurnReport};
use bingo_engine::logger::{TurnLogger, TurnRecord};
use bingo_engine::words::WordPool;
use crossterm::style::Color;
use tracing::debug;

use crate::config::{self, Until};
use crate::error::CliError;
use crate::formatters::{format_card, format_outcome, format_summary, paint};
use crate::io_utils::read_text_auto;
use crate::ui;

/// Effective settings for one game after flags override configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub seed: u64,
    pub shape: Shape,
    pub delay: Duration,
    pub until: Until,
    /// Color the called word and the winner announcement
    pub color: bool,
}

/// Merge command-line flags over the loaded configuration. A missing seed
/// is drawn at random so it can still be printed and replayed.
pub fn resolve_settings(
    seed: Option<u64>,
    delay_ms: Option<u64>,
    until: Option<Until>,
    color: bool,
) -> Result<Settings, CliError> {
    let cfg = config::load_with_sources()?.config;
    Ok(Settings {
        seed: seed.or(cfg.seed).unwrap_or_else(rand::random),
        shape: Shape::new(cfg.rows, cfg.columns),
        delay: Duration::from_millis(delay_ms.unwrap_or(cfg.turn_delay_ms)),
        until: until.unwrap_or(cfg.until),
        color,
    })
}

/// Read and parse a word list, warning about entries that cannot be dealt.
pub fn load_word_pool(path: &str, err: &mut dyn Write) -> Result<WordPool, CliError> {
    let text = read_text_auto(path)
        .map_err(|e| CliError::InvalidInput(format!("cannot read word list {}", e)))?;
    let pool = WordPool::parse(&text);
    if pool.is_empty() {
        return Err(CliError::InvalidInput(format!("word list {} is empty", path)));
    }
    let repeated = pool.len() - pool.dealable().len();
    if repeated > 0 {
        ui::display_warning(
            err,
            &format!("{} repeated words will only be used once", repeated),
        )?;
    }
    debug!(path, words = pool.len(), free = pool.free_spaces(), "word list loaded");
    Ok(pool)
}

/// Print every active card under a heading.
pub fn write_cards<R: rand::Rng>(game: &Game<R>, out: &mut dyn Write) -> Result<(), CliError> {
    for view in game.snapshot() {
        writeln!(out, "{} has the following card:", view.owner)?;
        write!(out, "{}", format_card(&view))?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_turn(report: &TurnReport, color: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let called = format!("Turn {}: the word is {}", report.turn, report.word);
    writeln!(out, "{}", paint(&called, Color::Blue, color))?;
    let outcome = format_outcome(report);
    match report.outcome {
        TurnOutcome::Won { .. } => writeln!(out, "{}", paint(&outcome, Color::Green, color))?,
        _ => writeln!(out, "{}", outcome)?,
    }
    if let Some(card) = &report.winning_card {
        write!(out, "{}", format_card(card))?;
    }
    if !report.active.is_empty() {
        writeln!(out, "The players have the following cards:")?;
        for view in &report.active {
            writeln!(out, "Player {} has this card:", view.owner)?;
            write!(out, "{}", format_card(view))?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Call words until the game is over, or until the first bingo when
/// `settings.until` is [`Until::First`].
pub fn run_game<R: rand::Rng>(
    game: &mut Game<R>,
    settings: &Settings,
    log: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut logger = match log {
        Some(path) => Some(TurnLogger::create(path)?),
        None => None,
    };
    let game_id = logger.as_mut().map(TurnLogger::next_game_id);

    while !game.is_complete() {
        if settings.until == Until::First && !game.stats().winners.is_empty() {
            break;
        }
        let report = game.play_turn()?;
        write_turn(&report, settings.color, out)?;
        if let (Some(logger), Some(id)) = (logger.as_mut(), game_id.as_deref()) {
            logger.write(&TurnRecord::from_report(id, Some(settings.seed), &report))?;
        }
        if !settings.delay.is_zero() && !game.is_complete() {
            out.flush()?;
            std::thread::sleep(settings.delay);
        }
    }

    write!(out, "{}", format_summary(game.stats()))?;
    Ok(())
}
