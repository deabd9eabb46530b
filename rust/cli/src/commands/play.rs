//! # Play Command
//!
//! Interactive bingo for several players sharing one terminal.
//!
//! The command asks how many people will play, asks each player's name,
//! deals one word list per player and lets every player pick a list by
//! number. Then it calls words with a pause between turns until the game
//! is over.
//!
//! ## Input handling
//!
//! - Non-numeric answers are reported and asked again
//! - `q` / `quit` or end of input stops setup (exit code 130)
//! - A number that does not name an unclaimed list is fatal

use crate::config::Until;
use crate::error::CliError;
use crate::formatters::format_offer;
use crate::io_utils::read_stdin_line;
use crate::session::{load_word_pool, resolve_settings, run_game, write_cards};
use crate::ui;
use crate::validation::{
    ParseResult, normalize_player_name, parse_player_count, parse_selection,
};
use bingo_engine::deal::{CardSelector, Offers, PlayerNames};
use bingo_engine::errors::BingoError;
use bingo_engine::game::Game;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;
use std::io::{BufRead, Write};

/// Terminal streams shared by the setup prompts.
struct Console<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    input: &'a mut dyn BufRead,
    io_error: Option<std::io::Error>,
}

impl Console<'_> {
    /// Ask until `parse` accepts the answer. `None` on quit, EOF or a
    /// failed read or write (kept in `io_error`).
    fn ask<T>(&mut self, question: &str, parse: impl Fn(&str) -> ParseResult<T>) -> Option<T> {
        loop {
            if let Err(e) = ui::prompt(&mut *self.out, question) {
                self.io_error = Some(e);
                return None;
            }
            let line = match read_stdin_line(&mut *self.input) {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    self.io_error = Some(e);
                    return None;
                }
            };
            match parse(&line) {
                ParseResult::Value(v) => return Some(v),
                ParseResult::Quit => return None,
                ParseResult::Invalid(msg) => {
                    if let Err(e) = ui::write_error(&mut *self.err, &msg) {
                        self.io_error = Some(e);
                        return None;
                    }
                }
            }
        }
    }

    fn show_offers(&mut self, offers: &Offers) -> std::io::Result<()> {
        writeln!(self.out)?;
        for (index, words) in offers.unclaimed() {
            writeln!(self.out, "{}", format_offer(index, words))?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn aborted(&mut self) -> CliError {
        match self.io_error.take() {
            Some(e) => CliError::Io(e),
            None => CliError::Interrupted("setup stopped before the game started".to_string()),
        }
    }
}

struct NamePrompt<'c, 'a>(&'c RefCell<Console<'a>>);

impl PlayerNames for NamePrompt<'_, '_> {
    fn name_for(&mut self, seat: usize) -> Option<String> {
        self.0
            .borrow_mut()
            .ask(&format!("Player {} name: ", seat + 1), |line| {
                ParseResult::Value(normalize_player_name(line, seat))
            })
    }
}

struct CardPrompt<'c, 'a>(&'c RefCell<Console<'a>>);

impl CardSelector for CardPrompt<'_, '_> {
    fn choose(&mut self, player: &str, offers: &Offers) -> Option<usize> {
        let mut console = self.0.borrow_mut();
        if let Err(e) = console.show_offers(offers) {
            console.io_error = Some(e);
            return None;
        }
        console.ask(
            &format!("{} choose your word list from the previous words: ", player),
            parse_selection,
        )
    }
}

/// Handle the play command: interactive setup followed by the turn loop.
///
/// # Arguments
///
/// * `words` - Path to the word list
/// * `seed` - RNG seed (config, then random, when absent)
/// * `delay_ms` - Pause between turns (config default 3500 ms)
/// * `until` - Stop after the first winner or play until everyone has won
/// * `log` - Optional JSONL turn log path
/// * `color` - Color the called word and winner lines
/// * `out` - Output stream for prompts and game display
/// * `err` - Error stream for warnings and re-prompt messages
/// * `stdin` - Input stream for answers
///
/// # Returns
///
/// * `Ok(())` once the game is over
/// * `Err(CliError::Interrupted)` if a player quits or input ends during setup
/// * `Err(CliError::Engine)` for an invalid card choice or a too-small word list
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    words: &str,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    until: Option<Until>,
    log: Option<&str>,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let settings = resolve_settings(seed, delay_ms, until, color)?;
    let pool = load_word_pool(words, err)?;

    let console = RefCell::new(Console {
        out,
        err,
        input: stdin,
        io_error: None,
    });

    let players = console.borrow_mut().ask(
        "Welcome to Bingo! How many people will play? ",
        parse_player_count,
    );
    let Some(players) = players else {
        return Err(console.borrow_mut().aborted());
    };

    let rng = ChaCha20Rng::seed_from_u64(settings.seed);
    let setup = Game::setup(
        players,
        pool,
        settings.shape,
        rng,
        &mut NamePrompt(&console),
        &mut CardPrompt(&console),
    );
    let mut console = console.into_inner();
    let mut game = match setup {
        Ok(game) => game,
        Err(BingoError::SetupAborted { .. }) => return Err(console.aborted()),
        Err(e) => return Err(e.into()),
    };
    let out = console.out;

    writeln!(out)?;
    writeln!(out, "These are the cards (seed={}):", settings.seed)?;
    writeln!(out)?;
    write_cards(&game, out)?;
    writeln!(out, "Alright, time to start!")?;
    writeln!(out)?;

    run_game(&mut game, &settings, log, out)
}
