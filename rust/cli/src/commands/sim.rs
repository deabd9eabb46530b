//! # Sim Command
//!
//! Plays a whole game without prompts. Players are named by seat and each
//! takes the first unclaimed card, and there is no pause between turns. With
//! a fixed seed the output is identical from run to run.

use crate::config::Until;
use crate::error::CliError;
use crate::session::{load_word_pool, resolve_settings, run_game, write_cards};
use bingo_engine::deal::{FirstUnclaimed, SeatNames};
use bingo_engine::game::Game;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Handle the sim command.
///
/// # Errors
///
/// * `CliError::InvalidInput` if `players` is zero or the word list is unreadable
/// * `CliError::Engine` if the pool cannot fill every card
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    words: &str,
    players: usize,
    seed: Option<u64>,
    until: Option<Until>,
    log: Option<&str>,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if players == 0 {
        return Err(CliError::InvalidInput("players must be >= 1".to_string()));
    }
    let settings = resolve_settings(seed, Some(0), until, color)?;
    let pool = load_word_pool(words, err)?;

    writeln!(
        out,
        "sim: players={} seed={} until={}",
        players,
        settings.seed,
        settings.until.as_str()
    )?;

    let rng = ChaCha20Rng::seed_from_u64(settings.seed);
    let mut game = Game::setup(
        players,
        pool,
        settings.shape,
        rng,
        &mut SeatNames,
        &mut FirstUnclaimed,
    )?;
    write_cards(&game, out)?;
    run_game(&mut game, &settings, log, out)
}
