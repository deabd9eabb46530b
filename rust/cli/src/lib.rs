//! # Bingo CLI Library
//!
//! Command-line front end for the word bingo engine. Players share one
//! terminal: they type their names, pick a word list each, then watch the
//! words being called until every card is complete.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["bingo", "sim", "words.txt", "--players", "3", "--seed", "7"];
//! let code = bingo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive game with prompts for players, names and cards
//! - `sim`: Non-interactive game with seat names and the first free card
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{BingoCli, Commands};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when a player quits during setup
///
/// # Example
///
/// ```
/// use std::io;
/// let code = bingo_cli::run(["bingo", "cfg"], &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    run_with_color(args, out, err, false)
}

/// Same as [`run`], but colors the called word and winner lines when
/// `color` is set. The binary turns it on only when stdout is a terminal.
pub fn run_with_color<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write, color: bool) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BingoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Word bingo CLI");
            write_or_exit!(err, "Usage: bingo <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: bingo --help");
            return exit_code::ERROR;
        }
    };

    tracing::debug!(command = cli.cmd.name(), "dispatching");
    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            words,
            seed,
            delay_ms,
            until,
            log,
        } => {
            // Real stdin works for both a TTY and piped answers
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(
                &words,
                seed,
                delay_ms,
                until,
                log.as_deref(),
                color,
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Sim {
            words,
            players,
            seed,
            until,
            log,
        } => handle_sim_command(&words, players, seed, until, log.as_deref(), color, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            match e {
                CliError::Interrupted(_) => exit_code::INTERRUPTED,
                _ => exit_code::ERROR,
            }
        }
    }
}
