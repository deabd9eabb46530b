//! Command-line definitions for the `bingo` binary.

use clap::{Parser, Subcommand};

use crate::config::Until;

#[derive(Parser, Debug)]
#[command(
    name = "bingo",
    version,
    about = "Word bingo for several players in one terminal"
)]
pub struct BingoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game: players, names and cards are chosen at prompts
    Play {
        /// Newline-delimited word list (.zst accepted); blank lines are free spaces
        words: String,
        #[arg(long, help = "Fix RNG seed for a reproducible deal and call order")]
        seed: Option<u64>,
        #[arg(long, help = "Pause between turns in milliseconds")]
        delay_ms: Option<u64>,
        #[arg(long, value_enum)]
        until: Option<Until>,
        #[arg(long, help = "Write one JSON line per turn to this file, replacing it")]
        log: Option<String>,
    },
    /// Play a full game without prompts: seat names, first free card, no delay
    Sim {
        words: String,
        #[arg(long)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        until: Option<Until>,
        #[arg(long, help = "Write one JSON line per turn to this file, replacing it")]
        log: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Cfg => "cfg",
        }
    }
}
