//! # bingo-engine: Word Bingo Core
//!
//! Deals randomized word cards to players from a shared word pool, then calls
//! words one at a time, marks the card holding each word, and retires cards
//! as they win. Rendering, prompts and file loading live in the CLI crate;
//! this crate only hands out structured turn results.
//!
//! ## Core Modules
//!
//! - [`words`] - The word pool and its dealing view
//! - [`card`] - Card grid, marking and win detection
//! - [`deal`] - Disjoint subset dealing and card selection seams
//! - [`game`] - Setup, the turn loop and stats
//! - [`logger`] - JSONL turn records
//! - [`errors`] - Error types for setup and play
//!
//! ## Quick Start
//!
//! ```rust
//! use bingo_engine::card::Shape;
//! use bingo_engine::deal::{FirstUnclaimed, SeatNames};
//! use bingo_engine::game::Game;
//! use bingo_engine::words::WordPool;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let pool: WordPool = (0..40).map(|i| format!("word{}", i)).collect();
//! let rng = ChaCha20Rng::seed_from_u64(42);
//! let mut game = Game::setup(2, pool, Shape::default(), rng, &mut SeatNames, &mut FirstUnclaimed)
//!     .expect("40 words are enough for two cards");
//!
//! while !game.is_complete() {
//!     let report = game.play_turn().expect("pool outlasts the cards");
//!     println!("{} -> {}", report.word, report.outcome);
//! }
//! assert_eq!(game.stats().winners.len(), 2);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Dealing and word calls share one RNG. The same seed and the same word
//! pool produce the same cards and the same call order.

pub mod card;
pub mod deal;
pub mod errors;
pub mod game;
pub mod logger;
pub mod words;
