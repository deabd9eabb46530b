use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::card::{Card, CardView, Shape};
use crate::deal::{CardSelector, Offers, PlayerNames};
use crate::errors::BingoError;
use crate::words::WordPool;

/// What a called word did.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// No active card held the word
    NobodyHadIt,
    /// The word was marked on `owner`'s card
    Marked { owner: String },
    /// The word completed `owner`'s card, which is now retired
    Won { owner: String },
}

impl TurnOutcome {
    pub fn owner(&self) -> Option<&str> {
        match self {
            TurnOutcome::NobodyHadIt => None,
            TurnOutcome::Marked { owner } | TurnOutcome::Won { owner } => Some(owner),
        }
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOutcome::NobodyHadIt => write!(f, "NOBODY_HAD_IT"),
            TurnOutcome::Marked { .. } => write!(f, "MARKED"),
            TurnOutcome::Won { owner } => write!(f, "WON:{}", owner),
        }
    }
}

/// Everything a display needs after one turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 1-based turn number
    pub turn: u32,
    pub word: String,
    pub outcome: TurnOutcome,
    /// Cell that was marked, if any
    pub position: Option<(usize, usize)>,
    /// Final state of the card that just won
    pub winning_card: Option<CardView>,
    /// Cards still in play after this turn
    pub active: Vec<CardView>,
}

/// Running totals for a game.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub turns: u32,
    pub marks: u32,
    pub nobody_had_it: u32,
    /// Owners in the order their cards were completed
    pub winners: Vec<String>,
}

/// A bingo game: the word pool, the active cards and the turn loop.
///
/// All randomness, dealing included, comes from `rng`, so a seeded
/// generator replays the same game.
#[derive(Debug)]
pub struct Game<R: Rng = ChaCha20Rng> {
    pool: WordPool,
    callable: Vec<String>,
    cards: Vec<Card>,
    players: Vec<String>,
    rng: R,
    stats: GameStats,
}

impl<R: Rng> Game<R> {
    /// Deal cards for `player_count` players and seat them.
    ///
    /// Names are collected first, then one subset per player is dealt, then
    /// players pick a subset in seat order.
    pub fn setup(
        player_count: usize,
        pool: WordPool,
        shape: Shape,
        mut rng: R,
        names: &mut dyn PlayerNames,
        selector: &mut dyn CardSelector,
    ) -> Result<Self, BingoError> {
        if player_count == 0 {
            return Err(BingoError::Configuration(
                "a game needs at least one player".to_string(),
            ));
        }
        let cells = match shape.cells() {
            Some(0) => {
                return Err(BingoError::Configuration(format!(
                    "card shape {}x{} has no cells",
                    shape.rows, shape.columns
                )));
            }
            Some(cells) => cells,
            None => {
                return Err(BingoError::Configuration(format!(
                    "card shape {}x{} is too large",
                    shape.rows, shape.columns
                )));
            }
        };
        // Checked before anyone is asked for a name.
        let available = pool.dealable().len();
        match player_count.checked_mul(cells) {
            Some(needed) if needed <= available => {}
            needed => {
                return Err(BingoError::InsufficientWords {
                    needed: needed.unwrap_or(usize::MAX),
                    available,
                });
            }
        }

        let mut players = Vec::with_capacity(player_count);
        for seat in 0..player_count {
            let name = names
                .name_for(seat)
                .ok_or(BingoError::SetupAborted { seat })?;
            players.push(name);
        }

        let mut offers = Offers::deal(&pool, player_count, cells, &mut rng)?;
        info!(
            players = player_count,
            pool = pool.len(),
            per_card = cells,
            "dealt cards"
        );

        let mut cards = Vec::with_capacity(player_count);
        for (seat, name) in players.iter().enumerate() {
            let index = selector
                .choose(name, &offers)
                .ok_or(BingoError::SetupAborted { seat })?;
            let words = offers.claim(index)?;
            debug!(player = %name, index, "card claimed");
            cards.push(Card::new(words, shape, name.clone())?);
        }

        Ok(Self::from_cards(pool, cards, rng))
    }

    /// Start a game from cards that are already built. Every distinct pool
    /// word is callable once; repeated entries collapse like they do when
    /// dealing.
    pub fn from_cards(pool: WordPool, cards: Vec<Card>, rng: R) -> Self {
        let players = cards.iter().map(|c| c.owner().to_string()).collect();
        Self {
            callable: pool.dealable(),
            pool,
            cards,
            players,
            rng,
            stats: GameStats::default(),
        }
    }

    /// Call one word and apply it.
    pub fn play_turn(&mut self) -> Result<TurnReport, BingoError> {
        if self.callable.is_empty() {
            return Err(BingoError::PoolExhausted {
                active: self.cards.len(),
            });
        }
        let pick = self.rng.random_range(0..self.callable.len());

        let holders: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.has_word(&self.callable[pick]))
            .map(|(i, _)| i)
            .collect();
        if holders.len() > 1 {
            return Err(BingoError::Configuration(format!(
                "word '{}' is held by {} cards",
                self.callable[pick],
                holders.len()
            )));
        }

        let word = self.callable.remove(pick);
        self.stats.turns += 1;

        let mut position = None;
        let mut winning_card = None;
        let outcome = match holders.first() {
            None => {
                self.stats.nobody_had_it += 1;
                TurnOutcome::NobodyHadIt
            }
            Some(&i) => {
                position = Some(self.cards[i].mark(&word)?);
                self.stats.marks += 1;
                let owner = self.cards[i].owner().to_string();
                if self.cards[i].is_won() {
                    let card = self.cards.remove(i);
                    winning_card = Some(card.render());
                    self.stats.winners.push(owner.clone());
                    info!(player = %owner, turn = self.stats.turns, "card won");
                    TurnOutcome::Won { owner }
                } else {
                    TurnOutcome::Marked { owner }
                }
            }
        };
        debug!(turn = self.stats.turns, word = %word, outcome = %outcome, "turn played");

        Ok(TurnReport {
            turn: self.stats.turns,
            word,
            outcome,
            position,
            winning_card,
            active: self.snapshot(),
        })
    }

    /// True once every seated player has won.
    pub fn is_complete(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn snapshot(&self) -> Vec<CardView> {
        self.cards.iter().map(Card::render).collect()
    }

    pub fn active_cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Words not called yet.
    pub fn callable_words(&self) -> &[String] {
        &self.callable
    }

    pub fn callable_remaining(&self) -> usize {
        self.callable.len()
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }
}
