//! Dealing word subsets to players and letting them claim one each.
//!
//! Subsets are sampled without replacement from [`WordPool::dealable`], so
//! no two offers share a word. Offers keep their index for the whole setup:
//! a claimed offer leaves a hole instead of shifting the others, which is
//! what lets a stale index be reported as already claimed.

use rand::Rng;
use tracing::debug;

use crate::errors::{BingoError, SelectionProblem};
use crate::words::WordPool;

/// Word subsets dealt during setup, one per player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offers {
    slots: Vec<Option<Vec<String>>>,
}

impl Offers {
    /// Deal `players` disjoint subsets of `per_card` words each.
    ///
    /// Sampled order is kept, so it doubles as the card layout. Blank
    /// entries stay blank and become free spaces on the card.
    pub fn deal<R: Rng + ?Sized>(
        pool: &WordPool,
        players: usize,
        per_card: usize,
        rng: &mut R,
    ) -> Result<Self, BingoError> {
        let mut candidates = pool.dealable();
        match players.checked_mul(per_card) {
            Some(needed) if needed <= candidates.len() => {}
            needed => {
                return Err(BingoError::InsufficientWords {
                    needed: needed.unwrap_or(usize::MAX),
                    available: candidates.len(),
                });
            }
        }

        let mut slots = Vec::with_capacity(players);
        for seat in 0..players {
            let picked = rand::seq::index::sample(rng, candidates.len(), per_card).into_vec();
            let subset: Vec<String> = picked.iter().map(|&i| candidates[i].clone()).collect();

            let mut taken = picked;
            taken.sort_unstable_by(|a, b| b.cmp(a));
            for i in taken {
                candidates.remove(i);
            }
            debug!(seat, left = candidates.len(), "dealt word subset");
            slots.push(Some(subset));
        }
        Ok(Self { slots })
    }

    /// Wrap subsets that were dealt elsewhere.
    pub fn from_subsets(subsets: Vec<Vec<String>>) -> Self {
        Self {
            slots: subsets.into_iter().map(Some).collect(),
        }
    }

    /// Number of subsets dealt, claimed or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn unclaimed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Unclaimed subset at `index`.
    pub fn get(&self, index: usize) -> Option<&[String]> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    pub fn unclaimed(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_deref().map(|words| (i, words)))
    }

    /// Take the subset at `index` out of the unclaimed set.
    pub fn claim(&mut self, index: usize) -> Result<Vec<String>, BingoError> {
        let offered = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(BingoError::InvalidSelection {
                index,
                offered,
                problem: SelectionProblem::OutOfRange,
            })?;
        slot.take().ok_or(BingoError::InvalidSelection {
            index,
            offered,
            problem: SelectionProblem::AlreadyClaimed,
        })
    }
}

/// Supplies player names during setup. `seat` is zero-based.
pub trait PlayerNames {
    /// `None` means no more input is available and setup must stop.
    fn name_for(&mut self, seat: usize) -> Option<String>;
}

/// Lets a player pick one of the offered subsets by index.
pub trait CardSelector {
    /// `None` means no more input is available and setup must stop.
    fn choose(&mut self, player: &str, offers: &Offers) -> Option<usize>;
}

/// Names players `Player 1`, `Player 2`, ...
#[derive(Debug, Default, Clone, Copy)]
pub struct SeatNames;

impl PlayerNames for SeatNames {
    fn name_for(&mut self, seat: usize) -> Option<String> {
        Some(format!("Player {}", seat + 1))
    }
}

/// Always picks the lowest unclaimed index.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstUnclaimed;

impl CardSelector for FirstUnclaimed {
    fn choose(&mut self, _player: &str, offers: &Offers) -> Option<usize> {
        offers.unclaimed().next().map(|(i, _)| i)
    }
}

impl<I: Iterator<Item = String>> PlayerNames for I {
    fn name_for(&mut self, _seat: usize) -> Option<String> {
        self.next()
    }
}

impl<I: Iterator<Item = usize>> CardSelector for I {
    fn choose(&mut self, _player: &str, _offers: &Offers) -> Option<usize> {
        self.next()
    }
}
