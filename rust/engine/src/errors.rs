use thiserror::Error;

/// Why a card selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionProblem {
    /// Index does not name any dealt card
    OutOfRange,
    /// Card at this index already belongs to another player
    AlreadyClaimed,
}

impl std::fmt::Display for SelectionProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionProblem::OutOfRange => write!(f, "out of range"),
            SelectionProblem::AlreadyClaimed => write!(f, "already claimed"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BingoError {
    #[error("Invalid card configuration: {0}")]
    Configuration(String),
    #[error("Not enough words: need {needed} distinct words, pool has {available}")]
    InsufficientWords { needed: usize, available: usize },
    #[error("Invalid card selection {index}: {problem} ({offered} cards dealt)")]
    InvalidSelection {
        index: usize,
        offered: usize,
        problem: SelectionProblem,
    },
    #[error("No words left to call while {active} cards are still in play")]
    PoolExhausted { active: usize },
    #[error("Word '{0}' is not on this card")]
    NotFound(String),
    #[error("Setup aborted: no input for player {seat}")]
    SetupAborted { seat: usize },
}
