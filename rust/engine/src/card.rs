use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::BingoError;

/// Label shown for a matched cell and for a free space.
pub const MARK: &str = "X";

/// Default number of words dealt to each player (4×4 grid).
pub const DEFAULT_CARD_WORDS: usize = 16;

/// Grid dimensions of a card. Fixed once the card is built.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of cells, i.e. words a card of this shape needs. `None` when
    /// the product does not fit in a `usize`.
    pub const fn cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

/// Content of a single grid cell.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// A dealt word that has not been called yet
    Word(String),
    /// A word that was called and matched
    Marked,
    /// A blank entry from the pool; counts as marked from the start
    Free,
}

impl Cell {
    pub fn is_marked(&self) -> bool {
        !matches!(self, Cell::Word(_))
    }

    pub fn label(&self) -> &str {
        match self {
            Cell::Word(w) => w,
            Cell::Marked | Cell::Free => MARK,
        }
    }
}

/// Presentation-ready copy of a card: owner plus rows of cell labels.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub owner: String,
    pub rows: Vec<Vec<String>>,
}

/// One player's bingo card.
///
/// Words are laid out row-major in the order given. `positions` indexes the
/// words that are still unmarked, so it always matches the `Cell::Word`
/// contents of `cells`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    owner: String,
    shape: Shape,
    cells: Vec<Cell>,
    positions: HashMap<String, usize>,
}

impl Card {
    /// Build a card from exactly `shape.cells()` words.
    ///
    /// Empty words become free spaces. A non-empty word given twice is a
    /// configuration error since a cell could then never be told apart.
    pub fn new(
        words: Vec<String>,
        shape: Shape,
        owner: impl Into<String>,
    ) -> Result<Self, BingoError> {
        if shape.rows == 0 || shape.columns == 0 {
            return Err(BingoError::Configuration(format!(
                "card shape {}x{} has no cells",
                shape.rows, shape.columns
            )));
        }
        let Some(cells) = shape.cells() else {
            return Err(BingoError::Configuration(format!(
                "card shape {}x{} is too large",
                shape.rows, shape.columns
            )));
        };
        if words.len() != cells {
            return Err(BingoError::Configuration(format!(
                "{} words cannot fill a {}x{} card",
                words.len(),
                shape.rows,
                shape.columns
            )));
        }

        let mut cells = Vec::with_capacity(words.len());
        let mut positions = HashMap::with_capacity(words.len());
        for (i, word) in words.into_iter().enumerate() {
            if word.is_empty() {
                cells.push(Cell::Free);
                continue;
            }
            if positions.insert(word.clone(), i).is_some() {
                return Err(BingoError::Configuration(format!(
                    "word '{}' appears more than once on one card",
                    word
                )));
            }
            cells.push(Cell::Word(word));
        }

        Ok(Self {
            owner: owner.into(),
            shape,
            cells,
            positions,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        if row >= self.shape.rows || column >= self.shape.columns {
            return None;
        }
        self.cells.get(row * self.shape.columns + column)
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Mark `word`, returning its (row, column).
    pub fn mark(&mut self, word: &str) -> Result<(usize, usize), BingoError> {
        let index = self
            .positions
            .remove(word)
            .ok_or_else(|| BingoError::NotFound(word.to_string()))?;
        self.cells[index] = Cell::Marked;
        Ok((index / self.shape.columns, index % self.shape.columns))
    }

    /// Unmarked words in grid order.
    pub fn remaining_words(&self) -> Vec<&str> {
        self.cells
            .iter()
            .filter_map(|c| match c {
                Cell::Word(w) => Some(w.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_marked()).count()
    }

    /// A card is won when every row holds `columns` marked cells.
    pub fn is_won(&self) -> bool {
        self.cells
            .chunks(self.shape.columns)
            .all(|row| row.iter().filter(|c| c.is_marked()).count() == self.shape.columns)
    }

    pub fn render(&self) -> CardView {
        CardView {
            owner: self.owner.clone(),
            rows: self
                .cells
                .chunks(self.shape.columns)
                .map(|row| row.iter().map(|c| c.label().to_string()).collect())
                .collect(),
        }
    }
}
