use std::collections::HashSet;

/// The words a game is played with, in source order.
///
/// Blank entries are free-space slots. Duplicates are kept as read; the
/// dealing view collapses repeated non-empty words so no card can receive
/// the same word twice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Parse newline-delimited text. `\r\n` endings are accepted and a
    /// trailing newline does not add an empty entry.
    pub fn parse(text: &str) -> Self {
        Self {
            words: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of free-space (blank) entries.
    pub fn free_spaces(&self) -> usize {
        self.words.iter().filter(|w| w.is_empty()).count()
    }

    /// Candidates for dealing: first occurrence of every non-empty word, and
    /// every blank entry.
    pub fn dealable(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.words
            .iter()
            .filter(|w| w.is_empty() || seen.insert(w.as_str()))
            .cloned()
            .collect()
    }
}

impl From<Vec<String>> for WordPool {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl FromIterator<String> for WordPool {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
