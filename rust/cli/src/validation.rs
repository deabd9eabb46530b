//! Input parsing and validation for interactive prompts.
//!
//! Prompts accept a number or a quit command. Anything else comes back as
//! [`ParseResult::Invalid`] with a message, and the caller asks again.

/// Result of parsing one line of interactive input.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    /// Input parsed into a value
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit")
}

/// Parse the answer to "How many people will play?".
///
/// # Example
///
/// ```rust
/// # use bingo_cli::validation::{parse_player_count, ParseResult};
/// assert_eq!(parse_player_count("3"), ParseResult::Value(3));
/// assert_eq!(parse_player_count("quit"), ParseResult::Quit);
/// assert!(matches!(parse_player_count("0"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_count(input: &str) -> ParseResult<usize> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(&input) {
        return ParseResult::Quit;
    }
    match input.parse::<usize>() {
        Ok(0) => ParseResult::Invalid("At least one player is needed".to_string()),
        Ok(n) => ParseResult::Value(n),
        Err(_) => ParseResult::Invalid(format!("'{}' is not a number of players", input)),
    }
}

/// Parse a card choice shown on screen as `Words N`.
///
/// The returned value is the zero-based offer index. Range checking against
/// the dealt cards is left to the engine.
///
/// # Example
///
/// ```rust
/// # use bingo_cli::validation::{parse_selection, ParseResult};
/// assert_eq!(parse_selection("1"), ParseResult::Value(0));
/// assert_eq!(parse_selection("q"), ParseResult::Quit);
/// ```
pub fn parse_selection(input: &str) -> ParseResult<usize> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(&input) {
        return ParseResult::Quit;
    }
    match input.parse::<usize>() {
        Ok(0) => ParseResult::Invalid("Word lists are numbered from 1".to_string()),
        Ok(n) => ParseResult::Value(n - 1),
        Err(_) => ParseResult::Invalid(format!(
            "You must choose a number in the word list, got '{}'",
            input
        )),
    }
}

/// Player names are taken as typed; a blank answer gets a seat name.
pub fn normalize_player_name(input: &str, seat: usize) -> String {
    let name = input.trim();
    if name.is_empty() {
        format!("Player {}", seat + 1)
    } else {
        name.to_string()
    }
}
