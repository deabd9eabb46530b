//! # Test helpers
//!
//! - `assertions`: `BingoAssertions` and `asserter()` for help text, game
//!   transcripts and JSONL turn logs.
//! - `cli_runner`: `CliRunner` runs the built `bingo` binary (or the library
//!   when the binary is missing) and captures stdout, stderr, exit code and
//!   duration.
//! - `temp_files`: `TempFileManager` creates word lists and config files in a
//!   directory removed on drop.
//!
//! ```rust,ignore
//! use crate::helpers::{asserter, cli_runner::CliRunner, temp_files::TempFileManager};
//!
//! let cli = CliRunner::new().expect("cli runner");
//! let tmp = TempFileManager::new().expect("temp dir");
//! let words = tmp.word_list("words.txt", 40).expect("write");
//! let res = cli.run(&["sim", words.to_string_lossy().as_ref(), "--players", "2"]);
//! assert_eq!(res.exit_code, 0);
//! asserter().assert_game_finished(&res.stdout, 2);
//! ```
pub mod error {
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    pub struct TestError {
        pub kind: TestErrorKind,
        pub message: String,
        pub source: Option<Box<dyn StdError + Send + Sync>>,
    }

    impl TestError {
        pub fn with_source(
            kind: TestErrorKind,
            message: impl Into<String>,
            source: impl StdError + Send + Sync + 'static,
        ) -> Self {
            Self {
                kind,
                message: message.into(),
                source: Some(Box::new(source)),
            }
        }
    }

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }

    impl StdError for TestError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source
                .as_deref()
                .map(|err| err as &(dyn StdError + 'static))
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TestErrorKind {
        FileOperationFailed,
    }

    impl fmt::Display for TestErrorKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = match self {
                TestErrorKind::FileOperationFailed => "file operation failed",
            };
            f.write_str(name)
        }
    }
}

pub use error::{TestError, TestErrorKind};
pub mod assertions;
pub mod temp_files;

pub use assertions::asserter;
