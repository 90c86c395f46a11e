//! Error types for constraint validation, dictionary loading and reporting.
//!
//! The search itself never fails; everything here is raised while preparing
//! its inputs or persisting its output.

use std::io;
use std::path::PathBuf;

/// A user-supplied constraint set that no word could ever satisfy, or that
/// contradicts itself.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("word length must be greater than 0 (got {length})")]
    NonPositiveLength { length: i64 },
    #[display("word length {length} is longer than the supported maximum ({max})")]
    WordTooLong { length: usize, max: usize },
    #[display("all letters of the alphabet have been excluded")]
    NoAdmissibleLetters,
    #[display("{count} known positions exceed the word length ({word_length})")]
    TooManyKnownPositions { count: usize, word_length: usize },
    #[display("known position {position} exceeds the word length ({word_length})")]
    PositionOutOfRange { position: usize, word_length: usize },
    #[display("position {position} is fixed to both '{first}' and '{second}'")]
    ConflictingKnownPosition {
        position: usize,
        first: char,
        second: char,
    },
    #[display("known letter '{letter}' at position {position} is also excluded")]
    KnownLetterExcluded { position: usize, letter: char },
    #[display("{count} letters to include exceed the word length ({word_length})")]
    TooManyRequiredLetters { count: usize, word_length: usize },
}

/// Failure to build a [`Dictionary`](crate::Dictionary) from a word list file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DictionaryError {
    #[display("failed to read \"{}\": {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("no words were found in \"{}\"", path.display())]
    Empty { path: PathBuf },
}

/// Failure to write the results file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to write \"{}\": {source}", path.display())]
pub struct ReportError {
    pub path: PathBuf,
    pub source: io::Error,
}

/// Any fatal error the command line front end can hit.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum Error {
    #[display("{_0}")]
    Config(ConfigError),
    #[display("{_0}")]
    Dictionary(DictionaryError),
    #[display("{_0}")]
    Report(ReportError),
    #[display("failed to print results: {_0}")]
    Output(io::Error),
}
