//! # Wordfind
//!
//! Enumerates every dictionary word consistent with what is already known about
//! a word puzzle answer: its length, letters that are absent, letters that are
//! present somewhere, and letters fixed at specific positions.
//!
//! The search builds candidates letter by letter, fixing known positions and
//! branching over the admissible letters everywhere else, then keeps the
//! full-length candidates that appear in the dictionary.

pub mod constraints;
pub mod dictionary;
pub mod error;
pub mod report;
pub mod search;

pub use constraints::{Constraints, ConstraintsBuilder, MAX_WORD_LENGTH};
pub use dictionary::Dictionary;
pub use error::{ConfigError, DictionaryError, Error, ReportError};
pub use search::{
    explore, explore_parallel, filter_required, find_words, search, search_parallel, SearchMode,
    SearchOutcome,
};

/// Letters a candidate may be built from, in search order.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Default word length, matching the classic five-letter puzzle.
pub const DEFAULT_WORD_LENGTH: i64 = 5;
