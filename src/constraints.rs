//! What is known about the answer word.
//!
//! [`ConstraintsBuilder`] collects raw facts (excluded letters, required
//! letters, fixed positions) and [`ConstraintsBuilder::build`] validates them
//! into an immutable [`Constraints`] value. The search trusts that value and
//! never re-checks it.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ConfigError;
use crate::ALPHABET;

/// Longest word length accepted. Real word lists stop well short of this, and
/// the search recurses once per position.
pub const MAX_WORD_LENGTH: usize = 64;

/// Validated search constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    word_length: usize,
    admissible_letters: Vec<char>,
    known_positions: Vec<Option<char>>,
    required_letters: BTreeSet<char>,
    excluded_letters: BTreeSet<char>,
}

impl Constraints {
    pub fn builder(word_length: i64) -> ConstraintsBuilder {
        ConstraintsBuilder::new(word_length)
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Letters that may fill any position not fixed by a known letter, in
    /// alphabetical order.
    pub fn admissible_letters(&self) -> &[char] {
        &self.admissible_letters
    }

    /// The letter fixed at `position`, if any.
    pub fn known_letter(&self, position: usize) -> Option<char> {
        self.known_positions.get(position).copied().flatten()
    }

    /// One slot per position; `Some` where the letter is already certain.
    pub fn known_positions(&self) -> &[Option<char>] {
        &self.known_positions
    }

    pub fn required_letters(&self) -> &BTreeSet<char> {
        &self.required_letters
    }

    pub fn excluded_letters(&self) -> &BTreeSet<char> {
        &self.excluded_letters
    }

    /// Number of positions the search has to branch on.
    pub fn unknown_count(&self) -> usize {
        self.known_positions.iter().filter(|slot| slot.is_none()).count()
    }

    /// Check that `word` contains every required letter at least once.
    pub fn contains_required(&self, word: &str) -> bool {
        self.required_letters.iter().all(|&letter| word.contains(letter))
    }
}

/// Collects raw constraint facts before validation.
#[derive(Debug, Clone, Default)]
pub struct ConstraintsBuilder {
    word_length: i64,
    excluded: BTreeSet<char>,
    included: BTreeSet<char>,
    known: Vec<(usize, char)>,
}

impl ConstraintsBuilder {
    pub fn new(word_length: i64) -> Self {
        Self {
            word_length,
            ..Self::default()
        }
    }

    /// Mark a letter as absent from the answer.
    pub fn exclude(mut self, letter: char) -> Self {
        self.excluded.insert(letter.to_ascii_lowercase());
        self
    }

    /// Mark a letter as present somewhere in the answer.
    pub fn include(mut self, letter: char) -> Self {
        self.included.insert(letter.to_ascii_lowercase());
        self
    }

    /// Fix `letter` at the 0-based `position`.
    pub fn known(mut self, position: usize, letter: char) -> Self {
        self.known.push((position, letter.to_ascii_lowercase()));
        self
    }

    pub fn exclude_all(self, letters: impl IntoIterator<Item = char>) -> Self {
        letters.into_iter().fold(self, Self::exclude)
    }

    pub fn include_all(self, letters: impl IntoIterator<Item = char>) -> Self {
        letters.into_iter().fold(self, Self::include)
    }

    pub fn known_all(self, entries: impl IntoIterator<Item = (usize, char)>) -> Self {
        entries
            .into_iter()
            .fold(self, |builder, (position, letter)| builder.known(position, letter))
    }

    pub fn build(self) -> Result<Constraints, ConfigError> {
        let word_length = match usize::try_from(self.word_length) {
            Ok(length) if length > 0 => length,
            _ => {
                return Err(ConfigError::NonPositiveLength {
                    length: self.word_length,
                })
            }
        };
        if word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::WordTooLong {
                length: word_length,
                max: MAX_WORD_LENGTH,
            });
        }

        let admissible_letters: Vec<char> = ALPHABET
            .iter()
            .copied()
            .filter(|letter| !self.excluded.contains(letter))
            .collect();
        if admissible_letters.is_empty() {
            return Err(ConfigError::NoAdmissibleLetters);
        }

        // Identical repeated entries count once.
        let mut seen = BTreeSet::new();
        let known: Vec<(usize, char)> = self
            .known
            .iter()
            .copied()
            .filter(|&entry| seen.insert(entry))
            .collect();
        if known.len() > word_length {
            return Err(ConfigError::TooManyKnownPositions {
                count: known.len(),
                word_length,
            });
        }

        let mut fixed: BTreeMap<usize, char> = BTreeMap::new();
        for (position, letter) in known {
            if position >= word_length {
                return Err(ConfigError::PositionOutOfRange {
                    position,
                    word_length,
                });
            }
            if let Some(&first) = fixed.get(&position) {
                if first != letter {
                    return Err(ConfigError::ConflictingKnownPosition {
                        position,
                        first,
                        second: letter,
                    });
                }
            }
            if self.excluded.contains(&letter) {
                return Err(ConfigError::KnownLetterExcluded { position, letter });
            }
            fixed.insert(position, letter);
        }

        if self.included.len() > word_length {
            return Err(ConfigError::TooManyRequiredLetters {
                count: self.included.len(),
                word_length,
            });
        }

        for letter in self.included.intersection(&self.excluded) {
            log::warn!("letter '{letter}' is both included and excluded; no word can match");
        }

        let mut known_positions = vec![None; word_length];
        for (position, letter) in fixed {
            known_positions[position] = Some(letter);
        }

        Ok(Constraints {
            word_length,
            admissible_letters,
            known_positions,
            required_letters: self.included,
            excluded_letters: self.excluded,
        })
    }
}

/// Parse a comma separated list of single letters such as `m,s,e`.
///
/// Blank fragments are ignored. Anything that is not a single ASCII letter is
/// skipped with a warning.
pub fn parse_letters(arg: &str, flag: &str) -> Vec<char> {
    fragments(arg)
        .filter_map(|fragment| {
            let mut chars = fragment.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_ascii_alphabetic() => {
                    Some(letter.to_ascii_lowercase())
                }
                _ => {
                    log::warn!("ignoring malformed --{flag} fragment \"{fragment}\"");
                    None
                }
            }
        })
        .collect()
}

/// Parse a comma separated list of known positions such as `0m,1o,2u`.
///
/// Each fragment is a 0-based decimal position immediately followed by one
/// ASCII letter. Malformed fragments are skipped with a warning.
pub fn parse_known_positions(arg: &str) -> Vec<(usize, char)> {
    fragments(arg)
        .filter_map(|fragment| match parse_known_fragment(fragment) {
            Some(entry) => Some(entry),
            None => {
                log::warn!("ignoring malformed --known fragment \"{fragment}\"");
                None
            }
        })
        .collect()
}

fn parse_known_fragment(fragment: &str) -> Option<(usize, char)> {
    let letter = fragment.chars().last()?;
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let digits = &fragment[..fragment.len() - letter.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let position = digits.parse().ok()?;
    Some((position, letter.to_ascii_lowercase()))
}

fn fragments(arg: &str) -> impl Iterator<Item = &str> {
    arg.split(',').map(str::trim).filter(|fragment| !fragment.is_empty())
}
