//! Constrained word search.
//!
//! Candidates are built one position at a time. A position with a known
//! letter takes exactly that letter; every other position branches over the
//! admissible letters in order. Only full-length candidates are checked
//! against the dictionary, so the result does not depend on how the
//! dictionary is organized.
//!
//! A single candidate buffer is reused for the whole traversal: each branch
//! pushes its letter, recurses, and pops it again.

use rayon::prelude::*;

use crate::constraints::Constraints;
use crate::dictionary::Dictionary;

/// How [`find_words`] walks the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Sequential,
    /// Run each first-position branch on the rayon pool. Produces the same
    /// words in the same order as `Sequential`.
    Parallel,
}

/// Words found by a search, plus how much work it took.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub solutions: Vec<String>,
    /// Full-length candidates tested against the dictionary.
    pub examined: u64,
}

impl SearchOutcome {
    fn append(mut self, other: SearchOutcome) -> Self {
        self.solutions.extend(other.solutions);
        self.examined += other.examined;
        self
    }
}

struct Frontier<'a> {
    constraints: &'a Constraints,
    dictionary: &'a Dictionary,
    candidate: String,
    outcome: SearchOutcome,
}

impl<'a> Frontier<'a> {
    fn new(constraints: &'a Constraints, dictionary: &'a Dictionary) -> Self {
        Self {
            constraints,
            dictionary,
            candidate: String::with_capacity(constraints.word_length()),
            outcome: SearchOutcome::default(),
        }
    }

    /// Extend the candidate from `position` onwards. The candidate always
    /// holds exactly `position` letters on entry and on return.
    fn extend(&mut self, position: usize) {
        if position == self.constraints.word_length() {
            self.outcome.examined += 1;
            if self.dictionary.contains(&self.candidate) {
                self.outcome.solutions.push(self.candidate.clone());
            }
            return;
        }

        match self.constraints.known_letter(position) {
            Some(letter) => self.branch(position, letter),
            None => {
                for &letter in self.constraints.admissible_letters() {
                    self.branch(position, letter);
                }
            }
        }
    }

    fn branch(&mut self, position: usize, letter: char) {
        self.candidate.push(letter);
        self.extend(position + 1);
        self.candidate.pop();
    }

    fn finish(self) -> SearchOutcome {
        self.outcome
    }
}

/// Letters tried at position 0, in search order.
fn first_letters(constraints: &Constraints) -> Vec<char> {
    match constraints.known_letter(0) {
        Some(letter) => vec![letter],
        None => constraints.admissible_letters().to_vec(),
    }
}

/// Search every candidate and report how many were examined.
pub fn explore(constraints: &Constraints, dictionary: &Dictionary) -> SearchOutcome {
    let mut frontier = Frontier::new(constraints, dictionary);
    frontier.extend(0);
    frontier.finish()
}

/// Same as [`explore`], with each first-position branch searched on its own
/// rayon task. Branch results are concatenated in branch order.
pub fn explore_parallel(constraints: &Constraints, dictionary: &Dictionary) -> SearchOutcome {
    first_letters(constraints)
        .into_par_iter()
        .map(|letter| {
            let mut frontier = Frontier::new(constraints, dictionary);
            frontier.branch(0, letter);
            frontier.finish()
        })
        .collect::<Vec<_>>()
        .into_iter()
        .fold(SearchOutcome::default(), SearchOutcome::append)
}

/// Every dictionary word of the right length that fits the known positions
/// and uses only admissible letters elsewhere.
///
/// Required letters are not considered here; see [`filter_required`].
pub fn search(constraints: &Constraints, dictionary: &Dictionary) -> Vec<String> {
    explore(constraints, dictionary).solutions
}

pub fn search_parallel(constraints: &Constraints, dictionary: &Dictionary) -> Vec<String> {
    explore_parallel(constraints, dictionary).solutions
}

/// Keep only the words that contain every required letter.
///
/// The filter is applied even when it removes every word.
pub fn filter_required(mut words: Vec<String>, constraints: &Constraints) -> Vec<String> {
    if !constraints.required_letters().is_empty() {
        words.retain(|word| constraints.contains_required(word));
    }
    words
}

/// Search and then apply the required-letter filter.
///
/// Returns nothing without searching when the dictionary has no word of the
/// requested length.
pub fn find_words(
    constraints: &Constraints,
    dictionary: &Dictionary,
    mode: SearchMode,
) -> SearchOutcome {
    if dictionary.count_of_length(constraints.word_length()) == 0 {
        log::debug!(
            "no dictionary words of length {}, skipping search",
            constraints.word_length()
        );
        return SearchOutcome::default();
    }

    let outcome = match mode {
        SearchMode::Sequential => explore(constraints, dictionary),
        SearchMode::Parallel => explore_parallel(constraints, dictionary),
    };
    log::debug!(
        "examined {} candidates, {} in dictionary",
        outcome.examined,
        outcome.solutions.len()
    );

    let before = outcome.solutions.len();
    let solutions = filter_required(outcome.solutions, constraints);
    if solutions.len() < before {
        log::debug!(
            "required letters removed {} of {} words",
            before - solutions.len(),
            before
        );
    }

    SearchOutcome {
        solutions,
        examined: outcome.examined,
    }
}
