//! Word list loading.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::DictionaryError;

/// A set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a newline-delimited word list.
    ///
    /// Lines are trimmed and lowercased, blank lines are skipped and
    /// duplicates collapse. A file that yields no words is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(io_error)?;

        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }

        log::info!("read {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut dictionary = Self::new();
        for line in reader.lines() {
            dictionary.insert(&line?);
        }
        Ok(dictionary)
    }

    /// Add a word, normalizing it first. Returns `false` for blank input or
    /// a word that was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words that could be a solution for `word_length`.
    pub fn count_of_length(&self, word_length: usize) -> usize {
        self.iter()
            .filter(|word| word.chars().count() == word_length)
            .count()
    }

    /// All words in alphabetical order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for word in iter {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }
}
