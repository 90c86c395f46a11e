use std::path::PathBuf;

use clap::Parser;
use wordfind::constraints::{parse_known_positions, parse_letters};
use wordfind::report::DEFAULT_RESULTS_FILE;
use wordfind::{ConstraintsBuilder, SearchMode, DEFAULT_WORD_LENGTH};

/// Find every dictionary word that fits what you already know about a word
/// puzzle answer.
#[derive(Parser, Debug)]
#[command(name = "wordfind", version, about, long_about = None)]
pub struct Cli {
    /// The length of the word to be found.
    #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH, allow_negative_numbers = true)]
    pub length: i64,

    /// Letters known not to be in the word, comma separated. For example: m,s,e
    #[arg(short, long, default_value = "")]
    pub exclude: String,

    /// Letters known to be in the word at unknown positions, comma separated.
    /// For example: m,s,e
    #[arg(short, long, default_value = "")]
    pub include: String,

    /// Known zero-indexed positions and their letters, comma separated.
    /// For example: 0m,1o,2u
    #[arg(short, long, default_value = "")]
    pub known: String,

    /// Newline-delimited word list to search.
    #[arg(short, long, default_value = "freebsd_words.txt")]
    pub dict: PathBuf,

    /// Also save the potential solutions to the output file.
    #[arg(short, long)]
    pub save: bool,

    /// File written by --save.
    #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
    pub output: PathBuf,

    /// Search first-letter branches in parallel.
    #[arg(short, long)]
    pub parallel: bool,

    /// Show how the arguments were interpreted.
    #[arg(short, long)]
    pub verbose: bool,

    /// Also print the whole dictionary after loading it.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else if self.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Error
        }
    }

    pub fn search_mode(&self) -> SearchMode {
        if self.parallel {
            SearchMode::Parallel
        } else {
            SearchMode::Sequential
        }
    }

    /// Collect the constraint flags. Malformed fragments are dropped here
    /// with a warning; everything else is checked by `build`.
    pub fn constraints(&self) -> ConstraintsBuilder {
        ConstraintsBuilder::new(self.length)
            .exclude_all(parse_letters(&self.exclude, "exclude"))
            .include_all(parse_letters(&self.include, "include"))
            .known_all(parse_known_positions(&self.known))
    }
}
