//! Wordfind CLI
//!
//! Parses the constraint flags, loads the word list, runs the search and
//! prints (and optionally saves) every word that fits.

mod cli;

use std::io::{self, Write};
use std::process;

use clap::Parser;
use cli::Cli;
use wordfind::report::{progress_pattern, save_solutions, write_solutions};
use wordfind::{find_words, Constraints, Dictionary, Error};

fn log_interpretation(constraints: &Constraints) {
    let excluded = constraints.excluded_letters();
    if !excluded.is_empty() {
        log::info!("letters to exclude: {excluded:?}");
        log::info!("valid letters: {:?}", constraints.admissible_letters());
    }

    let required = constraints.required_letters();
    if !required.is_empty() {
        log::info!("letters in the word whose positions are unknown: {required:?}");
    }

    if constraints.unknown_count() < constraints.word_length() {
        log::info!("current progress: {}", progress_pattern(constraints));
    }
}

/// Write the listing to `writer`. A closed pipe (e.g. `wordfind | head`) is
/// not a failure; any other write error is.
fn print_solutions<W: Write>(writer: &mut W, words: &[String]) -> Result<(), Error> {
    match write_solutions(writer, words).and_then(|()| writer.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let constraints = cli.constraints().build()?;
    log_interpretation(&constraints);

    log::info!("reading in words from {}", cli.dict.display());
    let dictionary = Dictionary::load(&cli.dict)?;
    log::info!(
        "{} words of length {}",
        dictionary.count_of_length(constraints.word_length()),
        constraints.word_length()
    );
    if log::log_enabled!(log::Level::Debug) {
        for word in dictionary.sorted() {
            log::debug!("dictionary: {word}");
        }
    }

    let outcome = find_words(&constraints, &dictionary, cli.search_mode());

    print_solutions(&mut io::stdout().lock(), &outcome.solutions)?;

    if cli.save {
        save_solutions(&cli.output, &outcome.solutions)?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
