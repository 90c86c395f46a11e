//! Output of search results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::constraints::Constraints;
use crate::error::ReportError;

/// First line of every result listing.
pub const HEADER: &str = "Potential solutions:";

/// Default file written by `--save`.
pub const DEFAULT_RESULTS_FILE: &str = "results.txt";

/// Write the header line followed by one word per line.
pub fn write_solutions<W: Write>(writer: &mut W, words: &[String]) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for word in words {
        writeln!(writer, "{word}")?;
    }
    Ok(())
}

/// Write the listing to `path`, replacing any existing file.
pub fn save_solutions(path: impl AsRef<Path>, words: &[String]) -> Result<(), ReportError> {
    let path = path.as_ref();
    let to_error = |source: io::Error| ReportError {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
    write_solutions(&mut writer, words).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    log::info!("saved {} words to {}", words.len(), path.display());
    Ok(())
}

/// Render the known positions with `_` in every unknown slot, e.g. `m_u__`.
pub fn progress_pattern(constraints: &Constraints) -> String {
    constraints
        .known_positions()
        .iter()
        .map(|slot| slot.unwrap_or('_'))
        .collect()
}
