//! Lookup command implementation.

use super::CommandError;
use std::path::Path;
use wordhoard_core::Config;

/// Runs the lookup command.
pub fn run(path: &Path, config: Config, word: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (_, index) = super::open_dictionary(path, config)?;
    let rendered = index.lookup(word).ok_or_else(|| CommandError::WordNotFound {
        word: word.to_string(),
    })?;
    println!("{rendered}");
    Ok(())
}
