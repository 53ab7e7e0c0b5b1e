//! Parts command implementation.

use super::CommandError;
use std::path::Path;
use wordhoard_core::Config;

/// Runs the parts command.
pub fn run(path: &Path, config: Config, word: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (_, index) = super::open_dictionary(path, config)?;
    match index.parts_of_speech(word) {
        Ok(summary) => {
            println!("{summary}");
            Ok(())
        }
        Err(e) if e.is_not_found() => Err(CommandError::WordNotFound {
            word: word.to_string(),
        }
        .into()),
        Err(e) => Err(e.into()),
    }
}
