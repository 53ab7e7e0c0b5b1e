//! Range command implementation.

use std::path::Path;
use wordhoard_core::Config;

/// Runs the range command, printing one word per line.
pub fn run(path: &Path, config: Config, start: &str, end: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (_, index) = super::open_dictionary(path, config)?;
    for word in index.words_in_range(start, end) {
        println!("{word}");
    }
    Ok(())
}
