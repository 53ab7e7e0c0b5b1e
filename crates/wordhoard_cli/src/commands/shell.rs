//! Shell command implementation.

use crate::shell::Shell;
use std::io;
use std::path::Path;
use tracing::info;
use wordhoard_core::{Config, DictionaryIndex};

/// Runs the interactive menu on stdin and stdout.
///
/// Without a path the session starts from an empty dictionary.
pub fn run(path: Option<&Path>, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let index = match path {
        Some(path) => super::open_dictionary(path, config.clone())?.1,
        None => {
            info!("no dictionary file given, starting empty");
            DictionaryIndex::new()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(index, config, stdin.lock(), stdout.lock());
    shell.run()?;
    Ok(())
}
