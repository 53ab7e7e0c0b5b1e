//! CLI command implementations.

pub mod add;
pub mod lookup;
pub mod parts;
pub mod range;
pub mod shell;
pub mod stats;
pub mod verify;

use std::path::Path;
use thiserror::Error;
use wordhoard_core::{Config, CoreResult, DictionaryFile, DictionaryIndex};

/// Failures reported by commands beyond those of the core library.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The requested word is not in the dictionary.
    #[error("{word} not found")]
    WordNotFound {
        /// The word that was looked up.
        word: String,
    },

    /// An output format other than `text` or `json` was requested.
    #[error("unknown output format: {format}")]
    UnknownFormat {
        /// The requested format.
        format: String,
    },

    /// The dictionary loaded but failed its consistency checks.
    #[error("verification failed")]
    VerificationFailed,
}

/// Opens the file at `path` and loads its dictionary.
pub fn open_dictionary(path: &Path, config: Config) -> CoreResult<(DictionaryFile, DictionaryIndex)> {
    let file = DictionaryFile::open(path, config)?;
    let index = file.load()?;
    Ok((file, index))
}
