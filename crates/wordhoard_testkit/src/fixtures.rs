//! Test fixtures and dictionary helpers.
//!
//! Provides ready-made dictionaries and temporary dictionary files.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wordhoard_core::{Config, DictionaryFile, DictionaryIndex};
use wordhoard_storage::InMemoryBackend;

/// A small dictionary in file form, deliberately out of order.
///
/// Four words, seven definitions, four parts of speech. `run` exercises
/// several tags on one word.
pub const SAMPLE_DICTIONARY: &str = "\
run::verb::to move swiftly on foot
cat::noun::a small domesticated feline
run::noun::an act of running
fast::adj::moving quickly
fast::adv::quickly
fast::verb::to abstain from food
apple::noun::the round fruit of a tree";

/// Words of [`SAMPLE_DICTIONARY`] in lexicographic order.
pub const SAMPLE_WORDS: [&str; 4] = ["apple", "cat", "fast", "run"];

/// Loads [`SAMPLE_DICTIONARY`].
pub fn sample_dictionary() -> DictionaryIndex {
    let backend = InMemoryBackend::with_data(SAMPLE_DICTIONARY);
    wordhoard_core::store::load(&backend, &Config::default()).expect("sample dictionary is well formed")
}

/// A dictionary file in a temporary directory, removed on drop.
pub struct TestDictionaryFile {
    path: PathBuf,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: TempDir,
}

impl TestDictionaryFile {
    /// Creates a path for a dictionary file that does not exist yet.
    pub fn missing() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("dictionary.txt");
        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Creates a dictionary file holding `content`.
    pub fn with_content(content: &str) -> Self {
        let file = Self::missing();
        std::fs::write(&file.path, content).expect("Failed to write dictionary file");
        file
    }

    /// Creates a dictionary file holding [`SAMPLE_DICTIONARY`].
    pub fn sample() -> Self {
        Self::with_content(SAMPLE_DICTIONARY)
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current file content.
    pub fn content(&self) -> String {
        std::fs::read_to_string(&self.path).expect("Failed to read dictionary file")
    }

    /// Opens the file with the default configuration.
    pub fn open(&self) -> DictionaryFile {
        DictionaryFile::open(&self.path, Config::default()).expect("Failed to open dictionary file")
    }

    /// Loads the dictionary held in the file.
    pub fn load(&self) -> DictionaryIndex {
        self.open().load().expect("Failed to load dictionary file")
    }
}

/// Runs a test against a temporary copy of the sample dictionary file.
pub fn with_sample_file<F, R>(f: F) -> R
where
    F: FnOnce(&TestDictionaryFile) -> R,
{
    let file = TestDictionaryFile::sample();
    f(&file)
}
