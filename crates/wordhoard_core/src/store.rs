//! Loading and saving dictionaries through a storage backend.

use crate::config::Config;
use crate::dictionary::DictionaryIndex;
use crate::error::{CoreError, CoreResult};
use crate::record;
use std::path::Path;
use tracing::{debug, info};
use wordhoard_storage::{FileBackend, StorageBackend};

/// Reads a dictionary from `backend`.
///
/// The returned index is only built once every line has parsed, so a load
/// that fails part-way never yields a half-populated dictionary.
///
/// # Errors
///
/// Returns a storage error if the content cannot be read,
/// [`CoreError::InvalidEncoding`] if it is not UTF-8, or
/// [`CoreError::MalformedRecord`] for the first bad line.
pub fn load(backend: &dyn StorageBackend, config: &Config) -> CoreResult<DictionaryIndex> {
    let bytes = backend.read_all()?;
    let content = String::from_utf8(bytes).map_err(|e| CoreError::invalid_encoding(e.to_string()))?;
    let records = record::parse_all(&content, config.skip_blank_lines)?;
    let lines = records.len();

    let index = DictionaryIndex::from_records(records);
    info!(
        lines,
        words = index.word_count(),
        definitions = index.definition_count(),
        "dictionary loaded"
    );
    Ok(index)
}

/// Writes `index` to `backend`, replacing its content.
///
/// # Errors
///
/// Returns a storage error if the content cannot be written or synced.
pub fn save(index: &DictionaryIndex, backend: &mut dyn StorageBackend, config: &Config) -> CoreResult<()> {
    let content = index.serialize_with(config.line_ending);
    backend.replace(content.as_bytes())?;
    backend.flush()?;
    if config.sync_on_save {
        backend.sync()?;
    }
    info!(
        bytes = content.len(),
        words = index.word_count(),
        definitions = index.definition_count(),
        "dictionary saved"
    );
    Ok(())
}

/// A dictionary file on disk.
#[derive(Debug)]
pub struct DictionaryFile {
    backend: FileBackend,
    config: Config,
}

impl DictionaryFile {
    /// Opens the dictionary file at `path`.
    ///
    /// With [`Config::create_if_missing`] set, a missing file (and its parent
    /// directories) is created empty.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file is missing and may not be created,
    /// or cannot be opened.
    pub fn open(path: &Path, config: Config) -> CoreResult<Self> {
        let backend = if config.create_if_missing {
            FileBackend::open_with_create_dirs(path)?
        } else {
            FileBackend::open_existing(path)?
        };
        debug!(path = %path.display(), "dictionary file opened");
        Ok(Self { backend, config })
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.backend.path()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads the dictionary held in the file.
    ///
    /// # Errors
    ///
    /// See [`load`].
    pub fn load(&self) -> CoreResult<DictionaryIndex> {
        load(&self.backend, &self.config)
    }

    /// Saves `index` into the file.
    ///
    /// # Errors
    ///
    /// See [`save`].
    pub fn save(&mut self, index: &DictionaryIndex) -> CoreResult<()> {
        save(index, &mut self.backend, &self.config)
    }
}

/// Saves `index` to a file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns a storage error if the file cannot be created or written.
pub fn save_to_path(index: &DictionaryIndex, path: &Path, config: &Config) -> CoreResult<()> {
    let mut backend = FileBackend::open(path)?;
    save(index, &mut backend, config)
}
