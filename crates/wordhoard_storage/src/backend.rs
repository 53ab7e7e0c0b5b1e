//! Storage backend trait definition.

use crate::error::StorageResult;

/// A whole-content byte store holding one dictionary file.
///
/// Dictionary files are small and are always read and written in full, so
/// the trait exposes whole-content operations only.
///
/// # Invariants
///
/// - `read_all` returns exactly the bytes passed to the last `replace`
///   (or the pre-existing content if `replace` was never called)
/// - `replace` discards all previous content
/// - `sync` ensures replaced content survives process termination
pub trait StorageBackend: Send + Sync {
    /// Reads the entire content of the store.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn read_all(&self) -> StorageResult<Vec<u8>>;

    /// Replaces the entire content of the store with `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs. The content of the store is
    /// unspecified after a failed replace.
    fn replace(&mut self, data: &[u8]) -> StorageResult<()>;

    /// Flushes pending writes to the operating system.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush operation fails.
    fn flush(&mut self) -> StorageResult<()>;

    /// Syncs data and metadata to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the sync operation fails.
    fn sync(&mut self) -> StorageResult<()>;

    /// Returns the current size of the content in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be determined.
    fn size(&self) -> StorageResult<u64>;
}
