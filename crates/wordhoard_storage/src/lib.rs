//! # wordhoard storage
//!
//! Storage backends for wordhoard dictionary files.
//!
//! Backends are **opaque byte stores**: they hold the whole content of one
//! dictionary file and know nothing about the `word::pos::text` record format.
//! Parsing and rendering belong to `wordhoard_core`.
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For tests and scratch dictionaries
//! - [`FileBackend`] - For dictionaries kept on disk
//!
//! ## Example
//!
//! ```rust
//! use wordhoard_storage::{InMemoryBackend, StorageBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! backend.replace(b"cat::noun::a small animal").unwrap();
//! assert_eq!(backend.read_all().unwrap(), b"cat::noun::a small animal");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
