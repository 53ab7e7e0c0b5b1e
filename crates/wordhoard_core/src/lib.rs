//! # wordhoard core
//!
//! In-memory dictionary engine for wordhoard.
//!
//! This crate provides:
//! - [`Definition`]: an immutable (part of speech, text) pair
//! - [`WordEntry`]: a word with its ordered set of definitions
//! - [`DictionaryIndex`]: every word, ordered for range queries, with
//!   part-of-speech usage counters and statistics
//! - The `word::pos::text` line format and load/save through
//!   `wordhoard_storage` backends
//!
//! ## Example
//!
//! ```rust
//! use wordhoard_core::DictionaryIndex;
//!
//! let mut index = DictionaryIndex::new();
//! index.add("cat", "noun", "a small animal").unwrap();
//! assert_eq!(index.statistics().definitions_per_word, "1.000");
//! assert_eq!(index.serialize(), "cat::noun::a small animal");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod definition;
mod dictionary;
mod error;
pub mod record;
mod stats;
pub mod store;
mod types;
mod validate;
mod word;

pub use config::Config;
pub use definition::Definition;
pub use dictionary::{AddOutcome, DictionaryIndex, Removal};
pub use error::{CoreError, CoreResult};
pub use record::Record;
pub use stats::{format_average, Statistics};
pub use store::DictionaryFile;
pub use types::{LineEnding, PartOfSpeech};
pub use validate::{validate_text, validate_word, DELIMITER};
pub use word::{Replaced, WordEntry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
