//! # wordhoard testkit
//!
//! Test utilities for wordhoard.
//!
//! This crate provides:
//! - Sample dictionaries and temporary dictionary files
//! - Property-based test generators using proptest
//! - A reference model for checking [`DictionaryIndex`](wordhoard_core::DictionaryIndex)
//!   against arbitrary operation sequences
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wordhoard_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_file() {
//!     let file = TestDictionaryFile::with_content(SAMPLE_DICTIONARY);
//!     let index = file.load();
//!     assert_eq!(index.word_count(), 4);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
