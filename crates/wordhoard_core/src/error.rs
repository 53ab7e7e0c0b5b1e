//! Error types for wordhoard core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in wordhoard core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] wordhoard_storage::StorageError),

    /// Part-of-speech tag outside the closed set.
    #[error("invalid part of speech: {tag:?}")]
    InvalidPartOfSpeech {
        /// The rejected tag.
        tag: String,
    },

    /// Word cannot be stored in the dictionary file format.
    #[error("invalid word: {reason}")]
    InvalidWord {
        /// Why the word was rejected.
        reason: String,
    },

    /// Definition text cannot be stored in the dictionary file format.
    #[error("invalid definition: {reason}")]
    InvalidText {
        /// Why the text was rejected.
        reason: String,
    },

    /// Word not present in the dictionary.
    #[error("word not found: {word}")]
    WordNotFound {
        /// The word that was looked up.
        word: String,
    },

    /// Definition index past the end of a word's definitions.
    #[error("definition {index} out of range for {word} ({count} definitions)")]
    DefinitionOutOfRange {
        /// The word addressed.
        word: String,
        /// The 0-based index requested.
        index: usize,
        /// Number of definitions the word has.
        count: usize,
    },

    /// A dictionary file line does not hold a valid record.
    #[error("malformed record on line {line}: {message}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Dictionary file is not valid UTF-8.
    #[error("invalid encoding: {message}")]
    InvalidEncoding {
        /// Description of the encoding issue.
        message: String,
    },

    /// An index invariant does not hold.
    #[error("invariant violated: {message}")]
    InvariantViolation {
        /// Description of the violated invariant.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid part-of-speech error.
    pub fn invalid_part_of_speech(tag: impl Into<String>) -> Self {
        Self::InvalidPartOfSpeech { tag: tag.into() }
    }

    /// Creates an invalid word error.
    pub fn invalid_word(reason: impl Into<String>) -> Self {
        Self::InvalidWord {
            reason: reason.into(),
        }
    }

    /// Creates an invalid text error.
    pub fn invalid_text(reason: impl Into<String>) -> Self {
        Self::InvalidText {
            reason: reason.into(),
        }
    }

    /// Creates a word not found error.
    pub fn word_not_found(word: impl Into<String>) -> Self {
        Self::WordNotFound { word: word.into() }
    }

    /// Creates a definition out of range error.
    pub fn definition_out_of_range(word: impl Into<String>, index: usize, count: usize) -> Self {
        Self::DefinitionOutOfRange {
            word: word.into(),
            index,
            count,
        }
    }

    /// Creates a malformed record error.
    pub fn malformed_record(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Creates an invalid encoding error.
    pub fn invalid_encoding(message: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            message: message.into(),
        }
    }

    /// Creates an invariant violation error.
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Returns whether the error reports a missing word or definition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::WordNotFound { .. } | Self::DefinitionOutOfRange { .. }
        )
    }
}
